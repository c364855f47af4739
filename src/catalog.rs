//! Chord catalog: chord-type identifiers and their interval sets
//!
//! The single source of truth for chord shapes. Consumers key output file
//! names and labels off these identifiers, so the table must stay stable.
//! Intervals are semitone offsets from the root, strictly increasing,
//! always starting at 0.

/// Every chord type the catalog knows, in menu order.
pub const CHORD_TYPES: &[&str] = &[
    "maj", "maj7", "maj9", "maj11", "maj13", "m", "m7", "m9", "m11", "m13", "dom7", "dom9",
    "dom11", "dom13", "sus2", "sus4", "aug", "aug7", "dim", "dim7", "m7b5", "add2", "add6", "m6",
];

/// Look up the interval set for a chord type.
///
/// Returns `None` for identifiers not in the catalog.
///
/// # Examples
/// ```
/// use chordgen::intervals;
///
/// assert_eq!(intervals("maj"), Some(&[0, 4, 7][..]));
/// assert_eq!(intervals("m7b5"), Some(&[0, 3, 6, 10][..]));
/// assert_eq!(intervals("power"), None);
/// ```
pub fn intervals(chord_type: &str) -> Option<&'static [u8]> {
    let set: &'static [u8] = match chord_type {
        // Triads
        "maj" => &[0, 4, 7],
        "m" => &[0, 3, 7],
        "dim" => &[0, 3, 6],
        "aug" => &[0, 4, 8],
        "sus2" => &[0, 2, 7],
        "sus4" => &[0, 5, 7],

        // Sixths and added tones
        "add2" => &[0, 2, 4, 7],
        "add6" => &[0, 4, 7, 9],
        "m6" => &[0, 3, 7, 9],

        // Dominant
        "dom7" => &[0, 4, 7, 10],
        "dom9" => &[0, 4, 7, 10, 14],
        "dom11" => &[0, 4, 7, 10, 14, 17],
        "dom13" => &[0, 4, 7, 10, 14, 17, 21],

        // Major
        "maj7" => &[0, 4, 7, 11],
        "maj9" => &[0, 4, 7, 11, 14],
        "maj11" => &[0, 4, 7, 11, 14, 17],
        "maj13" => &[0, 4, 7, 11, 14, 17, 21],

        // Minor
        "m7" => &[0, 3, 7, 10],
        "m9" => &[0, 3, 7, 10, 14],
        "m11" => &[0, 3, 7, 10, 14, 17],
        "m13" => &[0, 3, 7, 10, 14, 17, 21],

        // Diminished, half-diminished, augmented seventh
        "dim7" => &[0, 3, 6, 9],
        "m7b5" => &[0, 3, 6, 10],
        "aug7" => &[0, 4, 8, 10],

        _ => return None,
    };
    Some(set)
}
