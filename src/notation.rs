//! Chord labels
//!
//! Derives the display label for a (possibly inverted) chord. Root-position
//! chords label as `{root}{type}`; inversions whose bass differs from the
//! root get slash-chord form `{root}{type}_{bass}`, with an underscore so
//! the label is usable as a file name.

use crate::pitch::{pitch_class_name, split_note, Spelling};

/// Derive the label for a chord built on `root` after inversion.
///
/// The bass of `inverted` is spelled with the chord's preference and
/// compared against the root by pitch-class spelling only (octaves are
/// ignored), so an inversion count that is a multiple of the chord length
/// labels as root position.
///
/// # Examples
/// ```
/// use chordgen::{inversion_label, Spelling};
///
/// let label = inversion_label("C4", "maj", &[64, 67, 72], Spelling::Flat);
/// assert_eq!(label, "C4maj_E");
/// ```
pub fn inversion_label(
    root: &str,
    chord_type: &str,
    inverted: &[i32],
    spelling: Spelling,
) -> String {
    let Some(&bass) = inverted.first() else {
        return format!("{root}{chord_type}");
    };

    let bass_name = pitch_class_name(bass, spelling);
    let root_name = split_note(root).map(|(name, _)| name).unwrap_or(root);

    if bass_name == root_name {
        format!("{root}{chord_type}")
    } else {
        format!("{root}{chord_type}_{bass_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::Chord;
    use crate::inversion::invert;

    #[test]
    fn test_root_position_label() {
        let chord = Chord::build("C4", "maj").unwrap();
        let label = inversion_label("C4", "maj", &chord.pitches, chord.spelling);
        assert_eq!(label, "C4maj");
    }

    #[test]
    fn test_slash_chord_label() {
        let chord = Chord::build("C4", "maj").unwrap();
        let inverted = invert(&chord.pitches, 1);
        let label = inversion_label("C4", "maj", &inverted, chord.spelling);
        assert_eq!(label, "C4maj_E");
    }

    #[test]
    fn test_slash_chord_respects_spelling_preference() {
        // C minor spells flat, so the third is Eb not D#
        let chord = Chord::build("C4", "m").unwrap();
        let inverted = invert(&chord.pitches, 1);
        let label = inversion_label("C4", "m", &inverted, chord.spelling);
        assert_eq!(label, "C4m_Eb");
    }

    #[test]
    fn test_full_cycle_labels_as_root_position() {
        // Inversion == chord length restores the root pitch class in the bass
        let chord = Chord::build("F#3", "dom7").unwrap();
        let inverted = invert(&chord.pitches, 4);
        let label = inversion_label("F#3", "dom7", &inverted, chord.spelling);
        assert_eq!(label, "F#3dom7");
    }

    #[test]
    fn test_sharp_spelled_bass() {
        let chord = Chord::build("F#3", "dom7").unwrap();
        let inverted = invert(&chord.pitches, 1);
        let label = inversion_label("F#3", "dom7", &inverted, chord.spelling);
        assert_eq!(label, "F#3dom7_A#");
    }

    #[test]
    fn test_empty_pitches_degenerate_guard() {
        assert_eq!(inversion_label("C4", "maj", &[], Spelling::Flat), "C4maj");
    }

    #[test]
    fn test_enharmonic_root_never_matches_bass() {
        // "Cb" is accepted on input but the codec never emits it, so the
        // uninverted chord still labels as a slash chord on B
        let chord = Chord::build("Cb4", "maj").unwrap();
        let label = inversion_label("Cb4", "maj", &chord.pitches, chord.spelling);
        assert_eq!(label, "Cb4maj_B");
    }
}
