pub mod catalog;
pub mod chord;
pub mod error;
pub mod inversion;
pub mod midi;
pub mod notation;
pub mod pitch;

pub use catalog::{intervals, CHORD_TYPES};
pub use chord::Chord;
pub use error::{ChordError, TrackError};
pub use inversion::invert;
pub use midi::{write_chord, DEFAULT_DURATION_BEATS};
pub use notation::inversion_label;
pub use pitch::{note_to_pitch, pitch_to_note, Spelling};

use serde::Serialize;

/// A chord realized with a concrete inversion: the full build -> invert ->
/// label pipeline output.
#[derive(Debug, Clone, Serialize)]
pub struct Realization {
    pub chord: Chord,
    pub inversion: usize,
    /// The inverted pitch sequence, lowest (bass) first.
    pub pitches: Vec<i32>,
    /// Display label, also used as the output file stem.
    pub label: String,
}

impl Realization {
    /// The spelled note names of the inverted chord, bass first.
    pub fn note_names(&self) -> Vec<String> {
        self.pitches
            .iter()
            .map(|&p| pitch_to_note(p, self.chord.spelling))
            .collect()
    }
}

/// Realize a chord: build it on `root`, apply the `inversion`-th inversion,
/// and derive its label.
///
/// This is the main entry point for the library.
///
/// # Examples
/// ```
/// use chordgen::realize;
///
/// let r = realize("C4", "maj", 1)?;
/// assert_eq!(r.pitches, vec![64, 67, 72]);
/// assert_eq!(r.label, "C4maj_E");
/// # Ok::<(), chordgen::ChordError>(())
/// ```
///
/// # Errors
/// Returns [`ChordError`] when the root spelling or chord type is unknown.
/// Any inversion count is accepted; it is normalized modulo the chord
/// length.
pub fn realize(root: &str, chord_type: &str, inversion: usize) -> Result<Realization, ChordError> {
    let chord = Chord::build(root, chord_type)?;
    let pitches = invert(&chord.pitches, inversion);
    let label = inversion_label(root, chord_type, &pitches, chord.spelling);
    Ok(Realization {
        chord,
        inversion,
        pitches,
        label,
    })
}
