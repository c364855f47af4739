//! Chord construction
//!
//! Combines the pitch codec and the chord catalog: a root note name and a
//! chord-type id become an absolute pitch sequence plus a spelling
//! preference for labeling and display.

use crate::catalog::intervals;
use crate::error::ChordError;
use crate::pitch::{note_to_pitch, split_note, Spelling};
use serde::Serialize;

/// A chord realized on a concrete root, immutable once built.
///
/// `pitches` is ascending, root first; inversions are produced as new
/// sequences so the root-position form stays available for labeling.
#[derive(Debug, Clone, Serialize)]
pub struct Chord {
    pub root_pitch: i32,
    pub pitches: Vec<i32>,
    pub spelling: Spelling,
}

impl Chord {
    /// Build a chord from a root note name and a chord-type id.
    ///
    /// The spelling preference follows the convention of the chord symbol:
    /// flat when the root is spelled with a flat, sharp when it is spelled
    /// with a sharp. Accidental-free roots spell flat, except augmented
    /// chords which conventionally spell sharp. This is a display
    /// heuristic, not a full key-aware spelling rule.
    ///
    /// # Examples
    /// ```
    /// use chordgen::Chord;
    ///
    /// let chord = Chord::build("C4", "maj").unwrap();
    /// assert_eq!(chord.pitches, vec![60, 64, 67]);
    /// ```
    ///
    /// # Errors
    /// Propagates [`ChordError::UnknownPitchClass`] from the root parse and
    /// returns [`ChordError::UnknownChordType`] for ids not in the catalog.
    pub fn build(root: &str, chord_type: &str) -> Result<Chord, ChordError> {
        let root_pitch = note_to_pitch(root)?;
        let set = intervals(chord_type)
            .ok_or_else(|| ChordError::UnknownChordType(chord_type.to_string()))?;

        let pitches = set.iter().map(|&i| root_pitch + i as i32).collect();

        let (root_spelling, _) = split_note(root)?;
        let has_flat = root_spelling.contains('b');
        let has_accidental = has_flat || root_spelling.contains('#');
        let augmented = chord_type == "aug" || chord_type == "aug7";
        let spelling = if has_flat || (!has_accidental && !augmented) {
            Spelling::Flat
        } else {
            Spelling::Sharp
        };

        Ok(Chord {
            root_pitch,
            pitches,
            spelling,
        })
    }
}
