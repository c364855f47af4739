//! Note-name <-> pitch-number conversion
//!
//! Pitch numbers follow the MIDI convention: C in octave -1 is 0, so
//! `pitch = pitch_class_index + (octave + 1) * 12` and middle C ("C4") is 60.
//! The codec accepts flat spellings and the common enharmonic respellings
//! (E#, B#, Cb, Fb) on input; output spelling is chosen by [`Spelling`].

use crate::error::ChordError;
use serde::Serialize;

/// Sharp spellings for the 12 pitch classes, indexed by semitone from C.
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings for the 12 pitch classes, indexed by semitone from C.
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which spelling table to use when converting a pitch number back to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharp,
    Flat,
}

/// Map a flat or irregular spelling to its sharp-table equivalent.
fn enharmonic_equivalent(spelling: &str) -> Option<&'static str> {
    match spelling {
        "Db" => Some("C#"),
        "Eb" => Some("D#"),
        "Fb" => Some("E"),
        "Gb" => Some("F#"),
        "Ab" => Some("G#"),
        "Bb" => Some("A#"),
        "Cb" => Some("B"),
        "E#" => Some("F"),
        "B#" => Some("C"),
        _ => None,
    }
}

/// Split a note name into its pitch-class spelling and octave number.
///
/// The longest trailing run of characters that parses as a signed integer is
/// the octave, so negative and multi-digit octaves work: `"C-1"` splits into
/// `("C", -1)` and `"A10"` into `("A", 10)`.
pub(crate) fn split_note(name: &str) -> Result<(&str, i32), ChordError> {
    for (i, _) in name.char_indices().skip(1) {
        if let Ok(octave) = name[i..].parse::<i32>() {
            return Ok((&name[..i], octave));
        }
    }
    Err(ChordError::UnknownPitchClass {
        note: name.to_string(),
    })
}

/// Parse a note name like `"F4"`, `"Bb3"`, or `"C#-1"` into a pitch number.
///
/// # Examples
/// ```
/// use chordgen::note_to_pitch;
///
/// assert_eq!(note_to_pitch("C4").unwrap(), 60);
/// assert_eq!(note_to_pitch("Db4").unwrap(), note_to_pitch("C#4").unwrap());
/// ```
///
/// # Errors
/// Returns [`ChordError::UnknownPitchClass`] when the spelling is neither a
/// natural/sharp name nor a known enharmonic equivalent, or when no octave
/// number is present.
pub fn note_to_pitch(name: &str) -> Result<i32, ChordError> {
    let (raw, octave) = split_note(name)?;
    let spelling = enharmonic_equivalent(raw).unwrap_or(raw);

    let index = SHARP_NAMES
        .iter()
        .position(|&n| n == spelling)
        .ok_or_else(|| ChordError::UnknownPitchClass {
            note: name.to_string(),
        })?;

    Ok(index as i32 + (octave + 1) * 12)
}

/// Spell a pitch number as a note name with its octave suffix.
///
/// The inverse of [`note_to_pitch`] up to enharmonic spelling: a flat input
/// spelled back with `Spelling::Sharp` changes spelling, never pitch.
/// Floor-division semantics keep negative pitches correct (`-1` is "B-2").
pub fn pitch_to_note(pitch: i32, spelling: Spelling) -> String {
    let octave = pitch.div_euclid(12) - 1;
    format!("{}{}", pitch_class_name(pitch, spelling), octave)
}

/// The octave-free spelling of a pitch's class.
pub fn pitch_class_name(pitch: i32, spelling: Spelling) -> &'static str {
    let names = match spelling {
        Spelling::Sharp => &SHARP_NAMES,
        Spelling::Flat => &FLAT_NAMES,
    };
    names[pitch.rem_euclid(12) as usize]
}
