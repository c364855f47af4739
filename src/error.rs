use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ChordError {
    #[error("Unknown pitch class in note '{note}'")]
    UnknownPitchClass { note: String },

    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),
}

/// Failures from the MIDI track writer. Kept separate from [`ChordError`]
/// because MIDI-range validity is the writer's concern, not the theory core's.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Pitch {0} is outside the MIDI range 0..=127")]
    PitchOutOfRange(i32),

    #[error("Failed to write MIDI file: {0}")]
    Io(#[from] std::io::Error),
}
