//! MIDI track writer
//!
//! Writes a chord as a single-track Standard MIDI File: every pitch starts
//! at time 0 and sounds for the given number of beats at a fixed velocity,
//! with the tempo pinned to 60 BPM so one beat is one second.

use crate::error::TrackError;
use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent};
use std::path::Path;

/// Ticks per quarter note in the output file.
const TICKS_PER_QUARTER: u16 = 480;

/// Fixed tempo: 60 BPM, one quarter note per second.
const TEMPO_BPM: u32 = 60;

/// Fixed NoteOn velocity.
const VELOCITY: u8 = 100;

/// Default chord duration in beats.
pub const DEFAULT_DURATION_BEATS: f64 = 4.0;

/// Write `pitches` as one simultaneous chord lasting `duration_beats`.
///
/// # Errors
/// Returns [`TrackError::PitchOutOfRange`] if any pitch falls outside the
/// 7-bit MIDI key range; nothing is written in that case. I/O failures
/// surface as [`TrackError::Io`].
pub fn write_chord(path: &Path, pitches: &[i32], duration_beats: f64) -> Result<(), TrackError> {
    let keys: Vec<u8> = pitches
        .iter()
        .map(|&p| {
            if (0..=127).contains(&p) {
                Ok(p as u8)
            } else {
                Err(TrackError::PitchOutOfRange(p))
            }
        })
        .collect::<Result<_, _>>()?;

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    let mut track: Track<'static> = Vec::new();
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: midly::TrackEventKind::Meta(MetaMessage::TrackName(b"Chord Track")),
    });
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: midly::TrackEventKind::Meta(MetaMessage::Tempo(u24::new(
            60_000_000 / TEMPO_BPM,
        ))),
    });

    // All notes start together at tick 0
    for &key in &keys {
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: midly::TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOn {
                    key: u7::new(key),
                    vel: u7::new(VELOCITY),
                },
            },
        });
    }

    // First NoteOff carries the whole duration; the rest follow at delta 0
    let duration_ticks = (duration_beats * TICKS_PER_QUARTER as f64).round() as u32;
    for (i, &key) in keys.iter().enumerate() {
        let delta = if i == 0 { duration_ticks } else { 0 };
        track.push(TrackEvent {
            delta: u28::new(delta),
            kind: midly::TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOff {
                    key: u7::new(key),
                    vel: u7::new(0),
                },
            },
        });
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: midly::TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    std::fs::write(path, &buf)?;
    Ok(())
}
