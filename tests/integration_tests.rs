//! Integration tests for the chordgen pipeline
//!
//! Exercises the full build -> invert -> label -> write path the way the
//! CLI drives it.

use chordgen::{invert, note_to_pitch, realize, write_chord, Spelling, CHORD_TYPES};

#[test]
fn test_c_major_root_position() {
    let r = realize("C4", "maj", 0).unwrap();
    assert_eq!(r.chord.pitches, vec![60, 64, 67]);
    assert_eq!(r.pitches, vec![60, 64, 67]);
    assert_eq!(r.chord.spelling, Spelling::Flat);
    assert_eq!(r.label, "C4maj");
    assert_eq!(r.note_names(), vec!["C4", "E4", "G4"]);
}

#[test]
fn test_c_major_first_inversion() {
    let r = realize("C4", "maj", 1).unwrap();
    assert_eq!(r.pitches, vec![64, 67, 72]);
    assert_eq!(r.label, "C4maj_E");
}

#[test]
fn test_fsharp_dom7() {
    let r = realize("F#3", "dom7", 0).unwrap();
    assert_eq!(r.pitches, vec![54, 58, 61, 64]);
    assert_eq!(r.chord.spelling, Spelling::Sharp);
    assert_eq!(r.label, "F#3dom7");
}

#[test]
fn test_bflat_aug_spells_flat() {
    // A flat root overrides the augmented-chords-spell-sharp rule
    let r = realize("Bb3", "aug", 1).unwrap();
    assert_eq!(r.chord.spelling, Spelling::Flat);
    assert_eq!(r.note_names()[0], "D4");
    assert_eq!(r.label, "Bb3aug_D");
}

#[test]
fn test_inversion_multiple_of_length_labels_root_position() {
    // Modulo normalization makes inversion 3 of a triad root position
    let r = realize("C4", "maj", 3).unwrap();
    assert_eq!(r.pitches, vec![60, 64, 67]);
    assert_eq!(r.label, "C4maj");
}

#[test]
fn test_every_chord_type_realizes_on_every_root() {
    for root in ["C4", "F#3", "Bb3", "Eb2", "A-1"] {
        for ty in CHORD_TYPES {
            let r = realize(root, ty, 0).unwrap();
            assert_eq!(r.pitches[0], note_to_pitch(root).unwrap());
            assert!(r.label.starts_with(root), "label {} for {root} {ty}", r.label);
        }
    }
}

#[test]
fn test_inversions_preserve_pitch_classes() {
    let r = realize("A3", "m9", 0).unwrap();
    let mut original: Vec<i32> = r.pitches.iter().map(|p| p.rem_euclid(12)).collect();
    original.sort_unstable();
    for n in 0..8 {
        let mut inverted: Vec<i32> = invert(&r.pitches, n)
            .iter()
            .map(|p| p.rem_euclid(12))
            .collect();
        inverted.sort_unstable();
        assert_eq!(inverted, original);
    }
}

#[test]
fn test_unknown_inputs_fail_cleanly() {
    assert!(realize("Q4", "maj", 0).is_err());
    assert!(realize("C4", "power", 0).is_err());
}

#[test]
fn test_write_realized_chord_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let r = realize("C4", "maj", 1).unwrap();
    let path = dir.path().join(format!("{}.mid", r.label));

    write_chord(&path, &r.pitches, 4.0).unwrap();

    assert_eq!(path.file_name().unwrap(), "C4maj_E.mid");
    let bytes = std::fs::read(&path).unwrap();
    let smf = midly::Smf::parse(&bytes).unwrap();
    assert_eq!(smf.tracks.len(), 1);
}

#[test]
fn test_json_serialization_shape() {
    let r = realize("C4", "maj", 1).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["label"], "C4maj_E");
    assert_eq!(json["inversion"], 1);
    assert_eq!(json["pitches"][0], 64);
    assert_eq!(json["chord"]["spelling"], "flat");
}
