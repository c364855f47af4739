//! Chord inversions
//!
//! An inversion rotates a chord so a non-root member becomes the bass,
//! raising the displaced pitches by an octave. The pitch-class content is
//! unchanged; only the octave placement moves.

/// Apply the `n`-th inversion to a pitch sequence, returning a new sequence.
///
/// `n` is normalized modulo the chord length, so any non-negative count is
/// valid and inversion `len` wraps back to root position unchanged.
/// Inversion 0 (and the empty chord) is the identity.
///
/// # Examples
/// ```
/// use chordgen::invert;
///
/// // First inversion of C major: E becomes the bass, C moves up an octave
/// assert_eq!(invert(&[60, 64, 67], 1), vec![64, 67, 72]);
/// assert_eq!(invert(&[60, 64, 67], 0), vec![60, 64, 67]);
/// ```
pub fn invert(pitches: &[i32], n: usize) -> Vec<i32> {
    if n == 0 || pitches.is_empty() {
        return pitches.to_vec();
    }

    let len = pitches.len();
    let k = n % len;

    let mut inverted: Vec<i32> = Vec::with_capacity(len);
    inverted.extend_from_slice(&pitches[k..]);
    inverted.extend_from_slice(&pitches[..k]);

    // The k pitches moved from front to back go up an octave so the new
    // bass stays the lowest pitch.
    for p in &mut inverted[len - k..] {
        *p += 12;
    }

    inverted
}
