//! Pure frequency/semitone conversions. No state, no allocation, defined for
//! every input — callers are responsible for guarding log arguments.

/// Convert a frequency in Hz to a floating-point MIDI semitone, relative to
/// `a4` (the Hz value assigned to semitone 69).
///
/// Undefined for `hz <= 0.0` or `a4 <= 0.0` in the sense that the result will
/// be non-finite; callers must check `is_finite_positive` first.
pub fn hz_to_midi(hz: f64, a4: f64) -> f64 {
    69.0 + 12.0 * (hz / a4).log2()
}

/// Convert a floating-point MIDI semitone back to Hz, relative to `a4`.
pub fn midi_to_hz(midi: f64, a4: f64) -> f64 {
    a4 * 2f64.powf((midi - 69.0) / 12.0)
}

/// True iff `x` is finite and strictly greater than zero.
pub fn is_finite_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
