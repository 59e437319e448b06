//! The per-call output record and its sentinel-value interoperability
//! contract. Internally the tracker works with `Option<T>`; conversion to
//! NaN/-1 sentinels happens only here, at the boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One analysis frame, produced by a single `Tracker::process` call.
///
/// "Unavailable" real values are encoded as NaN; `nearest_midi` unavailability
/// is encoded as -1. `confidence` and `timestamp_ms` are always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameOutput {
    pub timestamp_ms: f64,
    pub freq_hz: f64,
    pub midi_float: f64,
    pub nearest_midi: i32,
    pub cents_error: f64,
    pub confidence: f64,
    pub vibrato_detected: bool,
    pub vibrato_rate_hz: f64,
    pub vibrato_depth_cents: f64,
}

impl FrameOutput {
    /// The canonical "no pitch" frame at a given timestamp: every optional
    /// field is the appropriate sentinel, confidence is exactly zero.
    pub fn no_pitch(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            freq_hz: f64::NAN,
            midi_float: f64::NAN,
            nearest_midi: -1,
            cents_error: f64::NAN,
            confidence: 0.0,
            vibrato_detected: false,
            vibrato_rate_hz: f64::NAN,
            vibrato_depth_cents: f64::NAN,
        }
    }
}
