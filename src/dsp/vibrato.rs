//! Scans recent history for sinusoidal modulation of cents error within a
//! singer-plausible rate band.

use crate::constants::{
    VIBRATO_CENTS_PER_CYCLE, VIBRATO_DEPTH_FLOOR_CENTS, VIBRATO_MIN_HISTORY, VIBRATO_RATE_MAX_HZ,
    VIBRATO_RATE_MIN_HZ,
};
use crate::history::HistoryRing;

/// A detected vibrato modulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibratoOutput {
    pub rate_hz: f64,
    pub depth_cents: f64,
}

/// Detect vibrato over `history`, relative to `current_timestamp_ms` (the
/// timestamp of the frame currently being produced). Returns `None` when
/// history is too short or the modulation falls outside the plausible band.
pub fn detect_vibrato(history: &HistoryRing, current_timestamp_ms: f64) -> Option<VibratoOutput> {
    if history.count() < VIBRATO_MIN_HISTORY {
        return None;
    }

    let mut min_c = f64::INFINITY;
    let mut max_c = f64::NEG_INFINITY;
    let mut oldest_t = f64::INFINITY;
    for entry in history.iter_oldest_to_newest() {
        min_c = min_c.min(entry.cents_error);
        max_c = max_c.max(entry.cents_error);
        oldest_t = oldest_t.min(entry.timestamp_ms);
    }

    let duration_s = ((current_timestamp_ms - oldest_t) / 1000.0).max(1e-6);
    let depth_cents = (max_c - min_c) / 2.0;
    let cycles_estimate = ((max_c - min_c) / VIBRATO_CENTS_PER_CYCLE).max(0.0);
    let rate_hz = cycles_estimate / duration_s;

    if depth_cents > VIBRATO_DEPTH_FLOOR_CENTS
        && rate_hz >= VIBRATO_RATE_MIN_HZ
        && rate_hz <= VIBRATO_RATE_MAX_HZ
    {
        Some(VibratoOutput { rate_hz, depth_cents })
    } else {
        None
    }
}
