//! Confidence mixing: blends the analyzer's periodicity score with a
//! short-horizon pitch stability score computed from recent history.

use crate::constants::{
    CONFIDENCE_PERIODICITY_WEIGHT, CONFIDENCE_STABILITY_WEIGHT, STABILITY_MIN_HISTORY,
    STABILITY_RMS_CENTS_SCALE,
};
use crate::history::HistoryRing;

/// RMS-cents stability score over history, per the component design. Returns
/// 1.0 both when history is too short to judge and when no entry in a
/// sufficiently long history carries a positive frequency — there is no
/// evidence of instability in either case.
pub fn stability_score(history: &HistoryRing) -> f64 {
    if history.count() < STABILITY_MIN_HISTORY {
        return 1.0;
    }

    let mut sum = 0f64;
    let mut k = 0usize;
    for entry in history.iter_oldest_to_newest() {
        if entry.freq_hz > 0.0 {
            sum += entry.freq_hz;
            k += 1;
        }
    }
    if k == 0 {
        return 1.0;
    }
    let mean_freq = sum / k as f64;

    let mut variance_sum = 0f64;
    for entry in history.iter_oldest_to_newest() {
        if entry.freq_hz > 0.0 {
            let cents = 1200.0 * (entry.freq_hz / mean_freq).log2();
            variance_sum += cents * cents;
        }
    }
    let rms_cents = (variance_sum / k as f64).sqrt();
    (1.0 - rms_cents / STABILITY_RMS_CENTS_SCALE).clamp(0.0, 1.0)
}

/// Blend periodicity and stability into the final confidence value.
pub fn mix_confidence(periodicity_score: f64, stability_score: f64) -> f64 {
    (CONFIDENCE_PERIODICITY_WEIGHT * periodicity_score
        + CONFIDENCE_STABILITY_WEIGHT * stability_score)
        .clamp(0.0, 1.0)
}
