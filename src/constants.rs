//! Tuning constants for the pitch tracker, grouped in one place so nothing
//! downstream re-derives a magic number from scratch.

/// Maximum samples analyzed per block. Blocks larger than this are
/// truncated for analysis (the timestamp still advances by the full count).
pub const N_MAX: usize = 4096;

/// History ring capacity, in entries.
pub const HISTORY_CAPACITY: usize = 64;

/// Lower bound of the detectable fundamental frequency range (Hz).
pub const MIN_FREQ_HZ: f64 = 80.0;

/// Upper bound of the detectable fundamental frequency range (Hz).
pub const MAX_FREQ_HZ: f64 = 1100.0;

/// Below this summed squared energy, a block is treated as silence/DC.
pub const SILENCE_ENERGY_GATE: f64 = 1e-8;

/// Floor under which the CMNDF running sum is treated as degenerate.
pub const CMNDF_RUNNING_SUM_FLOOR: f64 = 1e-12;

/// CMNDF value below which a lag is accepted as a voiced candidate.
pub const CMNDF_THRESHOLD: f64 = 0.12;

/// Floor under which the parabolic-refinement denominator is treated as
/// degenerate (falls back to the unrefined integer lag).
pub const PARABOLA_DENOM_FLOOR: f64 = 1e-12;

/// Weight of the periodicity term in the confidence mix.
pub const CONFIDENCE_PERIODICITY_WEIGHT: f64 = 0.7;

/// Weight of the stability term in the confidence mix.
pub const CONFIDENCE_STABILITY_WEIGHT: f64 = 0.3;

/// History must hold at least this many entries before the stability score
/// is computed from RMS cents rather than defaulted to 1.0.
pub const STABILITY_MIN_HISTORY: usize = 4;

/// RMS-cents value at which the stability score reaches zero.
pub const STABILITY_RMS_CENTS_SCALE: f64 = 45.0;

/// History must hold at least this many entries before vibrato is scanned.
pub const VIBRATO_MIN_HISTORY: usize = 8;

/// Assumed cents swing per vibrato cycle, used to turn a cents range into a
/// cycle count. Preserved exactly per the spec's compatibility decision —
/// see DESIGN.md for the alternative (zero-crossing rate) that was rejected.
pub const VIBRATO_CENTS_PER_CYCLE: f64 = 20.0;

/// Lower bound of the singer-plausible vibrato rate band (Hz).
pub const VIBRATO_RATE_MIN_HZ: f64 = 3.0;

/// Upper bound of the singer-plausible vibrato rate band (Hz).
pub const VIBRATO_RATE_MAX_HZ: f64 = 9.0;

/// Minimum cents depth for a modulation to be called vibrato rather than
/// ordinary pitch noise.
pub const VIBRATO_DEPTH_FLOOR_CENTS: f64 = 2.0;

/// A4 reference used when the caller supplies a non-finite or non-positive
/// value in `TrackerConfig`.
pub const DEFAULT_A4_HZ: f64 = 440.0;
