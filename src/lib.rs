//! Realtime monophonic pitch tracker for singing voice.
//!
//! The core is a per-frame pitch analyzer: a normalized-difference-function
//! estimator with sub-sample lag refinement, a confidence model blending
//! periodicity and short-horizon pitch stability, and a windowed vibrato
//! detector over recent history. `process` is realtime-safe: no allocation,
//! no locking, no I/O, bounded loop counts.
//!
//! ```
//! use tonetrack::{Tracker, TrackerConfig};
//!
//! let mut tracker = Tracker::create(TrackerConfig {
//!     sample_rate_hz: 48000.0,
//!     ..TrackerConfig::default()
//! });
//! let silence = vec![0.0f32; 1024];
//! let frame = tracker.process(&silence);
//! assert!(frame.freq_hz.is_nan());
//! ```

pub mod constants;
pub mod dsp;
pub mod history;
pub mod output;
pub mod scalar;
pub mod tracker;

#[cfg(feature = "capi")]
pub mod ffi;

pub use output::FrameOutput;
pub use tracker::{Tracker, TrackerConfig};
