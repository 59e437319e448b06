//! Thin `extern "C"` facade mirroring the original `pt_dsp_*` C ABI, for
//! foreign callers that need an opaque handle rather than an owned value.
//! Internal code never uses this module; it exists purely at the boundary.

use crate::output::FrameOutput;
use crate::tracker::{Tracker, TrackerConfig};

/// C-ABI mirror of `FrameOutput`. Field order and types match the original
/// `DSPFrameOutput` struct.
#[repr(C)]
pub struct DspFrameOutput {
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

impl From<FrameOutput> for DspFrameOutput {
    fn from(f: FrameOutput) -> Self {
        Self {
            timestamp_ms: f.timestamp_ms,
            freq_hz: f.freq_hz,
            midi_float: f.midi_float,
            nearest_midi: f.nearest_midi,
            cents_error: f.cents_error,
            confidence: f.confidence,
            vibrato_detected: f.vibrato_detected,
            vibrato_rate_hz: f.vibrato_rate_hz,
            vibrato_depth_cents: f.vibrato_depth_cents,
        }
    }
}

/// C-ABI mirror of `TrackerConfig`. `sample_rate_hz`, `frame_size`, and
/// `hop_size` are `int` on the C side; negative values are clamped the same
/// way non-finite values are on the Rust side.
#[repr(C)]
pub struct DspConfig {
    pub a4_hz: f64,
    pub sample_rate_hz: i32,
    pub frame_size: i32,
    pub hop_size: i32,
}

impl From<DspConfig> for TrackerConfig {
    fn from(cfg: DspConfig) -> Self {
        Self {
            a4_reference_hz: cfg.a4_hz,
            sample_rate_hz: cfg.sample_rate_hz.max(0) as f64,
            frame_size: cfg.frame_size.max(0) as usize,
            hop_size: cfg.hop_size.max(0) as usize,
        }
    }
}

/// Create a tracker and hand back an owning raw pointer.
///
/// # Safety
/// The returned pointer must be passed to exactly one of `pt_dsp_process` /
/// `pt_dsp_destroy` at a time, from a single thread, and must eventually be
/// released with `pt_dsp_destroy`.
#[no_mangle]
pub unsafe extern "C" fn pt_dsp_create(cfg: DspConfig) -> *mut Tracker {
    Box::into_raw(Box::new(Tracker::create(cfg.into())))
}

/// Release a tracker created by `pt_dsp_create`. Idempotent-safe for null.
///
/// # Safety
/// `dsp` must be either null or a pointer previously returned by
/// `pt_dsp_create` that has not already been destroyed.
#[no_mangle]
pub unsafe extern "C" fn pt_dsp_destroy(dsp: *mut Tracker) {
    if dsp.is_null() {
        return;
    }
    drop(Box::from_raw(dsp));
}

/// Feed `num_samples` mono float PCM samples and receive one frame.
///
/// A null handle, null sample pointer, or non-positive `num_samples` returns
/// a zero-timestamp "no pitch" frame and leaves the tracker untouched.
///
/// # Safety
/// `dsp` must be a valid pointer from `pt_dsp_create` (or null). If non-null,
/// `mono_samples` must point to at least `num_samples` valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn pt_dsp_process(
    dsp: *mut Tracker,
    mono_samples: *const f32,
    num_samples: i32,
) -> DspFrameOutput {
    if dsp.is_null() || mono_samples.is_null() || num_samples <= 0 {
        return FrameOutput::no_pitch(0.0).into();
    }
    let samples = std::slice::from_raw_parts(mono_samples, num_samples as usize);
    let tracker = &mut *dsp;
    tracker.process(samples).into()
}
