//! The tracker façade: owns configuration, timestamp counter, and history;
//! exposes the realtime-safe `create` / `process` / `destroy` contract.

use crate::constants::DEFAULT_A4_HZ;
use crate::dsp::{analyzer, confidence, vibrato};
use crate::history::HistoryRing;
use crate::output::FrameOutput;
use crate::scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable-after-creation tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerConfig {
    /// Reference pitch assigned to integer semitone 69.
    pub a4_reference_hz: f64,
    /// PCM sample rate in Hz.
    pub sample_rate_hz: f64,
    /// Informational; not required by the core algorithm.
    pub frame_size: usize,
    /// Informational; not required by the core algorithm.
    pub hop_size: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            a4_reference_hz: DEFAULT_A4_HZ,
            sample_rate_hz: 48000.0,
            frame_size: 2048,
            hop_size: 1024,
        }
    }
}

impl TrackerConfig {
    fn normalized(self) -> Self {
        Self {
            a4_reference_hz: if scalar::is_finite_positive(self.a4_reference_hz) {
                self.a4_reference_hz
            } else {
                DEFAULT_A4_HZ
            },
            sample_rate_hz: self.sample_rate_hz.max(1.0),
            frame_size: self.frame_size,
            hop_size: self.hop_size,
        }
    }
}

/// An owning, single-threaded pitch tracker. All working storage is
/// fixed-capacity; no field here is heap-allocated. The analyzer's scratch
/// buffers are embedded directly (`analyzer::Scratch`) rather than declared
/// as locals in `process`, so a realtime callback never re-zeroes them.
pub struct Tracker {
    config: TrackerConfig,
    timestamp_ms: f64,
    history: HistoryRing,
    scratch: analyzer::Scratch,
}

impl Tracker {
    /// Create a tracker. Always succeeds; non-finite or non-positive
    /// configuration fields are normalized to their documented defaults.
    pub fn create(config: TrackerConfig) -> Self {
        Self {
            config: config.normalized(),
            timestamp_ms: 0.0,
            history: HistoryRing::new(),
            scratch: analyzer::Scratch::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Process one block of mono PCM samples, producing one output frame.
    ///
    /// Realtime-safe: no allocation, no locking, no I/O, bounded loop counts.
    /// An empty `samples` slice (the count <= 0 / null-pointer case at a C
    /// boundary) returns a zero-timestamp "no pitch" frame and leaves the
    /// tracker's state untouched.
    #[must_use]
    pub fn process(&mut self, samples: &[f32]) -> FrameOutput {
        if samples.is_empty() {
            return FrameOutput::no_pitch(0.0);
        }

        let start_timestamp = self.timestamp_ms;
        let sample_rate_hz = self.config.sample_rate_hz;
        let advance_ms = 1000.0 * samples.len() as f64 / sample_rate_hz;

        let estimate = analyzer::analyze(samples, sample_rate_hz, &mut self.scratch);

        let frame = match estimate {
            None => FrameOutput::no_pitch(start_timestamp),
            Some(result) => {
                let a4 = self.config.a4_reference_hz;
                let midi_float = scalar::hz_to_midi(result.freq_hz, a4);
                let nearest_midi_f = midi_float.round();
                let cents_error = (midi_float - nearest_midi_f) * 100.0;

                let stability = confidence::stability_score(&self.history);
                let conf = confidence::mix_confidence(result.periodicity_score, stability);

                if cents_error.is_finite() {
                    self.history
                        .append(cents_error, start_timestamp, result.freq_hz);
                }

                let vibrato_result = vibrato::detect_vibrato(&self.history, start_timestamp);

                FrameOutput {
                    timestamp_ms: start_timestamp,
                    freq_hz: result.freq_hz,
                    midi_float,
                    nearest_midi: nearest_midi_f.clamp(0.0, 127.0) as i32,
                    cents_error,
                    confidence: conf,
                    vibrato_detected: vibrato_result.is_some(),
                    vibrato_rate_hz: vibrato_result.map_or(f64::NAN, |v| v.rate_hz),
                    vibrato_depth_cents: vibrato_result.map_or(f64::NAN, |v| v.depth_cents),
                }
            }
        };

        self.timestamp_ms += advance_ms;
        frame
    }

    /// Release the tracker. A plain method for symmetry with the `create` /
    /// `process` / `destroy` contract; ownership rules already guarantee
    /// cleanup once `self` is dropped.
    pub fn destroy(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq_hz: f64, sample_rate_hz: f64, n: usize, amplitude: f32) -> Vec<f32> {
        (0..n)
            .map(|i| {
                let t = i as f64 / sample_rate_hz;
                (amplitude as f64 * (2.0 * PI * freq_hz * t).sin()) as f32
            })
            .collect()
    }

    fn config() -> TrackerConfig {
        TrackerConfig {
            a4_reference_hz: 440.0,
            sample_rate_hz: 48000.0,
            frame_size: 2048,
            hop_size: 1024,
        }
    }

    #[test]
    fn empty_block_returns_zero_timestamp_and_does_not_mutate() {
        let mut tracker = Tracker::create(config());
        let frame = tracker.process(&[]);
        assert_eq!(frame.timestamp_ms, 0.0);
        assert_eq!(frame.confidence, 0.0);
        assert_eq!(frame.nearest_midi, -1);
        assert_eq!(tracker.timestamp_ms, 0.0);
    }

    #[test]
    fn timestamp_advances_by_count_over_sample_rate() {
        let mut tracker = Tracker::create(config());
        let samples = vec![0.0f32; 1024];
        let frame1 = tracker.process(&samples);
        assert_eq!(frame1.timestamp_ms, 0.0);
        let frame2 = tracker.process(&samples);
        assert!((frame2.timestamp_ms - 1000.0 * 1024.0 / 48000.0).abs() < 1e-9);
    }

    #[test]
    fn oversize_block_truncates_analysis_but_advances_full_count() {
        let mut tracker = Tracker::create(config());
        let samples = sine(440.0, 48000.0, crate::constants::N_MAX + 500, 0.7);
        let count = samples.len();
        let frame = tracker.process(&samples);
        assert!((frame.freq_hz - 440.0).abs() < 5.0);
        let expected_advance = 1000.0 * count as f64 / 48000.0;
        assert!((tracker.timestamp_ms - expected_advance).abs() < 1e-9);
    }

    #[test]
    fn degenerate_sample_rate_yields_no_pitch_but_advances_timestamp() {
        let mut tracker = Tracker::create(TrackerConfig {
            sample_rate_hz: 1.0,
            ..config()
        });
        let samples = vec![0.5f32; 10];
        let frame = tracker.process(&samples);
        assert!(frame.freq_hz.is_nan());
        assert_eq!(frame.nearest_midi, -1);
        assert!(tracker.timestamp_ms > 0.0);
    }

    #[test]
    fn dc_block_yields_no_pitch() {
        let mut tracker = Tracker::create(config());
        let samples = vec![0.1f32; 1024];
        let frame = tracker.process(&samples);
        assert!(frame.freq_hz.is_nan());
        assert_eq!(frame.confidence, 0.0);
    }

    #[test]
    fn clean_440hz_scenario() {
        let mut tracker = Tracker::create(config());
        let samples = sine(440.0, 48000.0, 1024, 0.7);
        let frame = tracker.process(&samples);
        assert!((frame.freq_hz - 440.0).abs() < 3.5, "got {}", frame.freq_hz);
        assert_eq!(frame.nearest_midi, 69);
        assert!(frame.confidence > 0.7, "confidence was {}", frame.confidence);
    }

    #[test]
    fn silence_after_voiced_drops_confidence_to_zero() {
        let mut tracker = Tracker::create(config());
        let voiced = sine(220.0, 48000.0, 1024, 0.7);
        for _ in 0..20 {
            tracker.process(&voiced);
        }
        let silence = vec![0.1f32; 1024];
        let frame = tracker.process(&silence);
        assert!(frame.freq_hz.is_nan());
        assert_eq!(frame.nearest_midi, -1);
        assert_eq!(frame.confidence, 0.0);
    }

    #[test]
    fn idempotent_under_repeated_zero_blocks() {
        let mut tracker = Tracker::create(config());
        let silence = vec![0.0f32; 1024];
        for _ in 0..50 {
            let frame = tracker.process(&silence);
            assert!(frame.freq_hz.is_nan());
            assert!(!frame.vibrato_detected);
            assert_eq!(frame.confidence, 0.0);
        }
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let tracker = Tracker::create(TrackerConfig {
            a4_reference_hz: -1.0,
            sample_rate_hz: 0.0,
            frame_size: 0,
            hop_size: 0,
        });
        assert_eq!(tracker.config().a4_reference_hz, DEFAULT_A4_HZ);
        assert_eq!(tracker.config().sample_rate_hz, 1.0);
    }

    #[test]
    fn vibrato_emerges_over_consecutive_blocks() {
        let mut tracker = Tracker::create(config());
        let sr = 48000.0;
        let hop = 1024usize;
        let base_freq = 262.0;
        let mod_rate = 5.5;
        let mod_depth = 0.015;
        let mut detected = false;
        let mut t_samples: usize = 0;
        for _ in 0..80 {
            let block: Vec<f32> = (0..hop)
                .map(|i| {
                    let t = (t_samples + i) as f64 / sr;
                    let inst_freq =
                        base_freq * (1.0 + mod_depth * (2.0 * PI * mod_rate * t).sin());
                    let phase = 2.0 * PI * inst_freq * t;
                    (0.7 * phase.sin()) as f32
                })
                .collect();
            t_samples += hop;
            let frame = tracker.process(&block);
            if frame.vibrato_detected {
                detected = true;
                assert!(frame.vibrato_rate_hz >= 3.0 && frame.vibrato_rate_hz <= 9.0);
                assert!(frame.vibrato_depth_cents > 2.0);
                break;
            }
        }
        assert!(detected, "vibrato should eventually be detected");
    }
}
