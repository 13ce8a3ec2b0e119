//! Core signal-processing for transient-pressure-reflection (TPR) fingerprinting.
//!
//! The modules take a raw downhole pressure trace, denoise it with a recursive
//! estimator, subtract the expected exponential decay, and report reflections
//! ("echoes") that stand out of the residual. The crate is format-agnostic and
//! does no I/O; callers hand in samples and plain scalar configuration.

pub mod math;
pub mod prelude;
pub mod processing;

use serde::{Deserialize, Serialize};

/// One telemetry sample: elapsed time in seconds and gauge pressure in PSI.
///
/// Samples are caller-owned and never mutated; the pipeline requires strictly
/// increasing `time` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub time: f64,
    pub raw_pressure: f64,
}

impl TelemetrySample {
    pub fn new(time: f64, raw_pressure: f64) -> Self {
        Self { time, raw_pressure }
    }
}

/// Parameters of the expected pressure-decay model and the depth conversion.
///
/// Immutable for the duration of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayConfig {
    /// Baseline shut-in pressure, PSI.
    pub initial_pressure: f64,
    /// Transient amplitude above baseline at t = 0, PSI.
    pub amplitude_offset: f64,
    /// Decay time constant tau, seconds. Must be positive.
    pub decay_constant: f64,
    /// Acoustic velocity in the wellbore fluid, m/s. Must be positive.
    pub wave_speed: f64,
}

impl DecayConfig {
    pub fn validate(&self) -> FingerprintResult<()> {
        if !self.decay_constant.is_finite() || self.decay_constant <= 0.0 {
            return Err(FingerprintError::Configuration(format!(
                "decay constant must be positive, got {}",
                self.decay_constant
            )));
        }
        if !self.wave_speed.is_finite() || self.wave_speed <= 0.0 {
            return Err(FingerprintError::Configuration(format!(
                "wave speed must be positive, got {}",
                self.wave_speed
            )));
        }
        if !self.initial_pressure.is_finite() || !self.amplitude_offset.is_finite() {
            return Err(FingerprintError::Configuration(
                "pressure parameters must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Noise parameters of the denoising estimator.
///
/// `process_noise` (q) is how much the true pressure is allowed to wander per
/// step; `measurement_noise` (r) is the gauge noise variance. Raising q relative
/// to r makes the estimate track the raw signal; raising r smooths harder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub process_noise: f64,
    pub measurement_noise: f64,
}

impl FilterConfig {
    pub fn validate(&self) -> FingerprintResult<()> {
        if !self.process_noise.is_finite() || self.process_noise < 0.0 {
            return Err(FingerprintError::Configuration(format!(
                "process noise must be non-negative, got {}",
                self.process_noise
            )));
        }
        if !self.measurement_noise.is_finite() || self.measurement_noise <= 0.0 {
            return Err(FingerprintError::Configuration(format!(
                "measurement noise must be positive, got {}",
                self.measurement_noise
            )));
        }
        Ok(())
    }
}

/// Classification of a detected reflection by converted depth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EchoClass {
    /// Reflection from near-surface hardware (wellhead, hanger, shallow joint).
    SurfaceReflection,
    /// Reflection from an unrecorded downhole tubular or casing anomaly.
    PhantomSteel,
}

/// One detected reflection, ordered by `echo_time` ascending in pipeline output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoRecord {
    /// Arrival time of the reflection, seconds. Always an input sample's time.
    pub echo_time: f64,
    /// Two-way-travel depth of the reflector, metres.
    pub depth: f64,
    /// Residual pressure excursion at the peak, PSI.
    pub magnitude: f64,
    pub classification: EchoClass,
}

impl EchoRecord {
    pub fn new(echo_time: f64, depth: f64, magnitude: f64, classification: EchoClass) -> Self {
        Self {
            echo_time,
            depth,
            magnitude,
            classification,
        }
    }
}

/// Common error type for the analysis pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FingerprintError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("input contract violation: {0}")]
    InputContract(String),
}

pub type FingerprintResult<T> = Result<T, FingerprintError>;
