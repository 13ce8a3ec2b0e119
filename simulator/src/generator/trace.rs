use anyhow::{ensure, Context};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tprcore::prelude::TelemetrySample;

/// Configuration for generating a synthetic shut-in pressure trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub sample_count: usize,
    /// Trace duration in seconds; samples are spaced `duration / sample_count`.
    pub duration: f64,
    pub initial_pressure: f64,
    pub amplitude_offset: f64,
    pub decay_constant: f64,
    /// Gauge noise standard deviation, PSI.
    pub noise_sigma: f64,
    /// Sample index of the injected reflection pulse, if any.
    pub pulse_index: Option<usize>,
    pub pulse_magnitude: f64,
    pub seed: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        // The canonical demo: a hidden reflection at t = 4.2 s, roughly 3045 m.
        Self {
            sample_count: 1000,
            duration: 10.0,
            initial_pressure: 2500.0,
            amplitude_offset: 800.0,
            decay_constant: 4.5,
            noise_sigma: 2.0,
            pulse_index: Some(420),
            pulse_magnitude: 45.0,
            seed: 0,
        }
    }
}

/// Builds a telemetry trace: ideal decay + Gaussian gauge noise + an optional
/// single-sample reflection pulse.
pub fn build_trace(config: &TraceConfig) -> anyhow::Result<Vec<TelemetrySample>> {
    ensure!(config.sample_count > 0, "sample count must be positive");
    ensure!(config.duration > 0.0, "trace duration must be positive");
    ensure!(
        config.decay_constant > 0.0,
        "decay constant must be positive"
    );
    if let Some(index) = config.pulse_index {
        ensure!(
            index < config.sample_count,
            "pulse index {} outside trace of {} samples",
            index,
            config.sample_count
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = Normal::new(0.0, config.noise_sigma.max(0.0))
        .context("building gauge noise distribution")?;
    let dt = config.duration / config.sample_count as f64;

    let mut samples = Vec::with_capacity(config.sample_count);
    for i in 0..config.sample_count {
        let t = i as f64 * dt;
        let mut pressure = config.initial_pressure
            + config.amplitude_offset * (-t / config.decay_constant).exp()
            + noise.sample(&mut rng);
        if config.pulse_index == Some(i) {
            pressure += config.pulse_magnitude;
        }
        samples.push(TelemetrySample::new(t, pressure));
    }
    Ok(samples)
}
