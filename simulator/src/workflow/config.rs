use crate::generator::TraceConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tprcore::{DecayConfig, FilterConfig};

/// One audit scenario: the synthetic trace to generate plus the model and
/// filter parameters handed to the core.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub trace: TraceConfig,
    pub wave_speed: f64,
    pub process_noise: f64,
    pub measurement_noise: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            trace: TraceConfig::default(),
            wave_speed: 1450.0,
            process_noise: 0.1,
            measurement_noise: 10.0,
        }
    }
}

impl AuditConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading audit config {}", path_ref.display()))?;
        let config: AuditConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing audit config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_decay_config(&self) -> DecayConfig {
        DecayConfig {
            initial_pressure: self.trace.initial_pressure,
            amplitude_offset: self.trace.amplitude_offset,
            decay_constant: self.trace.decay_constant,
            wave_speed: self.wave_speed,
        }
    }

    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            process_noise: self.process_noise,
            measurement_noise: self.measurement_noise,
        }
    }
}
