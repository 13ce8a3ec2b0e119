use crate::{DecayConfig, FingerprintResult};

/// Expected pressure-decay curve: `P(t) = Pi + dP * e^(-t / tau)`.
///
/// Pure elementwise evaluation over `times`; rejects a non-positive decay
/// constant, otherwise cannot fail.
pub fn ideal_decay(times: &[f64], config: &DecayConfig) -> FingerprintResult<Vec<f64>> {
    config.validate()?;
    Ok(times
        .iter()
        .map(|&t| config.initial_pressure + config.amplitude_offset * (-t / config.decay_constant).exp())
        .collect())
}
