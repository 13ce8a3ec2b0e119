use crate::math::stats::StatsHelper;
use crate::{DecayConfig, EchoClass, EchoRecord, FingerprintError, FingerprintResult};
use log::debug;

/// Detection threshold in units of the residual's standard deviation.
const THRESHOLD_SIGMA: f64 = 3.0;

/// Depth cutoff separating near-surface reflections from downhole anomalies,
/// metres. Strictly greater than the cutoff classifies as phantom steel.
const PHANTOM_DEPTH_CUTOFF_M: f64 = 500.0;

/// Scans the residual series for acoustic impedance reflections.
///
/// The threshold is `3 sigma` over the full residual extent (population form);
/// a candidate must exceed it and be a strict local maximum, so the first and
/// last samples can never be reported. Depth uses two-way travel time,
/// `d = wave_speed * t / 2`. An empty result is a clean trace, not an error.
///
/// The sigma is global, not a rolling window; on strongly non-stationary noise
/// the threshold loses sensitivity. Retained source behavior.
pub fn detect_echoes(
    times: &[f64],
    residual: &[f64],
    config: &DecayConfig,
) -> FingerprintResult<Vec<EchoRecord>> {
    config.validate()?;
    if times.len() != residual.len() {
        return Err(FingerprintError::InputContract(format!(
            "detector inputs differ in length: {} times vs {} residuals",
            times.len(),
            residual.len()
        )));
    }

    let threshold = THRESHOLD_SIGMA * StatsHelper::std_dev(residual);

    let mut echoes = Vec::new();
    if residual.len() >= 3 {
        for i in 1..residual.len() - 1 {
            let value = residual[i];
            if value > threshold && value > residual[i - 1] && value > residual[i + 1] {
                let depth = config.wave_speed * times[i] / 2.0;
                let classification = if depth > PHANTOM_DEPTH_CUTOFF_M {
                    EchoClass::PhantomSteel
                } else {
                    EchoClass::SurfaceReflection
                };
                echoes.push(EchoRecord::new(times[i], depth, value, classification));
            }
        }
    }

    debug!(
        "echo scan: threshold {:.3} PSI, {} detections over {} samples",
        threshold,
        echoes.len(),
        residual.len()
    );
    Ok(echoes)
}
