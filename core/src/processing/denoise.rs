use crate::{FilterConfig, FingerprintResult};

/// Transient estimator state carried between samples of one denoising pass.
///
/// The true pressure is modelled as a random walk with process noise `q`,
/// observed through gauge noise `r`. Never leaves this module.
struct FilterState {
    estimate: f64,
    error_covariance: f64,
}

impl FilterState {
    fn seeded(first_measurement: f64) -> Self {
        Self {
            estimate: first_measurement,
            error_covariance: 1.0,
        }
    }

    /// One predict/correct step. Strictly causal; `gain` stays in (0, 1)
    /// whenever `r > 0`.
    fn update(&mut self, measurement: f64, q: f64, r: f64) -> f64 {
        let prior_covariance = self.error_covariance + q;
        let gain = prior_covariance / (prior_covariance + r);
        self.estimate += gain * (measurement - self.estimate);
        self.error_covariance = (1.0 - gain) * prior_covariance;
        self.estimate
    }
}

/// Smooths a raw pressure trace with a single left-to-right recursive pass.
///
/// Each output depends only on samples at or before its index. Length 0 maps
/// to an empty output, length 1 passes the sample through unchanged. Rejects
/// `r <= 0` up front; the recursion itself cannot fail.
pub fn denoise(raw: &[f64], config: &FilterConfig) -> FingerprintResult<Vec<f64>> {
    config.validate()?;

    let mut state = match raw.first() {
        Some(&value) => FilterState::seeded(value),
        None => return Ok(Vec::new()),
    };

    let mut denoised = Vec::with_capacity(raw.len());
    denoised.push(state.estimate);
    for &measurement in &raw[1..] {
        denoised.push(state.update(
            measurement,
            config.process_noise,
            config.measurement_noise,
        ));
    }
    Ok(denoised)
}
