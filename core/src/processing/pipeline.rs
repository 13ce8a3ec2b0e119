use crate::processing::decay::ideal_decay;
use crate::processing::denoise::denoise;
use crate::processing::echo::detect_echoes;
use crate::processing::residual::extract_residual;
use crate::{
    DecayConfig, EchoRecord, FilterConfig, FingerprintError, FingerprintResult, TelemetrySample,
};
use log::{debug, info};

/// Runs one full fingerprint analysis: denoise, decay model, residual, echo
/// scan. Returns detections ordered by echo time.
///
/// All input validation happens here, before any stage runs: the trace must be
/// non-empty with strictly increasing timestamps, and both configs must pass
/// their own checks. Downstream stages then cannot fail mid-computation. An
/// empty detection list is a valid clean-trace result.
pub fn analyze(
    samples: &[TelemetrySample],
    decay_config: &DecayConfig,
    filter_config: &FilterConfig,
) -> FingerprintResult<Vec<EchoRecord>> {
    if samples.is_empty() {
        return Err(FingerprintError::InputContract(
            "telemetry trace is empty".into(),
        ));
    }
    for (i, pair) in samples.windows(2).enumerate() {
        if !(pair[1].time > pair[0].time) {
            return Err(FingerprintError::InputContract(format!(
                "timestamps must be strictly increasing, violated at sample {}",
                i + 1
            )));
        }
    }
    decay_config.validate()?;
    filter_config.validate()?;

    let times: Vec<f64> = samples.iter().map(|s| s.time).collect();
    let raw: Vec<f64> = samples.iter().map(|s| s.raw_pressure).collect();

    let denoised = denoise(&raw, filter_config)?;
    debug!("denoised {} samples", denoised.len());
    let expected = ideal_decay(&times, decay_config)?;
    let residual = extract_residual(&denoised, &expected)?;
    let echoes = detect_echoes(&times, &residual, decay_config)?;

    info!(
        "fingerprint analysis: {} samples, {} echoes",
        samples.len(),
        echoes.len()
    );
    Ok(echoes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EchoClass;

    fn decay_config() -> DecayConfig {
        DecayConfig {
            initial_pressure: 2500.0,
            amplitude_offset: 800.0,
            decay_constant: 4.5,
            wave_speed: 1450.0,
        }
    }

    fn filter_config() -> FilterConfig {
        FilterConfig {
            process_noise: 0.1,
            measurement_noise: 10.0,
        }
    }

    fn trace_from(times: &[f64], raw: &[f64]) -> Vec<TelemetrySample> {
        times
            .iter()
            .zip(raw.iter())
            .map(|(&t, &p)| TelemetrySample::new(t, p))
            .collect()
    }

    #[test]
    fn empty_trace_is_rejected() {
        assert!(matches!(
            analyze(&[], &decay_config(), &filter_config()),
            Err(FingerprintError::InputContract(_))
        ));
    }

    #[test]
    fn non_monotonic_timestamps_are_rejected() {
        let samples = vec![
            TelemetrySample::new(0.0, 3300.0),
            TelemetrySample::new(0.2, 3290.0),
            TelemetrySample::new(0.2, 3280.0),
        ];
        assert!(matches!(
            analyze(&samples, &decay_config(), &filter_config()),
            Err(FingerprintError::InputContract(_))
        ));
    }

    #[test]
    fn bad_config_is_rejected_before_the_pipeline_runs() {
        let samples = vec![TelemetrySample::new(0.0, 3300.0)];
        let mut bad = decay_config();
        bad.decay_constant = -4.5;
        assert!(matches!(
            analyze(&samples, &bad, &filter_config()),
            Err(FingerprintError::Configuration(_))
        ));
    }

    /// A settled well with only periodic thermal ripple must report clean: a
    /// sinusoid peaks at sqrt(2) of its own sigma, well under the 3-sigma
    /// threshold, whatever the filter attenuates it to.
    #[test]
    fn rippling_trace_without_reflections_is_clean() {
        let decay = DecayConfig {
            initial_pressure: 2500.0,
            amplitude_offset: 0.0,
            decay_constant: 4.5,
            wave_speed: 1450.0,
        };
        let times: Vec<f64> = (0..1000).map(|i| i as f64 * 0.01).collect();
        let raw: Vec<f64> = (0..1000)
            .map(|i| 2500.0 + 2.0 * (i as f64 * 0.05).sin())
            .collect();
        let echoes = analyze(&trace_from(&times, &raw), &decay, &filter_config()).unwrap();
        assert!(echoes.is_empty());
    }

    /// End-to-end detection of a single reflection pulse riding on a flat
    /// baseline. The denoiser attenuates a one-sample pulse by its steady-state
    /// gain (~0.0951 for q=0.1, r=10), and the detector must still see it.
    #[test]
    fn pipeline_detects_raw_trace_pulse() {
        let decay = DecayConfig {
            initial_pressure: 2500.0,
            amplitude_offset: 0.0,
            decay_constant: 4.5,
            wave_speed: 1450.0,
        };
        let times: Vec<f64> = (0..1000).map(|i| i as f64 * 0.01).collect();
        let mut raw = vec![2500.0; 1000];
        raw[420] += 45.0;

        let echoes = analyze(&trace_from(&times, &raw), &decay, &filter_config()).unwrap();
        assert_eq!(echoes.len(), 1);
        let echo = &echoes[0];
        assert!((echo.echo_time - 4.2).abs() < 1e-9);
        assert!((echo.depth - 3045.0).abs() < 1e-6);
        // Steady-state gain for q=0.1, r=10 is about 0.09513.
        let expected_peak = 45.0 * 0.09513;
        assert!((echo.magnitude - expected_peak).abs() < 0.01);
        assert_eq!(echo.classification, EchoClass::PhantomSteel);
    }

    #[test]
    fn analysis_is_deterministic() {
        let times: Vec<f64> = (0..500).map(|i| i as f64 * 0.02).collect();
        let raw: Vec<f64> = times
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                2500.0 + 800.0 * (-t / 4.5).exp() + if i == 250 { 60.0 } else { 0.0 }
            })
            .collect();
        let samples = trace_from(&times, &raw);
        let first = analyze(&samples, &decay_config(), &filter_config()).unwrap();
        let second = analyze(&samples, &decay_config(), &filter_config()).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.echo_time, b.echo_time);
            assert_eq!(a.depth, b.depth);
            assert_eq!(a.magnitude, b.magnitude);
            assert_eq!(a.classification, b.classification);
        }
    }

    #[test]
    fn single_sample_trace_is_clean() {
        let samples = vec![TelemetrySample::new(0.0, 3300.0)];
        let echoes = analyze(&samples, &decay_config(), &filter_config()).unwrap();
        assert!(echoes.is_empty());
    }
}
