use crate::workflow::config::AuditConfig;
use anyhow::Context;
use log::info;
use tprcore::prelude::{analyze, EchoRecord, TelemetrySample};

/// Summary of one audit run over a telemetry trace.
pub struct AuditResult {
    pub sample_count: usize,
    pub echoes: Vec<EchoRecord>,
}

#[derive(Clone)]
pub struct Runner {
    config: AuditConfig,
}

impl Runner {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, samples: &[TelemetrySample]) -> anyhow::Result<AuditResult> {
        let echoes = analyze(
            samples,
            &self.config.to_decay_config(),
            &self.config.to_filter_config(),
        )
        .context("running fingerprint analysis")?;

        info!(
            "audit complete: {} echoes over {} samples",
            echoes.len(),
            samples.len()
        );
        Ok(AuditResult {
            sample_count: samples.len(),
            echoes,
        })
    }
}
