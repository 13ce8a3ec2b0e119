use anyhow::Context;
use clap::Parser;
use generator::build_trace;
use std::path::PathBuf;
use workflow::config::AuditConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline TPR fingerprint audit driver")]
struct Args {
    /// Load an audit scenario from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for the synthetic gauge noise
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    samples: Option<usize>,
    /// Gauge noise standard deviation, PSI
    #[arg(long)]
    noise_sigma: Option<f64>,
    /// Magnitude of the injected reflection pulse, PSI
    #[arg(long)]
    pulse_magnitude: Option<f64>,
    /// Sample index of the injected pulse; omit the pulse entirely with --no-pulse
    #[arg(long)]
    pulse_index: Option<usize>,
    #[arg(long, default_value_t = false)]
    no_pulse: bool,
    /// Emit the echo records as JSON instead of the text summary
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = &args.config {
        AuditConfig::load(path)?
    } else {
        AuditConfig::default()
    };
    if let Some(seed) = args.seed {
        config.trace.seed = seed;
    }
    if let Some(samples) = args.samples {
        config.trace.sample_count = samples;
    }
    if let Some(sigma) = args.noise_sigma {
        config.trace.noise_sigma = sigma;
    }
    if let Some(magnitude) = args.pulse_magnitude {
        config.trace.pulse_magnitude = magnitude;
    }
    if let Some(index) = args.pulse_index {
        config.trace.pulse_index = Some(index);
    }
    if args.no_pulse {
        config.trace.pulse_index = None;
    }

    let trace = build_trace(&config.trace).context("generating telemetry trace")?;
    let result = Runner::new(config).execute(&trace)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.echoes)?);
        return Ok(());
    }

    println!(
        "Audit run -> {} samples, {} echoes",
        result.sample_count,
        result.echoes.len()
    );
    for echo in &result.echoes {
        println!(
            "echo @ {:.2} s -> depth {:.2} m, magnitude {:.2} PSI, {:?}",
            echo.echo_time, echo.depth, echo.magnitude, echo.classification
        );
    }
    if result.echoes.is_empty() {
        println!("no unrecorded reflections detected");
    }
    Ok(())
}
