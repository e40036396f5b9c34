use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use shared_state::config::DemoConfig;
use shared_state::logging::init_tracing;
use shared_state::shutdown::ShutdownHandle;
use shared_state::ui::runtime;

/// Demo of features sharing state through field-addressed cells.
#[derive(Debug, Parser)]
#[command(name = "shared-state-demo", version)]
struct Args {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many seconds (0 runs until Ctrl-C)
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Override the temperature sample interval
    #[arg(long)]
    temperature_interval_ms: Option<u64>,

    /// Override the greeting interval
    #[arg(long)]
    greeting_interval_ms: Option<u64>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run(Args::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let shutdown = ShutdownHandle::new();

    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.signal();
        }
    });

    if config.run.duration_secs > 0 {
        let timer = shutdown.clone();
        let duration = Duration::from_secs(config.run.duration_secs);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            timer.signal();
        });
    }

    let summary = runtime::run(config, shutdown).await?;
    println!("{}", summary.render());
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<DemoConfig> {
    let path = args.config.clone().unwrap_or_else(DemoConfig::config_path);
    let mut config = DemoConfig::read_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    apply_overrides(&mut config, args);
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

fn apply_overrides(config: &mut DemoConfig, args: &Args) {
    if let Some(duration) = args.duration_secs {
        config.run.duration_secs = duration;
    }
    if let Some(interval) = args.temperature_interval_ms {
        config.producer.temperature_interval_ms = interval;
    }
    if let Some(interval) = args.greeting_interval_ms {
        config.producer.greeting_interval_ms = interval;
    }
}
