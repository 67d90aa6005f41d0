use anyhow::Context;
use clap::Parser;
use giftster::cli::Cli;
use giftster::{logging, ui};
use std::time::Duration;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let log_path = logging::init_tracing(&config.logging).context("Failed to set up logging")?;
    tracing::info!(
        log = %log_path.display(),
        endpoint = %config.service.endpoint_url(),
        "Starting giftster"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    ui::runtime::run(&config, runtime.handle().clone()).context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
