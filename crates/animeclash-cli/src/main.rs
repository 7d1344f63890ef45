//! Animeclash console demo entry point.
mod config;
mod console;
mod demo;

use anyhow::Result;
use config::DemoConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    let stdout = std::io::stdout();
    demo::run(&config, &mut stdout.lock())
}
