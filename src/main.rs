use anyhow::Context;
use clap::Parser;
use discount_cart::config::{Args, Config};
use discount_cart::session::Session;
use discount_cart::telemetry;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Environment first, then command line flags on top
    let config = Config::from_env()
        .context("failed to load configuration")?
        .apply_args(&args);

    telemetry::init(&config);
    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.show_prompts);

    session.run().context("session terminated unexpectedly")?;
    Ok(())
}
