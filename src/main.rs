mod cli_options;

use anyhow::{Context, Result};
use clap::Parser;
use cli_options::QueueArgs;
use piece_queue_core::generator::PieceGenerator;
use piece_queue_core::session::Session;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = QueueArgs::parse();

    let seed = match args.seed {
        Some(seed) => seed,
        None => time_seed()?,
    };
    log::info!("Piece generator seed: {seed}");

    let mut session = Session::new(PieceGenerator::from_seed(seed));
    session.prefill(args.prefill);
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Interactive session failed")?;
    log::info!(
        "Session ended, {} pieces generated",
        session.generator().next_id()
    );
    Ok(())
}

fn time_seed() -> Result<u64> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?;
    Ok(since_epoch.as_secs())
}
