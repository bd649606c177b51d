//! tictactoe_replay - terminal tic-tac-toe with move history.

use anyhow::Result;
use clap::Parser;
use tictactoe_replay::{Cli, Config, init_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;
    init_logging(&config)?;

    info!(?config, "Configuration resolved");
    run(&config)
}
