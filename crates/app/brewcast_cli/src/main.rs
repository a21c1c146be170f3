// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use brewcast_core::config::ClientConfig;
use brewcast_core::presets::api::HttpPresetApi;
use brewcast_core::presets::store::PresetStore;
use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod commands;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        command => {
            let config = ClientConfig::from_env();
            let api = HttpPresetApi::new(&config)?;
            let mut store = PresetStore::new(api);
            commands::dispatch(&mut store, command).await
        }
    }
}
