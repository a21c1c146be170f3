use clap::{Parser, Subcommand};

/// Manage Brewcast forecasting presets from the terminal.
///
/// The backend address is taken from `BREWCAST_API_URL`
/// (default `http://127.0.0.1:5001`).
#[derive(Parser)]
#[command(name = "brewcast", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print version information
    Version,

    /// List available presets
    List,

    /// Show a preset's configuration as JSON
    Show {
        /// Preset name
        name: String,
    },

    /// Update fields on a preset and save it
    Set {
        /// Preset name
        name: String,
        /// Field assignments, e.g. `forecast_periods=90 growth=logistic`
        #[arg(required = true, value_name = "FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// Create a preset
    Create {
        /// Name for the new preset
        name: String,
        /// Duplicate this existing preset instead of starting from defaults
        #[arg(long, value_name = "PRESET")]
        duplicate: Option<String>,
    },

    /// Delete a preset
    Delete {
        /// Preset name
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Reset a preset to the canonical defaults and save it
    Reset {
        /// Preset name
        name: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
