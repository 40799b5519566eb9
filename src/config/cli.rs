use crate::config::toml_config::TomlConfig;
use crate::core::actions::Action;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "station-tracker", version)]
#[command(about = "Track commodity stock at map stations")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Overrides `storage.data_dir`
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check the shared credentials and start a session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// End the session
    Logout,
    /// Create a station
    AddStation {
        name: String,
        #[arg(allow_hyphen_values = true)]
        lat: String,
        #[arg(allow_hyphen_values = true)]
        lon: String,
    },
    /// Register a commodity type
    AddType { name: String },
    /// Set the quantity of a commodity at a station
    Assign {
        station: String,
        commodity: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Increase a station's commodity by one
    Inc { station: String, commodity: String },
    /// Decrease a station's commodity by one
    Dec { station: String, commodity: String },
    /// Print stations and their stock
    List,
    /// Print the registered commodity types
    Types,
    /// Print the map markers with their tooltips
    Markers {
        #[arg(long, help = "Render tooltips as HTML")]
        html: bool,
    },
}

impl Command {
    /// The dashboard action behind a mutating command, if any.
    pub fn to_action(&self) -> Option<Action> {
        match self {
            Command::AddStation { name, lat, lon } => Some(Action::AddStation {
                name: name.clone(),
                lat: lat.clone(),
                lon: lon.clone(),
            }),
            Command::AddType { name } => Some(Action::AddCommodityType { name: name.clone() }),
            Command::Assign {
                station,
                commodity,
                quantity,
            } => Some(Action::AssignCommodity {
                station: station.clone(),
                commodity: commodity.clone(),
                quantity: quantity.clone(),
            }),
            Command::Inc { station, commodity } => Some(Action::Increment {
                station: station.clone(),
                commodity: commodity.clone(),
            }),
            Command::Dec { station, commodity } => Some(Action::Decrement {
                station: station.clone(),
                commodity: commodity.clone(),
            }),
            Command::Login { .. }
            | Command::Logout
            | Command::List
            | Command::Types
            | Command::Markers { .. } => None,
        }
    }
}

impl CliConfig {
    /// Reads `--config` when given, then applies command-line overrides.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            settings.storage.data_dir = dir.clone();
        }
        Ok(settings)
    }
}
