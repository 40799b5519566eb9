pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::map::RecordingMap;
pub use crate::adapters::storage::{LocalStorage, MemoryStorage};
pub use crate::core::actions::{Action, Outcome};
pub use crate::core::dashboard::{Dashboard, DashboardSettings};
pub use crate::core::session::{LoginGate, StaticCredentials};
pub use crate::core::store::StationStore;
pub use crate::utils::error::{Result, TrackerError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
