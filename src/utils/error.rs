use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Station already exists: {name}")]
    DuplicateStation { name: String },

    #[error("Unknown station: {name}")]
    UnknownStation { name: String },

    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Refused user action; nothing changed.
    Low,
    /// Storage or configuration failure.
    Critical,
}

impl TrackerError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput { .. }
            | Self::DuplicateStation { .. }
            | Self::UnknownStation { .. }
            | Self::InvalidCredentials
            | Self::NotLoggedIn => ErrorSeverity::Low,
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { .. } => {
                "Please provide a valid station name, coordinates, commodity type and quantity."
                    .to_string()
            }
            Self::DuplicateStation { .. } => "A station with this name already exists.".to_string(),
            Self::UnknownStation { name } => format!("No station named '{}' exists.", name),
            Self::InvalidCredentials => "Incorrect username or password".to_string(),
            Self::NotLoggedIn => "You must log in before opening the dashboard.".to_string(),
            Self::IoError(_) => "Reading or writing the data directory failed.".to_string(),
            Self::SerializationError(_) => "Stored data could not be read or written.".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is invalid.", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { field, reason } => format!("Check '{}': {}", field, reason),
            Self::DuplicateStation { .. } => "Choose a different station name.".to_string(),
            Self::UnknownStation { .. } => {
                "Run `list` to see existing stations or create it with `add-station`.".to_string()
            }
            Self::InvalidCredentials => "Check the credentials in the [auth] section.".to_string(),
            Self::NotLoggedIn => "Run `login` first.".to_string(),
            Self::IoError(_) => "Check that the data directory exists and is writable.".to_string(),
            Self::SerializationError(_) => {
                "Inspect stations.json and commodityTypes.json in the data directory.".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
