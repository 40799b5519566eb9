use crate::core::palette::DEFAULT_PALETTE_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center")]
    pub default_center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
    #[serde(default = "single_marker_zoom")]
    pub single_marker_zoom: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "palette_size")]
    pub size: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_center() -> [f64; 2] {
    [20.5937, 78.9629]
}

fn default_zoom() -> u8 {
    5
}

fn single_marker_zoom() -> u8 {
    8
}

fn palette_size() -> usize {
    DEFAULT_PALETTE_SIZE
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: default_center(),
            default_zoom: default_zoom(),
            single_marker_zoom: single_marker_zoom(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            size: palette_size(),
            seed: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRACKER_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("storage.data_dir", &self.storage.data_dir)?;

        let [lat, lon] = self.map.default_center;
        validate_range("map.default_center.lat", lat, -90.0, 90.0)?;
        validate_range("map.default_center.lon", lon, -180.0, 180.0)?;
        validate_range("map.default_zoom", self.map.default_zoom, 0, 22)?;
        validate_range("map.single_marker_zoom", self.map.single_marker_zoom, 0, 22)?;

        validate_positive_number("palette.size", self.palette.size, 1)?;

        if let Some(auth) = &self.auth {
            if auth.username.is_empty() {
                return Err(TrackerError::InvalidConfigValueError {
                    field: "auth.username".to_string(),
                    value: String::new(),
                    reason: "Username cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn default_center(&self) -> (f64, f64) {
        let [lat, lon] = self.map.default_center;
        (lat, lon)
    }

    fn default_zoom(&self) -> u8 {
        self.map.default_zoom
    }

    fn single_marker_zoom(&self) -> u8 {
        self.map.single_marker_zoom
    }

    fn palette_size(&self) -> usize {
        self.palette.size
    }

    fn palette_seed(&self) -> Option<u64> {
        self.palette.seed
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        self.auth
            .as_ref()
            .map(|auth| (auth.username.as_str(), auth.password.as_str()))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.data_dir(), "./data");
        assert_eq!(config.default_center(), (20.5937, 78.9629));
        assert_eq!(config.default_zoom(), 5);
        assert_eq!(config.single_marker_zoom(), 8);
        assert_eq!(config.palette_size(), 30);
        assert_eq!(config.palette_seed(), None);
        assert!(config.credentials().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
data_dir = "/var/lib/stations"

[map]
default_center = [51.5, -0.12]
default_zoom = 6
single_marker_zoom = 10

[palette]
size = 12
seed = 42

[auth]
username = "rick"
password = "roll"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_dir(), "/var/lib/stations");
        assert_eq!(config.default_center(), (51.5, -0.12));
        assert_eq!(config.single_marker_zoom(), 10);
        assert_eq!(config.palette_size(), 12);
        assert_eq!(config.palette_seed(), Some(42));
        assert_eq!(config.credentials(), Some(("rick", "roll")));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STATION_TRACKER_TEST_PASSWORD", "s3cret");

        let toml_content = r#"
[auth]
username = "admin"
password = "${STATION_TRACKER_TEST_PASSWORD}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.credentials(), Some(("admin", "s3cret")));

        std::env::remove_var("STATION_TRACKER_TEST_PASSWORD");
    }

    #[test]
    fn test_config_validation() {
        let bad_zoom = TomlConfig::from_toml_str("[map]\nsingle_marker_zoom = 40\n").unwrap();
        assert!(bad_zoom.validate().is_err());

        let bad_center = TomlConfig::from_toml_str("[map]\ndefault_center = [95.0, 0.0]\n").unwrap();
        assert!(bad_center.validate().is_err());

        let bad_palette = TomlConfig::from_toml_str("[palette]\nsize = 0\n").unwrap();
        assert!(bad_palette.validate().is_err());

        let bad_dir = TomlConfig::from_toml_str("[storage]\ndata_dir = \"\"\n").unwrap();
        assert!(bad_dir.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[map\n"),
            Err(TrackerError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"./stations\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_dir(), "./stations");
    }
}
