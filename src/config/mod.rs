use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Presence CSV: `user_id,date,start,end`
    #[serde(default = "default_data_csv")]
    pub data_csv: String,
    /// Users XML (names and avatars)
    #[serde(default = "default_data_xml")]
    pub data_xml: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_csv() -> String {
    Config::config_dir()
        .join("sample_data.csv")
        .to_string_lossy()
        .to_string()
}
fn default_data_xml() -> String {
    Config::config_dir()
        .join("users.xml")
        .to_string_lossy()
        .to_string()
}
fn default_templates_dir() -> String {
    "templates".to_string()
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_csv: default_data_csv(),
            data_xml: default_data_xml(),
            templates_dir: default_templates_dir(),
            static_dir: default_static_dir(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".presence-analyzer")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("presence-analyzer.conf")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; missing fields take their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn data_csv_path(&self) -> PathBuf {
        expand_tilde(&self.data_csv)
    }

    pub fn data_xml_path(&self) -> PathBuf {
        expand_tilde(&self.data_xml)
    }

    pub fn templates_path(&self) -> PathBuf {
        expand_tilde(&self.templates_dir)
    }

    pub fn static_path(&self) -> PathBuf {
        expand_tilde(&self.static_dir)
    }

    /// Create the configuration directory and, unless `is_test`, write the
    /// default configuration file.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !is_test {
            Self::default().save_to(&path)?;
        }

        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

/// Resolve a configured path, expanding a leading `~`.
fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
