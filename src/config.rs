use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the serum protocol is written to (empty means the working directory)
    pub export_dir: String,
    pub export_file_name: String,
    /// env_logger filter used when RUST_LOG is unset
    pub log_level: String,
    /// Show the splash screen on start
    pub splash: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: String::new(),
            export_file_name: "serum_protocol.txt".to_string(),
            log_level: "info".to_string(),
            splash: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".gene-lab"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("gene-lab.log"))
    }

    /// Load the config from `~/.gene-lab/config.json`.
    ///
    /// The logger is not installed yet when this runs, so a fallback is
    /// returned as a warning for the caller to log.
    pub fn load_or_init() -> (Config, Option<String>) {
        match Self::config_path() {
            Some(config_path) => Self::load_or_init_at(&config_path),
            None => (
                Config::default(),
                Some("HOME is not set; using the default config".to_string()),
            ),
        }
    }

    /// A missing file is created with defaults. An unreadable or malformed
    /// file falls back to defaults without touching the file.
    pub fn load_or_init_at(path: &Path) -> (Config, Option<String>) {
        if !path.exists() {
            let config = Config::default();
            let warning = config
                .save_to(path)
                .err()
                .map(|e| format!("Could not write default config: {:#}", e));
            return (config, warning);
        }

        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (
                Config::default(),
                Some(format!("Ignoring config at {}: {:#}", path.display(), e)),
            ),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Full path of the serum protocol file
    pub fn export_path(&self) -> PathBuf {
        let dir = if self.export_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.export_dir)
        };
        dir.join(&self.export_file_name)
    }
}
