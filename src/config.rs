use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::debug_log;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Transcription folder, overrides the iCloud default
    #[serde(default)]
    pub(crate) directory: Option<PathBuf>,
    /// Time range used when none is given on the command line
    #[serde(default)]
    pub(crate) range: Option<String>,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) metadata: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_from(&path) {
                return config;
            }
        }
        Self::default()
    }

    /// `None` when the file is missing or unreadable as TOML
    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match Self::parse(&content) {
            Ok(config) => {
                debug_log!("Loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.directory = config.directory.map(|dir| expand_home(&dir));
        Ok(config)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/stardate/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("stardate").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/stardate/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("stardate").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.stardate.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".stardate.toml"));
        }

        paths
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
