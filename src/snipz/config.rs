use crate::error::{Result, SnipzError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RULE_WIDTH: usize = 70;
const MIN_RULE_WIDTH: usize = 10;
/// Overrides the platform config directory.
pub const HOME_ENV: &str = "SNIPZ_HOME";
/// Value of the `catalog` key meaning "use the catalog shipped with snipz".
pub const BUILTIN_CATALOG: &str = "builtin";

pub const KEYS: &[&str] = &["catalog", "rule-width"];

/// Configuration for snipz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Catalog document to browse instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Width of the rules framing a printed snippet
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_rule_width() -> usize {
    DEFAULT_RULE_WIDTH
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SnipzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Display value of a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| BUILTIN_CATALOG.to_string()),
            ),
            "rule-width" => Some(self.rule_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog" => {
                self.catalog = if value == BUILTIN_CATALOG {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "rule-width" => {
                let width: usize = value
                    .parse()
                    .map_err(|_| format!("rule-width must be a number, got {}", value))?;
                if width < MIN_RULE_WIDTH {
                    return Err(format!("rule-width must be at least {}", MIN_RULE_WIDTH));
                }
                self.rule_width = width;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

/// `$SNIPZ_HOME` if set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Config("Could not determine config dir".to_string()))
}
