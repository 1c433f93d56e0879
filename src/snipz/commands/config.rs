use crate::commands::{CmdMessage, CmdResult};
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SnipzConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SnipzConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            // A file that no longer parses is replaced by this save.
            let mut config = match SnipzConfig::load(config_dir) {
                Ok(config) => config,
                Err(SnipzError::Serialization(e)) => {
                    tracing::warn!(error = %e, "replacing malformed config");
                    result.add_message(CmdMessage::warning(
                        "Existing config was malformed; starting from defaults.",
                    ));
                    SnipzConfig::default()
                }
                Err(e) => return Err(e),
            };
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = result.with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
