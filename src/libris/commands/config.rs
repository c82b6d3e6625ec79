use crate::commands::{CmdMessage, CmdResult};
use crate::config::LibrisConfig;
use crate::error::{LibrisError, Result};
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
            let config = LibrisConfig::load_or_default(config_dir);
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = LibrisConfig::load_or_default(config_dir);
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(format!("{} = {}", key, val)),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut config = LibrisConfig::load_or_default(config_dir);
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(LibrisError::Config(msg)) => {
                    return Ok(CmdResult::default().with_message(CmdMessage::error(msg)));
                }
                Err(e) => return Err(e),
            }
            config.save(config_dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}
