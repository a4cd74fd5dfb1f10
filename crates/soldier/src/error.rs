//! Errors surfaced while configuring and hosting a soldier.
use std::path::PathBuf;

use behavior_tree::SettingsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SoldierError>;

#[derive(Debug, Error)]
pub enum SoldierError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Logger(#[from] SettingsError),

    #[error("failed to prepare log directory {}", path.display())]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
