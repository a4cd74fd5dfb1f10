//! Soldier runtime configuration and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use behavior_tree::{LoggerSettings, tracing_sink};

use crate::error::{Result, SoldierError};

/// Configuration for one simulated soldier run.
#[derive(Clone, Debug, PartialEq)]
pub struct SoldierConfig {
    pub tick_rate_hz: u32,
    pub max_ticks: u64,
    pub flee_threshold: f32,
    pub logging: TreeLogConfig,
    pub log_to_file: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for SoldierConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 10,
            max_ticks: 60,
            flee_threshold: 0.3,
            logging: TreeLogConfig::default(),
            log_to_file: false,
            log_dir: None,
        }
    }
}

/// Whether and how to instrument the tree with transition logging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeLogConfig {
    pub enabled: bool,
    pub prefix: String,
    pub postfix: String,
}

impl SoldierConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SOLDIER_TICK_RATE_HZ` - Ticks per simulated second (default: 10)
    /// - `SOLDIER_MAX_TICKS` - Frames to simulate (default: 60)
    /// - `SOLDIER_FLEE_THRESHOLD` - Health ratio that triggers retreat (default: 0.3)
    /// - `SOLDIER_LOG_TREE` - Log every node's state transitions (default: false)
    /// - `SOLDIER_LOG_PREFIX` / `SOLDIER_LOG_POSTFIX` - Framing for transition lines
    /// - `SOLDIER_LOG_FILE` - Also write logs to `soldier.log` (default: false)
    /// - `SOLDIER_LOG_DIR` - Directory for the log file (default: platform cache dir)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`SoldierConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(rate) = read_var::<u32>(&lookup, "SOLDIER_TICK_RATE_HZ")? {
            config.tick_rate_hz = rate;
        }
        if let Some(ticks) = read_var::<u64>(&lookup, "SOLDIER_MAX_TICKS")? {
            config.max_ticks = ticks;
        }
        if let Some(threshold) = read_var::<f32>(&lookup, "SOLDIER_FLEE_THRESHOLD")? {
            config.flee_threshold = threshold;
        }

        config.logging.enabled = read_flag(&lookup, "SOLDIER_LOG_TREE")?;
        config.logging.prefix = lookup("SOLDIER_LOG_PREFIX").unwrap_or_default();
        config.logging.postfix = lookup("SOLDIER_LOG_POSTFIX").unwrap_or_default();

        config.log_to_file = read_flag(&lookup, "SOLDIER_LOG_FILE")?;
        config.log_dir = lookup("SOLDIER_LOG_DIR").map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that parsing alone cannot.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_hz == 0 {
            return Err(invalid("SOLDIER_TICK_RATE_HZ", self.tick_rate_hz, "must be positive"));
        }
        if self.max_ticks == 0 {
            return Err(invalid("SOLDIER_MAX_TICKS", self.max_ticks, "must be positive"));
        }
        if !(self.flee_threshold > 0.0 && self.flee_threshold <= 1.0) {
            return Err(invalid(
                "SOLDIER_FLEE_THRESHOLD",
                self.flee_threshold,
                "must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Simulated time between two ticks.
    pub fn delta(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Settings for a [`TreeLogger`](behavior_tree::TreeLogger) that writes
    /// through `tracing`, or `None` if tree logging is disabled.
    pub fn logger_settings(&self) -> Result<Option<LoggerSettings>> {
        if !self.logging.enabled {
            return Ok(None);
        }

        let settings = LoggerSettings::builder()
            .prefix(self.logging.prefix.as_str())
            .postfix(self.logging.postfix.as_str())
            .sink(tracing_sink())
            .build()?;
        Ok(Some(settings))
    }
}

fn invalid(key: &'static str, value: impl ToString, reason: &'static str) -> SoldierError {
    SoldierError::InvalidConfig {
        key,
        value: value.to_string(),
        reason,
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| invalid(key, &raw, "unparsable")),
    }
}

/// Reads a boolean; a variable that is set but empty counts as `true`.
fn read_flag(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<bool> {
    match lookup(key) {
        None => Ok(false),
        Some(raw) if raw.trim().is_empty() => Ok(true),
        Some(_) => Ok(read_var::<bool>(lookup, key)?.unwrap_or(false)),
    }
}
