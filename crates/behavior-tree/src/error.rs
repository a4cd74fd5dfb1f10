//! Construction errors.
//!
//! Ticking never fails; the only errors the library reports come from
//! building its configuration objects.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("logger settings require a log sink")]
    MissingSink,
}
