//! Runtime settings, read from the environment (and `.env` via dotenv).

use crate::output::OutputFormat;
use crate::processing::SiblingOrder;
use std::str::FromStr;

/// Default log4rs configuration file.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_ORDER: &str = "INVERSE_CIDR_ORDER";
pub const ENV_OUTPUT: &str = "INVERSE_CIDR_OUTPUT";
pub const ENV_LOG_CONFIG: &str = "INVERSE_CIDR_LOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for the command front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Order of single-child complements.
    pub sibling_order: SiblingOrder,
    /// How results are printed.
    pub output: OutputFormat,
    /// Path of the log4rs config file.
    pub log_config: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sibling_order: SiblingOrder::default(),
            output: OutputFormat::default(),
            log_config: LOG_CONFIG_FILE.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through any key lookup; unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(value) = lookup(ENV_ORDER) {
            settings.sibling_order = parse_value(ENV_ORDER, &value)?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            settings.output = parse_value(ENV_OUTPUT, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_CONFIG) {
            if !value.trim().is_empty() {
                settings.log_config = value.trim().to_string();
            }
        }
        log::debug!("settings: {settings:?}");
        Ok(settings)
    }
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|reason| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    })
}
