use crate::error::{config::ConfigError, AppError};

/// Dyno moderation bot. Its reactions are automated, so they are never logged or scrubbed.
const DEFAULT_SYSTEM_ACCOUNT_ID: u64 = 155149108183695360;

pub struct Config {
    pub discord_token: String,
    pub database_url: String,

    /// Account whose reaction events are ignored entirely.
    pub system_account_id: u64,

    /// Emit logs as JSON lines instead of the human readable format.
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required_var("DISCORD_TOKEN")?,
            database_url: required_var("DATABASE_URL")?,
            system_account_id: match std::env::var("SYSTEM_ACCOUNT_ID") {
                Ok(value) => parse_system_account_id(&value)?,
                Err(_) => DEFAULT_SYSTEM_ACCOUNT_ID,
            },
            json_logs: std::env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parse_system_account_id(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "SYSTEM_ACCOUNT_ID".to_string(),
            reason: e.to_string(),
        })
}
