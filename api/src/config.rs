//! Process configuration read from the environment.

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:products.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl Config {
    /// Read `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and `BIND_ADDR`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        })
    }
}
