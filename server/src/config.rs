use std::env;

use derive_more::Display;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "{} must be set", _0)]
    MissingVar(&'static str),
    #[display(fmt = "POLLS_STORAGE must be `postgres` or `memory`, got `{}`", _0)]
    InvalidStorage(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Postgres { database_url: String },
    Memory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub client_host: Option<String>,
    pub storage: Storage,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| {
            info!("BIND_ADDRESS not set, using default: {}", DEFAULT_BIND_ADDRESS);
            DEFAULT_BIND_ADDRESS.to_string()
        });

        let storage = match var("POLLS_STORAGE").as_deref().unwrap_or("postgres") {
            "postgres" => Storage::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
            },
            "memory" => Storage::Memory,
            other => return Err(ConfigError::InvalidStorage(other.to_string())),
        };

        Ok(Config {
            bind_address,
            client_host: var("CLIENT_HOST").filter(|host| !host.is_empty()),
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Config, ConfigError, Storage};

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_postgres() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/polls")]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.client_host, None);
        assert_eq!(
            config.storage,
            Storage::Postgres {
                database_url: "postgres://localhost/polls".to_string()
            }
        );
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert_eq!(load(&[]), Err(ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_memory_storage() {
        let config = load(&[
            ("POLLS_STORAGE", "memory"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("CLIENT_HOST", "http://localhost:3000"),
        ])
        .unwrap();
        assert_eq!(config.storage, Storage::Memory);
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.client_host.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_rejects_unknown_storage() {
        assert_eq!(
            load(&[("POLLS_STORAGE", "sqlite")]),
            Err(ConfigError::InvalidStorage("sqlite".to_string()))
        );
    }
}
