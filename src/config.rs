use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 50u32)?;
        let min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 5u32)?;
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: min_connections.to_string(),
            });
        }

        Ok(Self {
            environment: lookup("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080u16)?,
            database: DatabaseConfig {
                url,
                max_connections,
                min_connections,
                connect_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_CONNECT_TIMEOUT_SECS",
                    5u64,
                )?),
                acquire_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_ACQUIRE_TIMEOUT_SECS",
                    5u64,
                )?),
                run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/cms")]))
                .unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.database.url, "postgres://localhost/cms");
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.database.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(5));
        assert!(config.database.run_migrations);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/cms"),
            ("RUST_ENV", "production"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_MIN_CONNECTIONS", "2"),
            ("DB_CONNECT_TIMEOUT_SECS", "3"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "7"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 2);
        assert_eq!(config.database.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(7));
        assert!(!config.database.run_migrations);
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/cms"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn min_connections_cannot_exceed_max() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/cms"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_MIN_CONNECTIONS", "10"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                ..
            }
        ));
    }
}
