use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is required when {reason}")]
    Missing { name: &'static str, reason: &'static str },

    #[error("{name} has an invalid value '{value}': {message}")]
    Invalid {
        name: &'static str,
        value: String,
        message: String,
    },
}

/// Which document store backs the content layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBackend {
    /// Embedded SQLite document store (local development, tests).
    Sqlite,
    /// Payload-compatible REST API rooted at the given URL (e.g. `https://cms.example.com/api`).
    Payload { api_url: Url },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub database_path: PathBuf,
    pub schema_path: PathBuf,
    pub content_backend: ContentBackend,
    pub content_timeout: Duration,
    pub site_url: Option<Url>,
    pub seed_file: Option<PathBuf>,
    pub admin_token: Option<String>,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_or(&var, "BIND_ADDR", "127.0.0.1:3000".parse().ok())?;
        let max_workers = parse_or(&var, "MAX_WORKERS", Some(8usize))?;
        let timeout_secs = parse_or(&var, "CONTENT_TIMEOUT_SECS", Some(10u64))?;

        let content_backend = match var("CONTENT_BACKEND").as_deref() {
            None | Some("sqlite") => ContentBackend::Sqlite,
            Some("payload") => {
                let raw = var("PAYLOAD_API_URL").ok_or(ConfigError::Missing {
                    name: "PAYLOAD_API_URL",
                    reason: "CONTENT_BACKEND=payload",
                })?;
                ContentBackend::Payload {
                    api_url: parse_url("PAYLOAD_API_URL", &raw)?,
                }
            }
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "CONTENT_BACKEND",
                    value: other.to_string(),
                    message: "expected 'sqlite' or 'payload'".to_string(),
                })
            }
        };

        let site_url = match var("SITE_URL") {
            Some(raw) => Some(parse_url("SITE_URL", &raw)?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            database_path: var("DATABASE_PATH")
                .unwrap_or_else(|| "realty.sqlite3".to_string())
                .into(),
            schema_path: var("SCHEMA_PATH")
                .unwrap_or_else(|| "sql/schema.sql".to_string())
                .into(),
            content_backend,
            content_timeout: Duration::from_secs(timeout_secs),
            site_url,
            seed_file: var("SEED_FILE").map(PathBuf::from),
            admin_token: var("ADMIN_TOKEN"),
        })
    }
}

fn parse_or<T, F>(var: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            value: raw.clone(),
            message: e.to_string(),
        }),
        None => default.ok_or(ConfigError::Missing {
            name,
            reason: "no default exists",
        }),
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        name,
        value: raw.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.content_backend, ContentBackend::Sqlite);
        assert_eq!(cfg.content_timeout, Duration::from_secs(10));
        assert!(cfg.site_url.is_none());
        assert!(cfg.admin_token.is_none());
    }

    #[test]
    fn payload_backend_requires_api_url() {
        let err = AppConfig::from_lookup(lookup(&[("CONTENT_BACKEND", "payload")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "PAYLOAD_API_URL",
                ..
            }
        ));

        let cfg = AppConfig::from_lookup(lookup(&[
            ("CONTENT_BACKEND", "payload"),
            ("PAYLOAD_API_URL", "https://cms.example.com/api"),
        ]))
        .unwrap();
        match cfg.content_backend {
            ContentBackend::Payload { api_url } => {
                assert_eq!(api_url.as_str(), "https://cms.example.com/api")
            }
            other => panic!("unexpected backend {other:?}"),
        }
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("MAX_WORKERS", "many")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("CONTENT_BACKEND", "mongo")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("SITE_URL", "not a url")])).is_err());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[("ADMIN_TOKEN", "  "), ("MAX_WORKERS", "")]))
            .unwrap();
        assert!(cfg.admin_token.is_none());
        assert_eq!(cfg.max_workers, 8);
    }
}
