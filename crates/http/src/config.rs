use std::str::FromStr;

use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Allowed CORS origins.
#[derive(Debug, Clone)]
pub enum CorsOrigins {
    /// `*` -- any origin, without credentials.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `DATABASE_URL`         | (required) |
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `5000`     |
    /// | `CORS_ORIGINS`         | `*`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 5000)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;
        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS").as_deref())?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
        })
    }
}

/// Parse variable `key` with `FromStr`, falling back to `default` when unset.
pub fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Parse a boolean flag (`true`/`false`/`1`/`0`), defaulting to `false`.
pub fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<bool, ConfigError> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1") | Some("true") | Some("TRUE") | Some("True") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("False") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            value: other.to_string(),
        }),
    }
}

fn parse_cors_origins(raw: Option<&str>) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .unwrap_or("*")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                key: "CORS_ORIGINS",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            ServerConfig::from_vars(lookup(&[("DATABASE_URL", "postgres://localhost/trivia")]))
                .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(matches!(config.cors_origins, CorsOrigins::Any));
    }

    #[test]
    fn database_url_is_required() {
        let err = ServerConfig::from_vars(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = ServerConfig::from_vars(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn explicit_cors_origins_are_parsed() {
        let config = ServerConfig::from_vars(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("CORS_ORIGINS", "http://localhost:3000, http://localhost:8100"),
        ]))
        .unwrap();

        match config.cors_origins {
            CorsOrigins::List(origins) => assert_eq!(origins.len(), 2),
            CorsOrigins::Any => panic!("expected an explicit origin list"),
        }
    }

    #[test]
    fn flags_parse() {
        let vars = lookup(&[("ON", "true"), ("OFF", "0"), ("BAD", "maybe")]);
        assert!(parse_flag(&vars, "ON").unwrap());
        assert!(!parse_flag(&vars, "OFF").unwrap());
        assert!(!parse_flag(&vars, "UNSET").unwrap());
        assert!(parse_flag(&vars, "BAD").is_err());
    }
}
