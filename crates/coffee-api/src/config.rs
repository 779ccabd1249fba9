use fsnd_http::config::{parse_flag, ConfigError, ServerConfig};

/// Where token signing keys come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyConfig {
    /// RS256 keys published by an Auth0 tenant at
    /// `https://{domain}/.well-known/jwks.json`.
    Auth0 { domain: String },
    /// HS256 shared secret.
    Secret(String),
}

/// Token verification configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub keys: KeyConfig,
    /// Expected `aud` claim. Not checked when unset.
    pub audience: Option<String>,
}

/// Full coffee-shop server configuration.
#[derive(Debug, Clone)]
pub struct CoffeeConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    /// Drop all drinks and insert the demo drink at startup.
    pub reset_drinks_on_start: bool,
}

impl CoffeeConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                                |
    /// |-------------------------|----------------------------------------|
    /// | `AUTH0_DOMAIN`          | unset                                  |
    /// | `API_AUDIENCE`          | unset                                  |
    /// | `JWT_SECRET`            | (required when `AUTH0_DOMAIN` unset)   |
    /// | `RESET_DRINKS_ON_START` | `false`                                |
    ///
    /// plus everything read by [`ServerConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let keys = match non_empty("AUTH0_DOMAIN") {
            Some(domain) => KeyConfig::Auth0 {
                domain: domain.trim().trim_end_matches('/').to_string(),
            },
            None => KeyConfig::Secret(
                non_empty("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            ),
        };

        let auth = AuthConfig {
            keys,
            audience: non_empty("API_AUDIENCE"),
        };
        let reset_drinks_on_start = parse_flag(&lookup, "RESET_DRINKS_ON_START")?;
        let server = ServerConfig::from_vars(lookup)?;

        Ok(Self {
            server,
            auth,
            reset_drinks_on_start,
        })
    }
}
