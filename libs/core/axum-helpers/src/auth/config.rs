//! JWT configuration loaded through `core_config::FromEnv`.

use core_config::{env_or_default, env_required, ConfigError, FromEnv};

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 900;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_ACCESS_TTL_SECS` (optional, default 900) lifetime of minted tokens
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    pub access_token_ttl_secs: i64,
}

impl JwtConfig {
    /// Create a config with the given secret and the default token lifetime.
    ///
    /// # Panics
    /// Panics if the secret is shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
        }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let ttl = env_or_default(
            "JWT_ACCESS_TTL_SECS",
            &DEFAULT_ACCESS_TOKEN_TTL_SECS.to_string(),
        );
        let access_token_ttl_secs = ttl
            .parse::<i64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| ConfigError::ParseError {
                key: "JWT_ACCESS_TTL_SECS".to_string(),
                details: format!("expected a positive number of seconds, got '{}'", ttl),
            })?;

        Ok(Self {
            secret,
            access_token_ttl_secs,
        })
    }
}
