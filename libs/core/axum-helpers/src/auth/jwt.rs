use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // Subject (user ID)
    pub email: String, // User email
    pub name: String,  // User name
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
    pub jti: String,
}

impl JwtClaims {
    /// Case-insensitive check against any of the given role labels.
    pub fn has_any_role<S: AsRef<str>>(&self, allowed: &[S]) -> bool {
        self.roles.iter().any(|role| {
            allowed
                .iter()
                .any(|wanted| role.eq_ignore_ascii_case(wanted.as_ref()))
        })
    }
}

/// Stateless HS256 JWT verification.
///
/// Tokens are issued by an external identity service; [`create_access_token`]
/// mints compatible tokens for tests and local tooling.
///
/// [`create_access_token`]: JwtAuth::create_access_token
#[derive(Clone)]
pub struct JwtAuth {
    inner: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_token_ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        tracing::info!("JWT auth initialized");
        Self {
            inner: Arc::new(Keys {
                encoding: EncodingKey::from_secret(config.secret.as_bytes()),
                decoding: DecodingKey::from_secret(config.secret.as_bytes()),
                validation,
                access_token_ttl_secs: config.access_token_ttl_secs,
            }),
        }
    }

    /// Create an access token with the configured lifetime
    pub fn create_access_token(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
        roles: &[String],
    ) -> eyre::Result<String> {
        self.create_token(user_id, email, name, roles, self.inner.access_token_ttl_secs)
    }

    /// Create a token with an explicit TTL; negative values produce expired tokens.
    pub fn create_token(
        &self,
        user_id: &str,
        email: &str,
        name: &str,
        roles: &[String],
        ttl_seconds: i64,
    ) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.inner.encoding)?;
        Ok(token)
    }

    /// Verify JWT token signature and expiry, then decode claims
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(token, &self.inner.decoding, &self.inner.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret-that-is-long-enough-for-hs256"))
    }

    #[test]
    fn test_token_roundtrip_keeps_roles() {
        let auth = auth();
        let token = auth
            .create_access_token("u-1", "hr@example.com", "Hana", &["HR".to_string()])
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.roles, vec!["HR".to_string()]);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let auth = auth();
        let token = auth
            .create_token("u-1", "a@example.com", "A", &[], -120)
            .unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtAuth::new(&JwtConfig::new("another-secret-that-is-also-32-chars-long"));
        let token = other
            .create_access_token("u-1", "a@example.com", "A", &[])
            .unwrap();
        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_has_any_role_is_case_insensitive() {
        let claims = JwtClaims {
            sub: "1".into(),
            email: "e@example.com".into(),
            name: "E".into(),
            roles: vec!["hr".into()],
            exp: 0,
            iat: 0,
            jti: "j".into(),
        };
        assert!(claims.has_any_role(&["HR", "Admin"]));
        assert!(!claims.has_any_role(&["Admin"]));
    }
}
