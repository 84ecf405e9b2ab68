//! Shared application state.

use axum_helpers::JwtAuth;

/// Cloned into every router that needs it; all fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
    /// HS256 verifier for bearer tokens
    pub jwt_auth: JwtAuth,
}
