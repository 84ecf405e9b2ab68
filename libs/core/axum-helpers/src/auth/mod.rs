//! Authentication and authorization.
//!
//! - HS256 JWT verification (stateless; tokens come from an external issuer)
//! - bearer/cookie authentication middleware
//! - role guard middleware
//!
//! ```ignore
//! use axum::middleware::from_fn_with_state;
//! use axum_helpers::auth::{jwt_auth_middleware, require_roles, JwtAuth, JwtConfig, RequiredRoles};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/employees", get(handler))
//!     .layer(from_fn_with_state(RequiredRoles::any_of(["HR", "Admin"]), require_roles))
//!     .layer(from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::{jwt_auth_middleware, require_roles, RequiredRoles};
