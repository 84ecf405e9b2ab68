//! # Axum Helpers
//!
//! Shared building blocks for the workforce HTTP services.
//!
//! - **[`auth`]**: HS256 JWT verification, bearer/cookie middleware, role guard
//! - **[`server`]**: router assembly with OpenAPI viewers, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: `AppError` and the standard error body with error codes
//! - **[`extractors`]**: integer id path, query and validated JSON extractors

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{jwt_auth_middleware, require_roles, JwtAuth, JwtClaims, JwtConfig, RequiredRoles};

pub use server::{
    create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ReadyResponse, ShutdownCoordinator,
};

pub use http::{create_cors_layer, security_headers, CorsConfig};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{ApiQuery, IdPath, ValidatedJson};
