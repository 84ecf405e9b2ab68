//! Server bootstrap: router assembly with API docs, health endpoints and
//! graceful shutdown.
//!
//! ```ignore
//! let router = create_router::<ApiDoc>(api_routes, &cors)
//!     .merge(health_router(core_config::app_info!()));
//!
//! create_production_app(router, &server_config, async move {
//!     db.close().await.ok();
//! })
//! .await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{
    health_router, run_health_checks, HealthCheckFuture, HealthResponse, ReadyResponse,
};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
