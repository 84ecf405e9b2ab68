//! Custom extractors for Axum handlers.
//!
//! Each one rejects with [`AppError`](crate::errors::AppError) so failures
//! render the standard error body instead of axum's plain-text rejections.

pub mod id_path;
pub mod query;
pub mod validated_json;

pub use id_path::IdPath;
pub use query::ApiQuery;
pub use validated_json::ValidatedJson;
