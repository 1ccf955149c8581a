//! Axum-specific route handlers.

pub mod authenticate;
pub mod error;
pub mod register_owner;

pub use authenticate::authenticate;
pub use error::{ApiError, ErrorResponse};
pub use register_owner::register_owner;
