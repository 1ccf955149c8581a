mod owner_auth_service;
pub mod tracing;

pub use owner_auth_service::OwnerAuthService;
