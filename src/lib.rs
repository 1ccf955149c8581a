//! # Turnkey - Owner Credential Service
//!
//! This is a facade crate that re-exports all public APIs from the Turnkey components.
//! Use this crate to get access to registration, authentication and the adapters
//! in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Either`, `Email`, `Password`, `Owner`, etc.
//! - **Ports**: `OwnersRepository`, `HashGenerator`, `HashComparer`, `Encrypter`
//! - **Use cases**: `RegisterOwnerUseCase`, `AuthenticateOwnerUseCase`
//! - **Adapters**: `Argon2Hasher`, `JwtEncrypter`, `HashMapOwnersRepository`, `PostgresOwnersRepository`
//! - **Service**: `OwnerAuthService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use turnkey_core::*;
}

// Re-export most commonly used core types at the root level
pub use turnkey_core::{
    AccessToken, Either, Email, HashedPassword, Owner, OwnerName, OwnerProps, Password,
    TokenPayload, UniqueEntityId,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and cryptography trait definitions
pub mod ports {
    pub use turnkey_core::{
        CryptographyError, Encrypter, HashComparer, HashGenerator, OwnersRepository,
        OwnersRepositoryError,
    };
}

pub use turnkey_core::{Encrypter, HashComparer, HashGenerator, OwnersRepository};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use turnkey_application::*;
}

// Re-export use cases at root level
pub use turnkey_application::{
    AuthenticateOwnerUseCase, OwnerAlreadyExistsError, RegisterOwnerUseCase,
    WrongCredentialsError,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use turnkey_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use turnkey_adapters::persistence::*;
    }

    /// Hashing and token implementations
    pub mod cryptography {
        pub use turnkey_adapters::cryptography::*;
    }

    /// Configuration
    pub mod config {
        pub use turnkey_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use turnkey_adapters::{
    cryptography::{Argon2Hasher, JwtEncrypter},
    persistence::{HashMapOwnersRepository, PostgresOwnersRepository},
};

// ============================================================================
// Owner Auth Service (Main Entry Point)
// ============================================================================

/// Main service
pub use turnkey_service::OwnerAuthService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use tokio;
