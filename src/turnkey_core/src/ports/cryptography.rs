//! Capability traits the use cases depend on. Concrete algorithms live in
//! the adapters and can be swapped without touching use-case code.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    access_token::{AccessToken, TokenPayload},
    password::{HashedPassword, Password},
};

#[derive(Debug, Error)]
pub enum CryptographyError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("Failed to issue token: {0}")]
    Encryption(String),
    #[error("Cryptography task failed: {0}")]
    Executor(String),
}

#[async_trait]
pub trait HashGenerator: Send + Sync {
    /// One-way transform of a plaintext credential. Salting is allowed, so two
    /// calls with the same input may differ; the output never equals the input.
    async fn hash(&self, plain: &Password) -> Result<HashedPassword, CryptographyError>;
}

#[async_trait]
pub trait HashComparer: Send + Sync {
    /// Verify a plaintext against a stored hash. A mismatch is `Ok(false)`.
    async fn compare(
        &self,
        plain: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CryptographyError>;

    /// Do the work of one `compare` without a stored hash to compare against,
    /// so a lookup miss costs as much as a mismatch. Defaults to a no-op.
    async fn compare_against_decoy(&self, _plain: &Password) -> Result<(), CryptographyError> {
        Ok(())
    }
}

#[async_trait]
pub trait Encrypter: Send + Sync {
    /// Issue a signed, opaque token carrying `payload`.
    async fn encrypt(&self, payload: TokenPayload) -> Result<AccessToken, CryptographyError>;
}
