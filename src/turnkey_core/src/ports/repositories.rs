use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, owner::Owner};

// OwnersRepository port trait and errors
#[derive(Debug, Error)]
pub enum OwnersRepositoryError {
    #[error("Email is already taken")]
    EmailTaken,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for OwnersRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::EmailTaken, Self::EmailTaken) | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// Persistence contract for owners.
///
/// Implementations own the atomicity of email uniqueness: when two
/// `create` calls race on the same email, exactly one succeeds and the other
/// returns [`OwnersRepositoryError::EmailTaken`].
#[async_trait]
pub trait OwnersRepository: Send + Sync {
    /// Look an owner up by canonical email. Absence is `Ok(None)`.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Owner>, OwnersRepositoryError>;

    async fn create(&self, owner: &Owner) -> Result<(), OwnersRepositoryError>;
}
