use serde_json::Value;
use turnkey_core::{
    AccessToken, CryptographyError, Either, Email, Encrypter, HashComparer, OwnersRepository,
    OwnersRepositoryError, Password, TokenPayload,
};

use crate::use_cases::errors::WrongCredentialsError;

/// Input of [`AuthenticateOwnerUseCase`]
#[derive(Debug)]
pub struct AuthenticateOwnerRequest {
    pub email: Email,
    pub password: Password,
}

#[derive(Debug, Clone)]
pub struct AuthenticatedOwner {
    pub access_token: AccessToken,
}

pub type AuthenticateOwnerResponse = Either<WrongCredentialsError, AuthenticatedOwner>;

/// Error types specific to authenticate owner use case
#[derive(Debug, thiserror::Error)]
pub enum AuthenticateOwnerError {
    #[error("Owners repository error: {0}")]
    Repository(#[from] OwnersRepositoryError),
    #[error("Cryptography error: {0}")]
    Cryptography(#[from] CryptographyError),
}

/// Authenticate owner use case - verifies credentials and issues an access token
pub struct AuthenticateOwnerUseCase<R, C, E>
where
    R: OwnersRepository,
    C: HashComparer,
    E: Encrypter,
{
    owners_repository: R,
    hash_comparer: C,
    encrypter: E,
}

impl<R, C, E> AuthenticateOwnerUseCase<R, C, E>
where
    R: OwnersRepository,
    C: HashComparer,
    E: Encrypter,
{
    pub fn new(owners_repository: R, hash_comparer: C, encrypter: E) -> Self {
        Self {
            owners_repository,
            hash_comparer,
            encrypter,
        }
    }

    /// Execute the authenticate owner use case
    ///
    /// Unknown email and wrong password both yield the same
    /// [`WrongCredentialsError`], and both pay for one hash comparison.
    /// The repository is never written to.
    #[tracing::instrument(name = "AuthenticateOwnerUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: AuthenticateOwnerRequest,
    ) -> Result<AuthenticateOwnerResponse, AuthenticateOwnerError> {
        let AuthenticateOwnerRequest { email, password } = request;

        let Some(owner) = self.owners_repository.find_by_email(&email).await? else {
            self.hash_comparer.compare_against_decoy(&password).await?;
            tracing::debug!(reason = "unknown email", "Credentials rejected");
            return Ok(Either::failure(WrongCredentialsError));
        };

        if !self
            .hash_comparer
            .compare(&password, owner.password())
            .await?
        {
            tracing::debug!(reason = "password mismatch", "Credentials rejected");
            return Ok(Either::failure(WrongCredentialsError));
        }

        let mut payload = TokenPayload::new();
        payload.insert("sub".to_owned(), Value::String(owner.id().to_string()));

        let access_token = self.encrypter.encrypt(payload).await?;

        tracing::info!(owner_id = %owner.id(), "Owner authenticated");

        Ok(Either::success(AuthenticatedOwner { access_token }))
    }
}
