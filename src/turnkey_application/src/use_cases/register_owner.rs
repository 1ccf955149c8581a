use turnkey_core::{
    CryptographyError, Either, Email, HashGenerator, Owner, OwnerName, OwnerProps,
    OwnersRepository, OwnersRepositoryError, Password,
};

use crate::use_cases::errors::OwnerAlreadyExistsError;

/// Input of [`RegisterOwnerUseCase`], already parsed into domain values.
#[derive(Debug)]
pub struct RegisterOwnerRequest {
    pub name: OwnerName,
    pub email: Email,
    pub password: Password,
}

#[derive(Debug, Clone)]
pub struct RegisteredOwner {
    pub owner: Owner,
}

pub type RegisterOwnerResponse = Either<OwnerAlreadyExistsError, RegisteredOwner>;

/// Infrastructure faults raised while registering. Domain failures are not
/// represented here.
#[derive(Debug, thiserror::Error)]
pub enum RegisterOwnerError {
    #[error("Owners repository error: {0}")]
    Repository(#[from] OwnersRepositoryError),
    #[error("Cryptography error: {0}")]
    Cryptography(#[from] CryptographyError),
}

/// Register owner use case - handles owner registration
pub struct RegisterOwnerUseCase<R, H>
where
    R: OwnersRepository,
    H: HashGenerator,
{
    owners_repository: R,
    hash_generator: H,
}

impl<R, H> RegisterOwnerUseCase<R, H>
where
    R: OwnersRepository,
    H: HashGenerator,
{
    pub fn new(owners_repository: R, hash_generator: H) -> Self {
        Self {
            owners_repository,
            hash_generator,
        }
    }

    /// Execute the register owner use case
    ///
    /// # Returns
    /// `Either::Success` with the stored owner, `Either::Failure` with
    /// [`OwnerAlreadyExistsError`] when the email is taken, or
    /// `Err(RegisterOwnerError)` when a collaborator fails.
    #[tracing::instrument(
        name = "RegisterOwnerUseCase::execute",
        skip_all,
        fields(email = %request.email)
    )]
    pub async fn execute(
        &self,
        request: RegisterOwnerRequest,
    ) -> Result<RegisterOwnerResponse, RegisterOwnerError> {
        let RegisterOwnerRequest {
            name,
            email,
            password,
        } = request;

        if self.owners_repository.find_by_email(&email).await?.is_some() {
            tracing::info!("Registration rejected, email already taken");
            return Ok(Either::failure(OwnerAlreadyExistsError::new(email)));
        }

        let hashed_password = self.hash_generator.hash(&password).await?;
        drop(password);

        let owner = Owner::create(OwnerProps {
            name,
            email,
            password: hashed_password,
        });

        match self.owners_repository.create(&owner).await {
            Ok(()) => {}
            // A concurrent registration won the race between lookup and write
            Err(OwnersRepositoryError::EmailTaken) => {
                tracing::warn!("Registration lost a race on the same email");
                return Ok(Either::failure(OwnerAlreadyExistsError::new(
                    owner.email().clone(),
                )));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(owner_id = %owner.id(), "Owner registered");

        Ok(Either::success(RegisteredOwner { owner }))
    }
}
