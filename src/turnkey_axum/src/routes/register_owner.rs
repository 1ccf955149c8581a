//! Axum-specific owner registration route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use turnkey_application::{RegisterOwnerRequest, RegisterOwnerUseCase, RegisteredOwner};
use turnkey_core::{Either, Email, HashGenerator, Owner, OwnerName, OwnersRepository, Password};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct RegisterOwnerBody {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

/// Public view of an owner, without credentials
#[derive(Debug, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Owner> for OwnerResponse {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id().to_string(),
            name: owner.name().to_string(),
            email: owner.email().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterOwnerResponseBody {
    pub owner: OwnerResponse,
}

#[tracing::instrument(name = "Register owner", skip_all)]
pub async fn register_owner<R, H>(
    State((owners_repository, hash_generator)): State<(R, H)>,
    Json(body): Json<RegisterOwnerBody>,
) -> Result<impl IntoResponse, ApiError>
where
    R: OwnersRepository + Clone + 'static,
    H: HashGenerator + Clone + 'static,
{
    let request = RegisterOwnerRequest {
        name: OwnerName::parse(body.name)?,
        email: Email::parse(body.email)?,
        password: Password::try_from(body.password)?,
    };

    let use_case = RegisterOwnerUseCase::new(owners_repository, hash_generator);

    match use_case.execute(request).await? {
        Either::Failure(error) => Err(error.into()),
        Either::Success(RegisteredOwner { owner }) => Ok((
            StatusCode::CREATED,
            Json(RegisterOwnerResponseBody {
                owner: OwnerResponse::from(&owner),
            }),
        )),
    }
}
