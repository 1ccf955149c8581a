//! Axum-specific session route: exchanges credentials for an access token.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use turnkey_application::{
    AuthenticateOwnerRequest, AuthenticateOwnerUseCase, AuthenticatedOwner, WrongCredentialsError,
};
use turnkey_core::{Either, Email, Encrypter, HashComparer, OwnersRepository, Password};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AuthenticateBody {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticateResponseBody {
    pub access_token: String,
}

#[tracing::instrument(name = "Authenticate", skip_all)]
pub async fn authenticate<R, C, E>(
    State((owners_repository, hash_comparer, encrypter)): State<(R, C, E)>,
    Json(body): Json<AuthenticateBody>,
) -> Result<impl IntoResponse, ApiError>
where
    R: OwnersRepository + Clone + 'static,
    C: HashComparer + Clone + 'static,
    E: Encrypter + Clone + 'static,
{
    let email = Email::parse(body.email)?;
    // No owner can hold an empty password
    let Ok(password) = Password::try_from(body.password) else {
        return Err(WrongCredentialsError.into());
    };
    let request = AuthenticateOwnerRequest { email, password };

    let use_case = AuthenticateOwnerUseCase::new(owners_repository, hash_comparer, encrypter);

    match use_case.execute(request).await? {
        Either::Failure(error) => Err(error.into()),
        Either::Success(AuthenticatedOwner { access_token }) => Ok((
            StatusCode::CREATED,
            Json(AuthenticateResponseBody {
                access_token: access_token.as_ref().expose_secret().clone(),
            }),
        )),
    }
}
