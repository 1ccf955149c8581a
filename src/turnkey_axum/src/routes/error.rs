use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use turnkey_application::{
    AuthenticateOwnerError, OwnerAlreadyExistsError, RegisterOwnerError, WrongCredentialsError,
};
use turnkey_core::{EmailError, OwnerNameError, PasswordError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    OwnerAlreadyExists(#[from] OwnerAlreadyExistsError),

    #[error("{0}")]
    WrongCredentials(#[from] WrongCredentialsError),

    #[error("Unexpected error")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::OwnerAlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::WrongCredentials(_) => StatusCode::UNAUTHORIZED,
            ApiError::UnexpectedError(cause) => {
                tracing::error!(%cause, "Request failed with an infrastructure fault");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<OwnerNameError> for ApiError {
    fn from(error: OwnerNameError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<RegisterOwnerError> for ApiError {
    fn from(error: RegisterOwnerError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<AuthenticateOwnerError> for ApiError {
    fn from(error: AuthenticateOwnerError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}
