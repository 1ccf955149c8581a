//! Expected, user-displayable failures. These are returned inside
//! `Either::Failure`, never raised.

use thiserror::Error;
use turnkey_core::Email;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Owner with email \"{email}\" already exists.")]
pub struct OwnerAlreadyExistsError {
    email: Email,
}

impl OwnerAlreadyExistsError {
    pub fn new(email: Email) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// Returned for an unknown email and for a wrong password alike, so the
/// message never reveals whether an account exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("Credentials are not valid.")]
pub struct WrongCredentialsError;
