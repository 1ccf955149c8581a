pub mod argon2_hasher;
pub mod jwt_encrypter;

pub use argon2_hasher::Argon2Hasher;
pub use jwt_encrypter::{JwtEncrypter, JwtSettings};

use crate::config::Settings;

/// The concrete hasher and encrypter the service is wired with.
#[derive(Clone)]
pub struct Cryptography {
    pub hasher: Argon2Hasher,
    pub encrypter: JwtEncrypter,
}

impl Cryptography {
    pub fn from_settings(settings: &Settings) -> Result<Self, turnkey_core::CryptographyError> {
        Ok(Self {
            hasher: Argon2Hasher::new(&settings.hasher)?,
            encrypter: JwtEncrypter::new(settings.jwt.clone()),
        })
    }
}
