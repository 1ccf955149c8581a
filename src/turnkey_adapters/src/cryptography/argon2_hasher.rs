use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use turnkey_core::{CryptographyError, HashComparer, HashGenerator, HashedPassword, Password};

use crate::config::HasherSettings;

/// Argon2id hasher producing PHC strings with a random salt per hash.
///
/// Hashing is CPU-bound, so both directions run on the blocking pool.
/// A decoy hash with the configured cost is computed once at construction
/// and verified against when an email has no owner.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
    decoy: HashedPassword,
}

impl Argon2Hasher {
    pub fn new(settings: &HasherSettings) -> Result<Self, CryptographyError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| CryptographyError::Hashing(e.to_string()))?;

        let salt = SaltString::generate(rand_core::OsRng);
        let decoy = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
            .hash_password(b"turnkey-decoy", &salt)
            .map(|hash| HashedPassword::new(Secret::new(hash.to_string())))
            .map_err(|e| CryptographyError::Hashing(e.to_string()))?;

        Ok(Self { params, decoy })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl HashGenerator for Argon2Hasher {
    #[tracing::instrument(name = "Argon2Hasher::hash", skip_all)]
    async fn hash(&self, plain: &Password) -> Result<HashedPassword, CryptographyError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let plain = plain.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(plain.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| HashedPassword::new(Secret::new(hash.to_string())))
                    .map_err(|e| CryptographyError::Hashing(e.to_string()))
            })
        })
        .await
        .map_err(|e| CryptographyError::Executor(e.to_string()))?
    }
}

#[async_trait]
impl HashComparer for Argon2Hasher {
    #[tracing::instrument(name = "Argon2Hasher::compare", skip_all)]
    async fn compare(
        &self,
        plain: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CryptographyError> {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();
        let plain = plain.clone();
        let expected = hash.as_ref().clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected = PasswordHash::new(expected.expose_secret())
                    .map_err(|e| CryptographyError::MalformedHash(e.to_string()))?;

                match verifier.verify_password(plain.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CryptographyError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CryptographyError::Executor(e.to_string()))?
    }

    #[tracing::instrument(name = "Argon2Hasher::compare_against_decoy", skip_all)]
    async fn compare_against_decoy(&self, plain: &Password) -> Result<(), CryptographyError> {
        self.compare(plain, &self.decoy).await.map(|_| ())
    }
}
