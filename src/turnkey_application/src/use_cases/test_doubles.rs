// Collaborator doubles shared by the use-case tests.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use turnkey_core::{
    AccessToken, CryptographyError, Email, Encrypter, HashComparer, HashGenerator,
    HashedPassword, Owner, OwnersRepository, OwnersRepositoryError, Password, TokenPayload,
};

#[derive(Clone, Default)]
pub struct InMemoryOwnersRepository {
    owners: Arc<RwLock<HashMap<Email, Owner>>>,
    writes: Arc<AtomicUsize>,
    blind_lookups: bool,
}

impl InMemoryOwnersRepository {
    /// A repository whose lookups never find anything, to force two
    /// registrations for the same email all the way to `create`.
    pub fn blind_lookups() -> Self {
        Self {
            blind_lookups: true,
            ..Self::default()
        }
    }

    pub async fn insert(&self, owner: Owner) {
        self.owners
            .write()
            .await
            .insert(owner.email().clone(), owner);
    }

    pub async fn get(&self, email: &Email) -> Option<Owner> {
        self.owners.read().await.get(email).cloned()
    }

    pub async fn len(&self) -> usize {
        self.owners.read().await.len()
    }

    /// Successful `create` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OwnersRepository for InMemoryOwnersRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Owner>, OwnersRepositoryError> {
        if self.blind_lookups {
            return Ok(None);
        }
        Ok(self.get(email).await)
    }

    async fn create(&self, owner: &Owner) -> Result<(), OwnersRepositoryError> {
        let mut owners = self.owners.write().await;
        if owners.contains_key(owner.email()) {
            return Err(OwnersRepositoryError::EmailTaken);
        }
        owners.insert(owner.email().clone(), owner.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct FailingOwnersRepository;

#[async_trait]
impl OwnersRepository for FailingOwnersRepository {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<Owner>, OwnersRepositoryError> {
        Err(OwnersRepositoryError::Unexpected(
            "connection refused".to_string(),
        ))
    }

    async fn create(&self, _owner: &Owner) -> Result<(), OwnersRepositoryError> {
        Err(OwnersRepositoryError::Unexpected(
            "connection refused".to_string(),
        ))
    }
}

/// Reversible "hash" that appends a suffix; good enough to tell plaintext
/// and hash apart.
#[derive(Clone, Copy)]
pub struct FakeHasher;

impl FakeHasher {
    pub fn hash_of(plain: &str) -> HashedPassword {
        HashedPassword::new(Secret::new(format!("{plain}-hashed")))
    }
}

#[async_trait]
impl HashGenerator for FakeHasher {
    async fn hash(&self, plain: &Password) -> Result<HashedPassword, CryptographyError> {
        Ok(Self::hash_of(plain.as_ref().expose_secret()))
    }
}

#[async_trait]
impl HashComparer for FakeHasher {
    async fn compare(
        &self,
        plain: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CryptographyError> {
        let expected = format!("{}-hashed", plain.as_ref().expose_secret());
        Ok(&expected == hash.as_ref().expose_secret())
    }
}

/// [`FakeHasher`] that counts real and decoy comparisons.
#[derive(Clone, Default)]
pub struct CountingHasher {
    comparisons: Arc<AtomicUsize>,
    decoy_comparisons: Arc<AtomicUsize>,
}

impl CountingHasher {
    pub fn comparisons(&self) -> usize {
        self.comparisons.load(Ordering::SeqCst)
    }

    pub fn decoy_comparisons(&self) -> usize {
        self.decoy_comparisons.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HashComparer for CountingHasher {
    async fn compare(
        &self,
        plain: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CryptographyError> {
        self.comparisons.fetch_add(1, Ordering::SeqCst);
        FakeHasher.compare(plain, hash).await
    }

    async fn compare_against_decoy(&self, plain: &Password) -> Result<(), CryptographyError> {
        self.decoy_comparisons.fetch_add(1, Ordering::SeqCst);
        FakeHasher
            .compare(plain, &FakeHasher::hash_of("decoy"))
            .await
            .map(|_| ())
    }
}

/// Serialises the payload as JSON instead of signing it.
#[derive(Clone, Copy)]
pub struct FakeEncrypter;

#[async_trait]
impl Encrypter for FakeEncrypter {
    async fn encrypt(&self, payload: TokenPayload) -> Result<AccessToken, CryptographyError> {
        let token = serde_json::to_string(&payload)
            .map_err(|e| CryptographyError::Encryption(e.to_string()))?;
        Ok(AccessToken::new(Secret::new(token)))
    }
}

#[derive(Clone, Copy)]
pub struct FailingEncrypter;

#[async_trait]
impl Encrypter for FailingEncrypter {
    async fn encrypt(&self, _payload: TokenPayload) -> Result<AccessToken, CryptographyError> {
        Err(CryptographyError::Encryption("signing key missing".to_string()))
    }
}
