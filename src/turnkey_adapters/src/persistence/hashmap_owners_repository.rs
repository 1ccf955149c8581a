use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use turnkey_core::{Email, Owner, OwnersRepository, OwnersRepositoryError};

/// In-process repository. The uniqueness check and the insert happen under
/// one write lock, so concurrent `create` calls for an email cannot both win.
#[derive(Default, Clone)]
pub struct HashMapOwnersRepository {
    owners: Arc<RwLock<HashMap<Email, Owner>>>,
}

impl HashMapOwnersRepository {
    pub fn new() -> Self {
        Self {
            owners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.owners.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.owners.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl OwnersRepository for HashMapOwnersRepository {
    #[tracing::instrument(name = "Retrieving owner from memory", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Owner>, OwnersRepositoryError> {
        let owners = self.owners.read().await;
        Ok(owners.get(email).cloned())
    }

    #[tracing::instrument(name = "Adding owner to memory", skip_all)]
    async fn create(&self, owner: &Owner) -> Result<(), OwnersRepositoryError> {
        let mut owners = self.owners.write().await;
        if owners.contains_key(owner.email()) {
            return Err(OwnersRepositoryError::EmailTaken);
        }
        owners.insert(owner.email().clone(), owner.clone());
        Ok(())
    }
}
