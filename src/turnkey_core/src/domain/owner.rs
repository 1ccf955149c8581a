use crate::domain::{
    email::Email, owner_name::OwnerName, password::HashedPassword,
    unique_entity_id::UniqueEntityId,
};

/// Fields required to bring an owner into existence.
#[derive(Debug, Clone)]
pub struct OwnerProps {
    pub name: OwnerName,
    pub email: Email,
    pub password: HashedPassword,
}

/// A registered account holder.
///
/// The entity knows nothing about other owners: email uniqueness is enforced
/// by the use case and the repository, not here.
#[derive(Debug, Clone)]
pub struct Owner {
    id: UniqueEntityId,
    props: OwnerProps,
}

impl Owner {
    /// Create a brand new owner with a freshly assigned identity.
    pub fn create(props: OwnerProps) -> Self {
        Self {
            id: UniqueEntityId::new(),
            props,
        }
    }

    /// Rebuild an owner that already has an identity, e.g. from storage.
    pub fn restore(id: UniqueEntityId, props: OwnerProps) -> Self {
        Self { id, props }
    }

    pub fn id(&self) -> &UniqueEntityId {
        &self.id
    }

    pub fn name(&self) -> &OwnerName {
        &self.props.name
    }

    pub fn email(&self) -> &Email {
        &self.props.email
    }

    pub fn password(&self) -> &HashedPassword {
        &self.props.password
    }
}
