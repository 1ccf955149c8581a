pub mod domain;
pub mod either;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::{AccessToken, TokenPayload},
    email::{Email, EmailError},
    owner::{Owner, OwnerProps},
    owner_name::{OwnerName, OwnerNameError},
    password::{HashedPassword, Password, PasswordError},
    unique_entity_id::UniqueEntityId,
};

pub use either::Either;

pub use ports::{
    cryptography::{CryptographyError, Encrypter, HashComparer, HashGenerator},
    repositories::{OwnersRepository, OwnersRepositoryError},
};
