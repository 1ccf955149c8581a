pub mod use_cases;

pub use use_cases::{
    authenticate_owner::{
        AuthenticateOwnerError, AuthenticateOwnerRequest, AuthenticateOwnerResponse,
        AuthenticateOwnerUseCase, AuthenticatedOwner,
    },
    errors::{OwnerAlreadyExistsError, WrongCredentialsError},
    register_owner::{
        RegisterOwnerError, RegisterOwnerRequest, RegisterOwnerResponse, RegisterOwnerUseCase,
        RegisteredOwner,
    },
};
