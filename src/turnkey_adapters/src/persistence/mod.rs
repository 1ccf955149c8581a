pub mod hashmap_owners_repository;
pub mod postgres_owners_repository;

pub use hashmap_owners_repository::HashMapOwnersRepository;
pub use postgres_owners_repository::PostgresOwnersRepository;
