use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};
use turnkey_core::{
    Email, HashedPassword, Owner, OwnerName, OwnerProps, OwnersRepository, OwnersRepositoryError,
    UniqueEntityId,
};
use uuid::Uuid;

/// Owners stored in PostgreSQL. Email uniqueness is guaranteed by the
/// `UNIQUE` constraint on `owners.email`.
#[derive(Clone)]
pub struct PostgresOwnersRepository {
    pool: PgPool,
}

impl PostgresOwnersRepository {
    pub fn new(pool: PgPool) -> Self {
        PostgresOwnersRepository { pool }
    }

    /// Apply the bundled migrations
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(
    url: &Secret<String>,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url.expose_secret())
        .await
}

#[derive(sqlx::FromRow)]
struct OwnerRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
}

impl TryFrom<OwnerRow> for Owner {
    type Error = OwnersRepositoryError;

    fn try_from(row: OwnerRow) -> Result<Self, Self::Error> {
        let name =
            OwnerName::parse(row.name).map_err(|e| OwnersRepositoryError::Unexpected(e.to_string()))?;
        let email =
            Email::parse(row.email).map_err(|e| OwnersRepositoryError::Unexpected(e.to_string()))?;

        Ok(Owner::restore(
            UniqueEntityId::from(row.id),
            OwnerProps {
                name,
                email,
                password: HashedPassword::new(Secret::new(row.password_hash)),
            },
        ))
    }
}

#[async_trait::async_trait]
impl OwnersRepository for PostgresOwnersRepository {
    #[tracing::instrument(name = "Retrieving owner from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Owner>, OwnersRepositoryError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            r#"
                SELECT id, name, email, password_hash
                FROM owners
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OwnersRepositoryError::Unexpected(e.to_string()))?;

        row.map(Owner::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding owner to PostgreSQL", skip_all)]
    async fn create(&self, owner: &Owner) -> Result<(), OwnersRepositoryError> {
        let query = sqlx::query(
            r#"
                INSERT INTO owners (id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(*owner.id().as_uuid())
        .bind(owner.name().as_str())
        .bind(owner.email().as_str())
        .bind(owner.password().as_ref().expose_secret().as_str());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return OwnersRepositoryError::EmailTaken;
                }
            }
            OwnersRepositoryError::Unexpected(e.to_string())
        })?;

        Ok(())
    }
}
