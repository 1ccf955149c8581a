use color_eyre::eyre::{Result, eyre};
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use turnkey_adapters::{
    config::{RepositoryBackend, Settings},
    cryptography::Cryptography,
    persistence::{
        HashMapOwnersRepository, PostgresOwnersRepository,
        postgres_owners_repository::get_postgres_pool,
    },
};
use turnkey_service::OwnerAuthService;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;
    let Cryptography { hasher, encrypter } = Cryptography::from_settings(&settings)?;

    let allowed_origins = Some(settings.cors.allowed_origins.clone())
        .filter(|origins| !origins.is_empty());

    let listener = TcpListener::bind(&settings.application.address).await?;

    let service = match settings.repository.backend {
        RepositoryBackend::Memory => {
            tracing::warn!("Using the in-memory repository, owners are lost on restart");
            OwnerAuthService::new(HashMapOwnersRepository::new(), hasher, encrypter)
        }
        RepositoryBackend::Postgres => {
            let url = settings
                .database
                .url
                .as_ref()
                .ok_or_else(|| eyre!("database.url is not configured"))?;

            // Setup database connection pool
            let pool = get_postgres_pool(url, settings.database.max_connections).await?;
            let owners_repository = PostgresOwnersRepository::new(pool);

            // Run migrations
            owners_repository.migrate().await?;

            OwnerAuthService::new(owners_repository, hasher, encrypter)
        }
    };

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
