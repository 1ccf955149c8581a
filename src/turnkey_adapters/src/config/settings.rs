use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::constants::{SETTINGS_FILE, env, prod},
    cryptography::JwtSettings,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("database.url is required when repository.backend is postgres")]
    MissingDatabaseUrl,
    #[error("jwt.time_to_live must be a positive number of seconds, got {0}")]
    NonPositiveTokenLifetime(i64),
}

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub repository: RepositorySettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub hasher: HasherSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySettings {
    pub backend: RepositoryBackend,
}

#[derive(Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<Secret<String>>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct HasherSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: impl AsRef<[u8]>) -> bool {
        let origin = origin.as_ref();
        self.0.iter().any(|allowed| allowed.as_bytes() == origin)
    }
}

impl Settings {
    /// Load settings from defaults, an optional `settings.json` in the
    /// working directory and `TURNKEY_*` environment variables, in that order
    /// of precedence. A `.env` file is read first when present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let source = Self::defaults()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Self::environment())
            .build()?;

        Self::from_config(source)
    }

    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator("_")
            .separator(env::ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
            .try_parsing(true)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("repository.backend", "memory")?
            .set_default("jwt.time_to_live", prod::TOKEN_TTL_IN_SECONDS)?
            .set_default("hasher.memory_kib", prod::HASHER_MEMORY_KIB)?
            .set_default("hasher.iterations", prod::HASHER_ITERATIONS)?
            .set_default("hasher.parallelism", prod::HASHER_PARALLELISM)
    }

    fn from_config(source: Config) -> Result<Self, SettingsError> {
        let settings: Settings = source.try_deserialize()?;

        if settings.repository.backend == RepositoryBackend::Postgres
            && settings.database.url.is_none()
        {
            return Err(SettingsError::MissingDatabaseUrl);
        }

        if settings.jwt.time_to_live <= 0 {
            return Err(SettingsError::NonPositiveTokenLifetime(
                settings.jwt.time_to_live,
            ));
        }

        Ok(settings)
    }
}
