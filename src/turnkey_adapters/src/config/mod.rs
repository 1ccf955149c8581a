pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSettings, CorsSettings, DatabaseSettings, HasherSettings,
    RepositoryBackend, RepositorySettings, Settings, SettingsError,
};
