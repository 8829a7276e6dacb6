use crate::error::ConfigError;
use crate::settings::DbSettings;
use std::collections::HashMap;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DB_PASS_KEY, DB_URL_KEY, DB_USER_KEY};

/// The optional properties file, looked up in the working directory.
pub const PROPERTIES_FILE: &str = "mission-control.toml";

/// Loads the database settings for this process.
///
/// Values from `mission-control.toml` win over environment variables.
pub fn load_config() -> Result<DbSettings, ConfigError> {
    let properties = load_properties(Path::new(PROPERTIES_FILE))?;
    tracing::debug!(keys = properties.len(), "Loaded configuration properties.");

    DbSettings::resolve(&properties, |key| std::env::var(key).ok())
}

/// Reads a flat TOML properties file. A missing file yields no properties.
///
/// Keys are upper-cased so `app_db_url` and `APP_DB_URL` are the same key.
pub fn load_properties(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml).required(false))
        .build()?;

    let raw = builder.try_deserialize::<HashMap<String, String>>()?;

    Ok(raw
        .into_iter()
        .map(|(key, value)| (key.to_uppercase(), value))
        .collect())
}
