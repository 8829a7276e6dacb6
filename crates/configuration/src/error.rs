use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error(
        "Missing DB configuration: {}. Provide APP_DB_URL, APP_DB_USER, APP_DB_PASS \
         in mission-control.toml or as environment variables.",
        .0.join(", ")
    )]
    Missing(Vec<String>),
}
