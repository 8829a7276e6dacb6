use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}

/// Parses a numeric identifier typed at a prompt.
///
/// The raw line is parsed as-is, so surrounding whitespace makes it invalid.
pub fn parse_input<T: FromStr>(field: &str, raw: &str) -> Result<T, CoreError> {
    raw.parse::<T>()
        .map_err(|_| CoreError::InvalidInput(field.to_string(), raw.to_string()))
}
