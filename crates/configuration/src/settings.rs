use crate::error::ConfigError;
use std::collections::HashMap;
use std::fmt;

/// Key of the database connection URL.
pub const DB_URL_KEY: &str = "APP_DB_URL";
/// Key of the database user.
pub const DB_USER_KEY: &str = "APP_DB_USER";
/// Key of the database password.
pub const DB_PASS_KEY: &str = "APP_DB_PASS";

/// Connection parameters for the single database connection of a session.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    /// The connection URL (e.g., "postgres://localhost:5432/missions").
    pub url: String,
    pub username: String,
    pub password: String,
}

// The password must never end up in logs.
impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DbSettings {
    /// Resolves the three required values, looking in `properties` first and
    /// falling back to `env`.
    ///
    /// Values are trimmed, and a blank value counts as absent in either source.
    /// Every missing key is reported in a single error.
    pub fn resolve<F>(properties: &HashMap<String, String>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            non_blank(properties.get(key).cloned()).or_else(|| non_blank(env(key)))
        };

        let url = lookup(DB_URL_KEY);
        let username = lookup(DB_USER_KEY);
        let password = lookup(DB_PASS_KEY);

        match (url, username, password) {
            (Some(url), Some(username), Some(password)) => Ok(Self {
                url,
                username,
                password,
            }),
            (url, username, password) => {
                let missing = [
                    (DB_URL_KEY, url.is_none()),
                    (DB_USER_KEY, username.is_none()),
                    (DB_PASS_KEY, password.is_none()),
                ]
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(key, _)| key.to_string())
                .collect();
                Err(ConfigError::Missing(missing))
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn resolves_everything_from_properties() {
        let props = properties(&[
            (DB_URL_KEY, "postgres://localhost/missions"),
            (DB_USER_KEY, "houston"),
            (DB_PASS_KEY, "apollo"),
        ]);
        let settings = DbSettings::resolve(&props, no_env).unwrap();
        assert_eq!(settings.url, "postgres://localhost/missions");
        assert_eq!(settings.username, "houston");
        assert_eq!(settings.password, "apollo");
    }

    #[test]
    fn properties_take_precedence_over_environment() {
        let props = properties(&[(DB_USER_KEY, "from-props")]);
        let env = |key: &str| Some(format!("env-{key}"));
        let settings = DbSettings::resolve(&props, env).unwrap();
        assert_eq!(settings.username, "from-props");
        assert_eq!(settings.url, "env-APP_DB_URL");
        assert_eq!(settings.password, "env-APP_DB_PASS");
    }

    #[test]
    fn blank_values_fall_through_and_are_trimmed() {
        let props = properties(&[(DB_URL_KEY, "   "), (DB_USER_KEY, "  houston  ")]);
        let env = |key: &str| match key {
            DB_URL_KEY => Some(" postgres://db/missions ".to_string()),
            DB_PASS_KEY => Some("apollo".to_string()),
            _ => None,
        };
        let settings = DbSettings::resolve(&props, env).unwrap();
        assert_eq!(settings.url, "postgres://db/missions");
        assert_eq!(settings.username, "houston");
    }

    #[test]
    fn reports_every_missing_key() {
        let props = properties(&[(DB_USER_KEY, "houston")]);
        let env = |key: &str| (key == DB_PASS_KEY).then(String::new);
        match DbSettings::resolve(&props, env) {
            Err(ConfigError::Missing(keys)) => {
                assert_eq!(keys, vec![DB_URL_KEY.to_string(), DB_PASS_KEY.to_string()]);
            }
            other => panic!("expected missing keys, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_the_password() {
        let settings = DbSettings {
            url: "postgres://db".to_string(),
            username: "houston".to_string(),
            password: "apollo".to_string(),
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("apollo"));
        assert!(rendered.contains("houston"));
    }
}
