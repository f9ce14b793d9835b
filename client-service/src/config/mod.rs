use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Database holding the client collection.
pub const DATABASE_NAME: &str = "test";
/// Collection of client records.
pub const COLLECTION_NAME: &str = "clients";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    /// Connection string with `{}` (or `{0}` / `{1}`) credential placeholders.
    pub connection_template: String,
    pub user: String,
    pub password: Secret<String>,
    /// Fixed to [`DATABASE_NAME`] outside of tests.
    pub database: String,
}

impl MongoConfig {
    /// Resolve the template into a usable URI.
    ///
    /// `{0}` and `{1}` name the user and password explicitly; bare `{}`
    /// placeholders are filled left to right with user, then password.
    pub fn connection_uri(&self) -> Result<String, AppError> {
        let user = self.user.as_str();
        let password = self.password.expose_secret().as_str();

        let mut positional = [user, password].into_iter();
        let mut uri = String::with_capacity(self.connection_template.len());
        let mut rest = self.connection_template.as_str();

        // Single pass over the template; substituted credentials are never rescanned.
        while let Some(pos) = rest.find('{') {
            uri.push_str(&rest[..pos]);
            rest = &rest[pos..];

            let (arg, consumed) = if rest.starts_with("{}") {
                let arg = positional.next().ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "MONGO_CONNECTION has more than two `{{}}` placeholders"
                    ))
                })?;
                (arg, 2)
            } else if rest.starts_with("{0}") {
                (user, 3)
            } else if rest.starts_with("{1}") {
                (password, 3)
            } else {
                ("{", 1)
            };

            uri.push_str(arg);
            rest = &rest[consumed..];
        }
        uri.push_str(rest);

        Ok(uri)
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(ClientConfig {
            common: common_config,
            mongodb: MongoConfig {
                connection_template: get_env("MONGO_CONNECTION")?,
                user: env::var("MONGO_USER").unwrap_or_default(),
                password: Secret::new(env::var("MONGO_PASSWORD").unwrap_or_default()),
                database: DATABASE_NAME.to_string(),
            },
        })
    }
}

fn get_env(key: &str) -> Result<String, AppError> {
    env::var(key)
        .map_err(|_| AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key)))
}
