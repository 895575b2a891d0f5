use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub firestore: FirestoreSettings,
    #[serde(default)]
    pub collection: CollectionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FirestoreSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub project_id: String,
    #[serde(default = "default_database_id")]
    pub database_id: String,
    pub auth_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    #[serde(default = "default_drivers_collection")]
    pub drivers: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            drivers: default_drivers_collection(),
        }
    }
}

fn default_endpoint() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_drivers_collection() -> String {
    "drivers".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with DISPATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with DISPATCH_)
            // e.g., DISPATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DISPATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DISPATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply deployment-environment overrides for the Firestore connection.
/// The hosting platforms set FIRESTORE_PROJECT_ID / FIRESTORE_AUTH_TOKEN
/// directly, without the DISPATCH_ prefix.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let project_id = env::var("FIRESTORE_PROJECT_ID").ok();
    let auth_token = env::var("FIRESTORE_AUTH_TOKEN").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(project_id) = project_id {
        builder = builder.set_override("firestore.project_id", project_id)?;
    }
    if let Some(auth_token) = auth_token {
        builder = builder.set_override("firestore.auth_token", auth_token)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(default_endpoint(), "https://firestore.googleapis.com/v1");
        assert_eq!(default_database_id(), "(default)");
    }

    #[test]
    fn test_default_collections() {
        let collections = CollectionSettings::default();
        assert_eq!(collections.drivers, "drivers");
    }
}
