use std::env;

use config::{Config, ConfigError, File};
use napomni_storage::DatabaseSettings;
use serde::Deserialize;

/// Settings keys and the environment variables that override them.
const ENVIRONMENT_OVERRIDES: &[(&str, &str)] = &[
    ("app.host", "APP_HOST"),
    ("app.port", "APP_PORT"),
    ("app.log_level", "LOG_LEVEL"),
    ("database.host", "DB_HOST"),
    ("database.port", "DB_PORT"),
    ("database.name", "DB_NAME"),
    ("database.username", "MONGO_INITDB_ROOT_USERNAME"),
    ("database.password", "MONGO_INITDB_ROOT_PASSWORD"),
    ("in_memory", "NAPOMNI_IN_MEMORY"),
];

#[derive(Deserialize, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `LOG_LEVEL` as an env_logger filter. Accepts the `warning`/`critical`
    /// spellings too.
    pub fn log_filter(&self) -> String {
        match self.log_level.trim().to_lowercase().as_str() {
            "warning" => "warn".to_string(),
            "critical" | "fatal" => "error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AppSettings {
    pub app: ServerSettings,
    pub database: DatabaseSettings,
    /// Keep reminders in process memory instead of MongoDB.
    pub in_memory: bool,
}

impl AppSettings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(|variable| env::var(variable).ok())
    }

    /// Defaults, then an optional `appsettings` file, then whatever `lookup`
    /// returns for the known environment variables.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = DatabaseSettings::default();
        let mut builder = Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 5000_i64)?
            .set_default("app.log_level", "info")?
            .set_default("database.host", database.host)?
            .set_default("database.port", i64::from(database.port))?
            .set_default("database.name", database.name)?
            .set_default("in_memory", false)?
            .add_source(File::with_name("appsettings").required(false));

        for (key, variable) in ENVIRONMENT_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(variable))?;
        }

        builder.build()?.try_deserialize()
    }
}
