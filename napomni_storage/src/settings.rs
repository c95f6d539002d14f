use std::fmt;

use mongodb::options::Credential;
use serde::Deserialize;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 27017;
pub const DEFAULT_DB_NAME: &str = "reminders_db";
/// Database the `MONGO_INITDB_ROOT_*` users are created in.
pub const AUTH_SOURCE: &str = "admin";

#[derive(Deserialize, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseSettings {
    /// Connection string for the driver. Credentials are never part of it,
    /// see [`DatabaseSettings::credential`].
    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}/{}", self.host, self.port, self.name)
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Root credentials, authenticated against [`AUTH_SOURCE`]. Only present
    /// when both the username and the password are set.
    pub fn credential(&self) -> Option<Credential> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(
                Credential::builder()
                    .username(username.clone())
                    .password(password.clone())
                    .source(AUTH_SOURCE.to_string())
                    .build(),
            ),
            _ => None,
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            name: DEFAULT_DB_NAME.to_string(),
            username: None,
            password: None,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
