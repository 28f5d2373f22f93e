// Configuration module: reads the Notion database id and access token
// from the process environment, optionally seeded from a local `.env`.

use std::fmt;
use std::path::Path;

use thiserror::Error;

pub const DB_ID_VAR: &str = "NOTION_DB_ID";
pub const TOKEN_VAR: &str = "NOTION_TOKEN";
pub const API_URL_VAR: &str = "NOTION_API_URL";

/// Optional environment file, read from the working directory only.
pub const ENV_FILE: &str = ".env";

/// Page creation endpoint of the Notion API.
pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1/pages";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("NOTION_DB_ID and NOTION_TOKEN environments must be set (missing: {})", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Values needed to talk to one Notion database. Built once at startup
/// and handed to `NotionClient`.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub database_id: String,
    pub access_token: String,
    pub api_url: String,
}

impl Config {
    /// Build the configuration from an arbitrary key lookup. Empty values
    /// are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let database_id = read(DB_ID_VAR);
        let access_token = read(TOKEN_VAR);

        let mut missing = Vec::new();
        if database_id.is_none() {
            missing.push(DB_ID_VAR);
        }
        if access_token.is_none() {
            missing.push(TOKEN_VAR);
        }

        match (database_id, access_token) {
            (Some(database_id), Some(access_token)) => Ok(Config {
                database_id,
                access_token,
                api_url: read(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.into()),
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_id", &self.database_id)
            .field("access_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Load `path` into the process environment if it exists. Variables
/// already set are left untouched and parent directories are not searched.
pub fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => log::debug!("loaded environment from {}", path.display()),
        Err(err) => log::warn!("Error loading .env file: {}", err),
    }
}
