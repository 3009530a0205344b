//! # agenda-config
//!
//! Layered configuration loading for agenda using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AGENDA_*` prefix, `__` as separator)
//! 2. Plain environment variables `NOTION_TOKEN`, `UNIVERSITY_DB_ID`,
//!    `WORK_DB_ID`, `PERSONAL_DB_ID`
//! 3. Project-level `.agenda/config.toml`
//! 4. User-level `~/.config/agenda/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AGENDA_NOTION__TOKEN` -> `notion.token` and
//! `AGENDA_DATABASES__WORK` -> `databases.work`. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use agenda_config::{AgendaConfig, DatabaseDirectory};
//! use agenda_core::DatabaseRef;
//!
//! let config = AgendaConfig::load_with_dotenv().expect("config");
//! let directory = DatabaseDirectory::new(config.databases.clone());
//! let id = directory.resolve(DatabaseRef::Personal).expect("personal database id");
//! println!("personal database: {id}");
//! ```

mod databases;
mod directory;
mod error;
mod notion;

pub use databases::DatabasesConfig;
pub use directory::{DatabaseDirectory, DatabaseId};
pub use error::ConfigError;
pub use notion::NotionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plain environment variable names and the config keys they fill.
const PLAIN_ENV_KEYS: [(&str, &str); 4] = [
    ("NOTION_TOKEN", "notion.token"),
    ("UNIVERSITY_DB_ID", "databases.university"),
    ("WORK_DB_ID", "databases.work"),
    ("PERSONAL_DB_ID", "databases.personal"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgendaConfig {
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub databases: DatabasesConfig,
}

impl AgendaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".agenda/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(Self::plain_env());
        figment.merge(Env::prefixed("AGENDA_").split("__"))
    }

    /// Directory for resolving database names, built from this config.
    #[must_use]
    pub fn directory(&self) -> DatabaseDirectory {
        DatabaseDirectory::new(self.databases.clone())
    }

    /// Unprefixed variables, renamed onto their nested config keys.
    fn plain_env() -> Env {
        Env::raw().filter_map(|key| {
            PLAIN_ENV_KEYS
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agenda").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing if
    /// no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unconfigured() {
        let config = AgendaConfig::default();
        assert!(!config.notion.is_configured());
        assert_eq!(config.databases.missing().len(), 3);
        assert_eq!(config.notion.timeout_secs, 30);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AgendaConfig = AgendaConfig::figment().extract()?;
            assert_eq!(config.notion.notion_version, "2022-06-28");
            Ok(())
        });
    }
}
