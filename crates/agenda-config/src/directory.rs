//! Resolution of symbolic database names to remote database ids.

use std::fmt;

use agenda_core::DatabaseRef;

use crate::databases::DatabasesConfig;
use crate::error::ConfigError;

/// Remote identifier of a database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseId(String);

impl DatabaseId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup table built once from configuration.
#[derive(Debug, Clone)]
pub struct DatabaseDirectory {
    databases: DatabasesConfig,
}

impl DatabaseDirectory {
    #[must_use]
    pub const fn new(databases: DatabasesConfig) -> Self {
        Self { databases }
    }

    /// Resolve `database` to its configured remote id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseId`] when no id is configured.
    pub fn resolve(&self, database: DatabaseRef) -> Result<DatabaseId, ConfigError> {
        let id = self.databases.id_for(database).trim();
        if id.is_empty() {
            return Err(ConfigError::MissingDatabaseId { database });
        }
        Ok(DatabaseId(id.to_string()))
    }
}
