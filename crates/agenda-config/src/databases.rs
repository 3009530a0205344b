//! Remote database ids for each addressable collection.

use agenda_core::DatabaseRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabasesConfig {
    #[serde(default)]
    pub university: String,

    #[serde(default)]
    pub work: String,

    #[serde(default)]
    pub personal: String,
}

impl DatabasesConfig {
    /// Raw configured value for `database`; empty when unset.
    #[must_use]
    pub fn id_for(&self, database: DatabaseRef) -> &str {
        match database {
            DatabaseRef::University => &self.university,
            DatabaseRef::Work => &self.work,
            DatabaseRef::Personal => &self.personal,
        }
    }

    /// Databases that have no id configured.
    #[must_use]
    pub fn missing(&self) -> Vec<DatabaseRef> {
        DatabaseRef::ALL
            .into_iter()
            .filter(|db| self.id_for(*db).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_has_every_database_missing() {
        let config = DatabasesConfig::default();
        assert_eq!(config.missing(), DatabaseRef::ALL.to_vec());
    }

    #[test]
    fn id_for_maps_each_variant() {
        let config = DatabasesConfig {
            university: "uni".into(),
            work: "work".into(),
            personal: String::new(),
        };
        assert_eq!(config.id_for(DatabaseRef::University), "uni");
        assert_eq!(config.id_for(DatabaseRef::Work), "work");
        assert_eq!(config.missing(), vec![DatabaseRef::Personal]);
    }
}
