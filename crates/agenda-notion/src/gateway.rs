//! Entry-level operations over the configured databases.
//!
//! Each operation performs at most one API request and no retries. Required
//! fields and database ids are checked before anything is sent.

use agenda_config::{AgendaConfig, DatabaseDirectory};
use agenda_core::{CoreError, DatabaseRef, Entry, Status};
use chrono::NaiveDate;

use crate::query::{build_filter, build_mutation_payload};
use crate::translate::from_wire;
use crate::{NotionClient, NotionError};

/// Reads and writes entries in the databases named by [`DatabaseRef`].
#[derive(Debug, Clone)]
pub struct EntryGateway {
    client: NotionClient,
    directory: DatabaseDirectory,
}

impl EntryGateway {
    #[must_use]
    pub const fn new(client: NotionClient, directory: DatabaseDirectory) -> Self {
        Self { client, directory }
    }

    /// Build the client and directory from loaded configuration.
    ///
    /// # Errors
    ///
    /// See [`NotionClient::new`].
    pub fn from_config(config: &AgendaConfig) -> Result<Self, NotionError> {
        Ok(Self::new(
            NotionClient::new(&config.notion)?,
            config.directory(),
        ))
    }

    /// Entries in `database` with `status`, optionally starting on or after
    /// `min_date`, in the order the API returns them.
    ///
    /// Only the first page of results is returned.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Config`] if `database` has no id configured,
    /// [`NotionError::NotFound`] if the database does not exist, and
    /// [`NotionError::Core`] if a returned page cannot be translated.
    pub async fn list(
        &self,
        database: DatabaseRef,
        status: Status,
        min_date: Option<NaiveDate>,
    ) -> Result<Vec<Entry>, NotionError> {
        let database_id = self.directory.resolve(database)?;
        let filter = build_filter(status, min_date);

        let response = self.client.query_database(&database_id, &filter).await?;
        if response.has_more {
            tracing::warn!(
                %database,
                returned = response.results.len(),
                "more entries match than fit in one page; only the first page is returned"
            );
        }

        let entries = response
            .results
            .into_iter()
            .map(from_wire)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(%database, %status, count = entries.len(), "listed entries");
        Ok(entries)
    }

    /// Create `entry` in `database` and return it with its remote id and URL.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Core`] if `entry` already has an id (this is not
    /// an upsert) or lacks a status or full date range, and
    /// [`NotionError::Config`] if `database` has no id configured.
    pub async fn create(&self, database: DatabaseRef, entry: &Entry) -> Result<Entry, NotionError> {
        if let Some(id) = &entry.id {
            return Err(CoreError::validation(
                "id",
                format!("entry already exists remotely as '{id}'; use update"),
            )
            .into());
        }
        let database_id = self.directory.resolve(database)?;
        let properties = build_mutation_payload(entry, "create")?;

        let page = self.client.create_page(&database_id, &properties).await?;
        tracing::info!(%database, entry_id = %page.id, "created entry");

        Ok(Entry {
            id: Some(page.id),
            url: (!page.url.is_empty()).then_some(page.url),
            ..entry.clone()
        })
    }

    /// Overwrite the remote title, status, and date range of `entry`.
    ///
    /// The page id alone routes the request; no database is needed.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Core`] if `entry` has no id, status, or full date
    /// range, and [`NotionError::NotFound`] if the page does not exist.
    pub async fn update(&self, entry: &Entry) -> Result<(), NotionError> {
        let entry_id = entry.require_id("update")?;
        let properties = build_mutation_payload(entry, "update")?;

        self.client.update_page(entry_id, &properties).await?;
        tracing::info!(entry_id, "updated entry");
        Ok(())
    }

    /// Archive (soft delete) the entry with `entry_id`.
    ///
    /// Whether archiving an already archived page succeeds is up to the API;
    /// its response is passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Core`] for a blank id and
    /// [`NotionError::NotFound`] if the page does not exist.
    pub async fn delete(&self, entry_id: &str) -> Result<(), NotionError> {
        let entry_id = entry_id.trim();
        if entry_id.is_empty() {
            return Err(CoreError::missing("id", "delete").into());
        }

        let page = self.client.archive_page(entry_id).await?;
        tracing::info!(entry_id, archived = page.archived, "archived entry");
        Ok(())
    }
}
