//! Database query endpoint.

use agenda_config::DatabaseId;

use crate::http::{check_response, read_json};
use crate::query::{Filter, QueryBody};
use crate::wire::QueryResponse;
use crate::{NotionClient, NotionError};

impl NotionClient {
    /// Query one page of rows from `database_id` matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn query_database(
        &self,
        database_id: &DatabaseId,
        filter: &Filter,
    ) -> Result<QueryResponse, NotionError> {
        let url = self.endpoint(&format!(
            "databases/{}/query",
            urlencoding::encode(database_id.as_str())
        ));
        tracing::debug!(%database_id, clauses = filter.clauses().len(), "querying database");

        let resp = self
            .http
            .post(&url)
            .json(&QueryBody { filter })
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }
}
