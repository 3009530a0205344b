//! Page create / update / archive endpoints.

use agenda_config::DatabaseId;

use crate::http::{check_response, read_json};
use crate::query::{ArchiveBody, CreateBody, Parent, UpdateBody};
use crate::wire::{Properties, RawPage};
use crate::{NotionClient, NotionError};

impl NotionClient {
    /// Create a page in `database_id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn create_page(
        &self,
        database_id: &DatabaseId,
        properties: &Properties,
    ) -> Result<RawPage, NotionError> {
        tracing::debug!(%database_id, "creating page");
        let body = CreateBody {
            parent: Parent {
                database_id: database_id.as_str(),
            },
            properties,
        };
        let resp = self
            .http
            .post(self.endpoint("pages"))
            .json(&body)
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }

    /// Replace the properties of page `page_id`.
    ///
    /// # Errors
    ///
    /// See [`Self::create_page`].
    pub async fn update_page(
        &self,
        page_id: &str,
        properties: &Properties,
    ) -> Result<RawPage, NotionError> {
        tracing::debug!(page_id, "updating page");
        self.patch_page(page_id, &UpdateBody { properties }).await
    }

    /// Archive page `page_id`. The page stays recoverable in Notion's trash.
    ///
    /// # Errors
    ///
    /// See [`Self::create_page`].
    pub async fn archive_page(&self, page_id: &str) -> Result<RawPage, NotionError> {
        tracing::debug!(page_id, "archiving page");
        self.patch_page(page_id, &ArchiveBody { archived: true })
            .await
    }

    async fn patch_page<B: serde::Serialize>(
        &self,
        page_id: &str,
        body: &B,
    ) -> Result<RawPage, NotionError> {
        let url = self.endpoint(&format!("pages/{}", urlencoding::encode(page_id)));
        let resp = self.http.patch(&url).json(body).send().await?;
        read_json(check_response(resp).await?).await
    }
}
