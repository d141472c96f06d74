use crate::client::AsyncPortalClient;
use crate::error::PortalApiResult;
use crate::repositories::traits::DocumentRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Document repository implementation using the portal API client.
///
/// This repository delegates all operations to the AsyncPortalClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct PortalDocumentRepository {
    client: Arc<dyn AsyncPortalClient>,
}

impl PortalDocumentRepository {
    /// Create a new PortalDocumentRepository with the given client.
    pub fn new(client: Arc<dyn AsyncPortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentRepository for PortalDocumentRepository {
    async fn list(&self) -> PortalApiResult<Vec<String>> {
        self.client.list_documents().await
    }

    async fn delete(&self, name: &str) -> PortalApiResult<()> {
        self.client.delete_document(name).await
    }
}
