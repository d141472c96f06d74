use crate::client::AsyncPortalClient;
use crate::error::PortalApiResult;
use crate::models::Notice;
use crate::repositories::traits::NoticeRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Notice repository implementation using the portal API client.
///
/// This repository delegates all operations to the AsyncPortalClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct PortalNoticeRepository {
    client: Arc<dyn AsyncPortalClient>,
}

impl PortalNoticeRepository {
    /// Create a new PortalNoticeRepository with the given client.
    pub fn new(client: Arc<dyn AsyncPortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NoticeRepository for PortalNoticeRepository {
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Notice>> {
        self.client.get_notices(limit, offset).await
    }

    async fn create(&self, title: &str, content: &str) -> PortalApiResult<Notice> {
        self.client.create_notice(title, content).await
    }

    async fn delete(&self, id: u64) -> PortalApiResult<()> {
        self.client.delete_notice(id).await
    }
}
