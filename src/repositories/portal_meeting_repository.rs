use crate::client::AsyncPortalClient;
use crate::error::PortalApiResult;
use crate::models::Meeting;
use crate::repositories::traits::MeetingRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Meeting repository implementation using the portal API client.
///
/// This repository delegates all operations to the AsyncPortalClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct PortalMeetingRepository {
    client: Arc<dyn AsyncPortalClient>,
}

impl PortalMeetingRepository {
    /// Create a new PortalMeetingRepository with the given client.
    pub fn new(client: Arc<dyn AsyncPortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MeetingRepository for PortalMeetingRepository {
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Meeting>> {
        self.client.get_meetings(limit, offset).await
    }

    async fn create(&self, title: &str, description: &str) -> PortalApiResult<Meeting> {
        self.client.create_meeting(title, description).await
    }
}
