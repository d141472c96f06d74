use crate::client::AsyncPortalClient;
use crate::error::PortalApiResult;
use crate::models::Message;
use crate::repositories::traits::MessageRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Message repository implementation using the portal API client.
///
/// This repository delegates all operations to the AsyncPortalClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct PortalMessageRepository {
    client: Arc<dyn AsyncPortalClient>,
}

impl PortalMessageRepository {
    /// Create a new PortalMessageRepository with the given client.
    pub fn new(client: Arc<dyn AsyncPortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageRepository for PortalMessageRepository {
    async fn inbox(&self) -> PortalApiResult<Vec<Message>> {
        self.client.get_inbox().await
    }

    async fn sent(&self) -> PortalApiResult<Vec<Message>> {
        self.client.get_sent_messages().await
    }

    async fn send(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message> {
        self.client.send_message(recipient_name, subject, content).await
    }
}
