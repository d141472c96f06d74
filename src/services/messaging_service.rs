//! Messaging service layer.
//!
//! Business logic for the caller's mailbox. Validates recipients against
//! the member directory before a message hits the wire.

use crate::error::PortalApiResult;
use crate::models::Message;
use crate::tools::{DirectoryTools, MessageListResponse, MessagingTools, RecipientResolution};
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

/// Mailbox folder selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFolder {
    /// Messages addressed to the caller
    Inbox,
    /// Messages the caller has sent
    Sent,
}

impl FromStr for MessageFolder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inbox" => Ok(MessageFolder::Inbox),
            "sent" => Ok(MessageFolder::Sent),
            other => Err(format!(
                "Unknown folder: {} (expected \"inbox\" or \"sent\")",
                other
            )),
        }
    }
}

/// Messaging service trait for business operations.
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Get messages from the given folder.
    async fn get_messages(&self, folder: MessageFolder) -> PortalApiResult<MessageListResponse>;

    /// Send a message to a member, addressed by username.
    async fn send_message(
        &self,
        recipient: String,
        subject: String,
        content: String,
    ) -> PortalApiResult<Message>;
}

/// Default implementation of MessagingService.
pub struct MessagingServiceImpl {
    messaging_tools: Arc<MessagingTools>,
    directory_tools: Arc<DirectoryTools>,
}

impl MessagingServiceImpl {
    /// Create a new messaging service.
    pub fn new(
        messaging_tools: Arc<MessagingTools>,
        directory_tools: Arc<DirectoryTools>,
    ) -> Self {
        Self {
            messaging_tools,
            directory_tools,
        }
    }
}

#[async_trait]
impl MessagingService for MessagingServiceImpl {
    async fn get_messages(&self, folder: MessageFolder) -> PortalApiResult<MessageListResponse> {
        match folder {
            MessageFolder::Inbox => self.messaging_tools.inbox().await,
            MessageFolder::Sent => self.messaging_tools.sent().await,
        }
    }

    async fn send_message(
        &self,
        recipient: String,
        subject: String,
        content: String,
    ) -> PortalApiResult<Message> {
        let recipient = recipient.trim();
        let subject = subject.trim();
        let content = content.trim();

        if recipient.is_empty() || subject.is_empty() || content.is_empty() {
            return Err(crate::error::PortalApiError::InvalidRequest(
                "All fields are required".to_string(),
            ));
        }

        match self.directory_tools.resolve_recipient(recipient).await? {
            RecipientResolution::Found => {}
            RecipientResolution::CaseMismatch(actual) => {
                return Err(crate::error::PortalApiError::InvalidRequest(format!(
                    "Username \"{}\" not found. Usernames are case-sensitive. Did you mean \"{}\"?",
                    recipient, actual
                )));
            }
            RecipientResolution::Unknown => {
                return Err(crate::error::PortalApiError::InvalidRequest(format!(
                    "User \"{}\" not found. Please select a valid username from the list.",
                    recipient
                )));
            }
        }

        self.messaging_tools
            .send_message(recipient, subject, content)
            .await
    }
}
