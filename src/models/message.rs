//! Message model for the portal's member-to-member messaging.

use serde::{Deserialize, Serialize};

/// A message between two members.
///
/// Sender and recipient are principal texts. The backend returns messages in
/// storage order and keeps no timestamps on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Message {
    /// Principal of the sending member
    pub sender: String,

    /// Principal of the receiving member
    pub recipient: String,

    /// Message subject line
    pub subject: String,

    /// Message body
    pub content: String,
}

impl Message {
    /// Create a new message with required fields.
    pub fn new(sender: String, recipient: String, subject: String, content: String) -> Self {
        Self {
            sender,
            recipient,
            subject,
            content,
        }
    }
}

/// Inner message payload matching the portal API structure
#[derive(Debug, Clone, Serialize)]
struct MessagePayload {
    /// Recipient username (resolved to a principal by the backend)
    recipient: String,
    subject: String,
    content: String,
}

/// Request payload for sending a message by username.
/// This matches the portal API structure: { "message": { ... } }
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    message: MessagePayload,
}

impl SendMessageRequest {
    /// Build a send request addressed to a username.
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            message: MessagePayload {
                recipient: recipient.into(),
                subject: subject.into(),
                content: content.into(),
            },
        }
    }
}
