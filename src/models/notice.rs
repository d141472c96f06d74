//! Notice model representing an entry on the portal notice board.

use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer for 64-bit ids the API emits either as a JSON number
/// or as a decimal string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Number(u64),
        Text(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(n) => Ok(n),
        IdRepr::Text(s) => s.parse::<u64>().map_err(serde::de::Error::custom),
    }
}

/// A notice on the portal notice board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Notice {
    /// Unique identifier, assigned sequentially by the backend
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,

    /// Notice title
    pub title: String,

    /// Notice body text
    pub content: String,

    /// Creation time in epoch nanoseconds (API field: createdAt).
    /// The current backend always reports 0, so ordering relies on ids.
    #[serde(rename = "createdAt", deserialize_with = "deserialize_id")]
    pub created_at: u64,
}

impl Notice {
    /// Create a new notice with required fields.
    pub fn new(id: u64, title: String, content: String, created_at: u64) -> Self {
        Self {
            id,
            title,
            content,
            created_at,
        }
    }
}

/// Inner notice payload matching the portal API structure
#[derive(Debug, Clone, Serialize)]
struct NoticePayload {
    title: String,
    content: String,
}

/// Request payload for posting a new notice.
/// This matches the portal API structure: { "notice": { ... } }
#[derive(Debug, Clone, Serialize)]
pub struct CreateNoticeRequest {
    notice: NoticePayload,
}

impl CreateNoticeRequest {
    /// Build a creation request. The backend assigns the id and timestamp.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            notice: NoticePayload {
                title: title.into(),
                content: content.into(),
            },
        }
    }
}
