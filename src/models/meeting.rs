//! Meeting model representing a meeting record in the membership portal.

use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer for 64-bit ids the API emits either as a JSON number
/// or as a decimal string (large ids overflow the safe integer range in some
/// clients, so the backend quotes them).
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

/// A meeting in the membership portal.
///
/// Ids are assigned by the backend in creation order, so a larger id always
/// means a more recently created meeting. Meetings carry no creation
/// timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Meeting {
    /// Unique identifier, assigned sequentially by the backend
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,

    /// Meeting title
    pub title: String,

    /// Principal of the member who created the meeting
    #[serde(default)]
    pub owner: String,

    /// Meeting description
    pub description: String,
}

impl Meeting {
    /// Create a new meeting with required fields.
    pub fn new(id: u64, title: String, owner: String, description: String) -> Self {
        Self {
            id,
            title,
            owner,
            description,
        }
    }
}

/// Inner meeting payload matching the portal API structure
#[derive(Debug, Clone, Serialize)]
struct MeetingPayload {
    title: String,
    description: String,
}

/// Request payload for creating a new meeting.
/// This matches the portal API structure: { "meeting": { ... } }
#[derive(Debug, Clone, Serialize)]
pub struct CreateMeetingRequest {
    meeting: MeetingPayload,
}

impl CreateMeetingRequest {
    /// Build a creation request. The backend assigns the id and owner.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            meeting: MeetingPayload {
                title: title.into(),
                description: description.into(),
            },
        }
    }
}
