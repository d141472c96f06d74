//! MCP tools for interacting with the membership portal.
//!
//! This module provides six categories of tools:
//! - **Meetings**: List, filter, and create meetings
//! - **Notices**: The shared notice board
//! - **Messaging**: The caller's mailbox
//! - **Directory**: Member lookups and account mutations
//! - **Vault**: Stored documents
//! - **Search**: Portal-wide search across collections

pub mod directory;
pub mod meetings;
pub mod messaging;
pub mod notices;
pub mod search;
pub mod vault;

pub use directory::{
    DirectoryTools, MemberListResponse, RecipientResolution, UsernameListResponse,
};
pub use meetings::{MeetingListResponse, MeetingTools};
pub use messaging::{MessageListResponse, MessagingTools};
pub use notices::{NoticeListResponse, NoticeTools};
pub use search::{PortalSearchResponse, PortalSearchTools};
pub use vault::{DocumentListResponse, VaultTools};
