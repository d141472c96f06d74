//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories and tools. They provide a clean boundary between the
//! MCP handlers and the data access layer.

mod directory_service;
mod meeting_service;
mod messaging_service;
mod notice_service;
mod vault_service;

pub use directory_service::{DirectoryService, DirectoryServiceImpl};
pub use meeting_service::{MeetingService, MeetingServiceImpl};
pub use messaging_service::{MessageFolder, MessagingService, MessagingServiceImpl};
pub use notice_service::{NoticeService, NoticeServiceImpl};
pub use vault_service::{VaultService, VaultServiceImpl};

// Re-export common types used by services
pub use crate::models::{Meeting, Message, Notice, UserProfile, UserRole};
pub use crate::tools::{
    DirectoryTools, DocumentListResponse, MeetingListResponse, MeetingTools, MemberListResponse,
    MessageListResponse, MessagingTools, NoticeListResponse, NoticeTools, PortalSearchResponse,
    PortalSearchTools, UsernameListResponse, VaultTools,
};
