use crate::error::PortalApiResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for managing meetings.
///
/// Provides abstraction over meeting storage and retrieval,
/// enabling different implementations (API client, mock, cached).
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Retrieve meetings with pagination.
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Meeting>>;

    /// Create a new meeting.
    async fn create(&self, title: &str, description: &str) -> PortalApiResult<Meeting>;
}

/// Repository for managing notice board entries.
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Retrieve notices with pagination.
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Notice>>;

    /// Post a new notice.
    async fn create(&self, title: &str, content: &str) -> PortalApiResult<Notice>;

    /// Delete a notice by id.
    async fn delete(&self, id: u64) -> PortalApiResult<()>;
}

/// Repository for the caller's mailbox.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Messages addressed to the caller.
    async fn inbox(&self) -> PortalApiResult<Vec<Message>>;

    /// Messages the caller has sent.
    async fn sent(&self) -> PortalApiResult<Vec<Message>>;

    /// Send a message to a member, addressed by username.
    async fn send(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message>;
}

/// Repository for the member directory and the caller's own account.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Retrieve directory records with pagination.
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<MemberRecord>>;

    /// All registered usernames.
    async fn usernames(&self) -> PortalApiResult<Vec<String>>;

    /// Number of registered members.
    async fn count(&self) -> PortalApiResult<u64>;

    /// Profile of a member identified by principal.
    async fn profile_of(&self, principal: &str) -> PortalApiResult<UserProfile>;

    /// Register the caller with the given profile.
    async fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile>;

    /// The caller's own profile.
    async fn my_profile(&self) -> PortalApiResult<UserProfile>;

    /// Update the caller's profile.
    async fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile>;

    /// The caller's role.
    async fn my_role(&self) -> PortalApiResult<UserRole>;

    /// Assign a role to a member (admin only).
    async fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()>;
}

/// Repository for the document vault.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Names of all stored documents.
    async fn list(&self) -> PortalApiResult<Vec<String>>;

    /// Delete a document by name (admin only).
    async fn delete(&self, name: &str) -> PortalApiResult<()>;
}
