use crate::client::AsyncPortalClient;
use crate::error::PortalApiResult;
use crate::models::{MemberRecord, UserProfile, UserRole};
use crate::repositories::traits::MemberRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Member repository implementation using the portal API client.
///
/// This repository delegates all operations to the AsyncPortalClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct PortalMemberRepository {
    client: Arc<dyn AsyncPortalClient>,
}

impl PortalMemberRepository {
    /// Create a new PortalMemberRepository with the given client.
    pub fn new(client: Arc<dyn AsyncPortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberRepository for PortalMemberRepository {
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<MemberRecord>> {
        self.client.get_members(limit, offset).await
    }

    async fn usernames(&self) -> PortalApiResult<Vec<String>> {
        self.client.get_usernames().await
    }

    async fn count(&self) -> PortalApiResult<u64> {
        self.client.get_member_count().await
    }

    async fn profile_of(&self, principal: &str) -> PortalApiResult<UserProfile> {
        self.client.get_member_profile(principal).await
    }

    async fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        self.client.register(profile).await
    }

    async fn my_profile(&self) -> PortalApiResult<UserProfile> {
        self.client.get_my_profile().await
    }

    async fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        self.client.update_my_profile(profile).await
    }

    async fn my_role(&self) -> PortalApiResult<UserRole> {
        self.client.get_my_role().await
    }

    async fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()> {
        self.client.assign_role(principal, role).await
    }
}
