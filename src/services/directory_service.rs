//! Directory service layer.
//!
//! Business logic for the member directory and the caller's own account.
//! Principals and email addresses are validated through the domain types
//! before any request leaves the process.

use crate::domain::{EmailAddress, PrincipalId};
use crate::error::PortalApiResult;
use crate::models::{UserProfile, UserRole};
use crate::tools::{DirectoryTools, MemberListResponse, UsernameListResponse};
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

/// Directory service trait for business operations.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Get all directory records.
    async fn list_members(&self) -> PortalApiResult<MemberListResponse>;

    /// Search directory records by name and email.
    async fn search_members(&self, query: &str) -> PortalApiResult<MemberListResponse>;

    /// Search registered usernames.
    async fn search_usernames(&self, query: &str) -> PortalApiResult<UsernameListResponse>;

    /// Get the number of registered members.
    async fn member_count(&self) -> PortalApiResult<u64>;

    /// Get the profile of a member by principal.
    async fn profile_of(&self, principal: &str) -> PortalApiResult<UserProfile>;

    /// Register the caller with a name and email.
    async fn register(&self, name: String, email: String) -> PortalApiResult<UserProfile>;

    /// Get the caller's own profile.
    async fn my_profile(&self) -> PortalApiResult<UserProfile>;

    /// Update the caller's profile.
    async fn update_profile(&self, name: String, email: String) -> PortalApiResult<UserProfile>;

    /// Get the caller's role.
    async fn my_role(&self) -> PortalApiResult<UserRole>;

    /// Whether the caller holds the admin role.
    async fn is_admin(&self) -> PortalApiResult<bool>;

    /// Assign a role to a member (admin only).
    async fn assign_role(&self, principal: &str, role: &str) -> PortalApiResult<()>;
}

/// Default implementation of DirectoryService.
pub struct DirectoryServiceImpl {
    directory_tools: Arc<DirectoryTools>,
    max_query_len: usize,
}

/// Validation helper functions.
impl DirectoryServiceImpl {
    /// Validate search query length. An empty query is valid and matches everything.
    fn validate_query(&self, query: &str) -> Result<(), String> {
        if query.len() > self.max_query_len {
            return Err(format!(
                "Search query too long (max {} characters)",
                self.max_query_len
            ));
        }
        Ok(())
    }

    /// Validate a member name.
    fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if name.len() > 100 {
            return Err("Name too long (max 100 characters)".to_string());
        }
        Ok(())
    }

    /// Build a validated profile from raw name and email input.
    fn build_profile(name: &str, email: &str) -> Result<UserProfile, String> {
        Self::validate_name(name)?;
        let email = EmailAddress::new(email.trim()).map_err(|e| e.to_string())?;
        Ok(UserProfile::new(name.trim(), email.into_inner()))
    }
}

impl DirectoryServiceImpl {
    /// Create a new directory service.
    pub fn new(directory_tools: Arc<DirectoryTools>, max_query_len: usize) -> Self {
        Self {
            directory_tools,
            max_query_len,
        }
    }
}

#[async_trait]
impl DirectoryService for DirectoryServiceImpl {
    async fn list_members(&self) -> PortalApiResult<MemberListResponse> {
        self.directory_tools.all_members().await
    }

    async fn search_members(&self, query: &str) -> PortalApiResult<MemberListResponse> {
        self.validate_query(query)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.directory_tools.search_members(query).await
    }

    async fn search_usernames(&self, query: &str) -> PortalApiResult<UsernameListResponse> {
        self.validate_query(query)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.directory_tools.search_usernames(query).await
    }

    async fn member_count(&self) -> PortalApiResult<u64> {
        self.directory_tools.member_count().await
    }

    async fn profile_of(&self, principal: &str) -> PortalApiResult<UserProfile> {
        let principal = PrincipalId::new(principal)
            .map_err(|e| crate::error::PortalApiError::InvalidRequest(e.to_string()))?;

        self.directory_tools.profile_of(principal.as_str()).await
    }

    async fn register(&self, name: String, email: String) -> PortalApiResult<UserProfile> {
        let profile = Self::build_profile(&name, &email)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.directory_tools.register(&profile).await
    }

    async fn my_profile(&self) -> PortalApiResult<UserProfile> {
        self.directory_tools.my_profile().await
    }

    async fn update_profile(&self, name: String, email: String) -> PortalApiResult<UserProfile> {
        let profile = Self::build_profile(&name, &email)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.directory_tools.update_my_profile(&profile).await
    }

    async fn my_role(&self) -> PortalApiResult<UserRole> {
        self.directory_tools.my_role().await
    }

    async fn is_admin(&self) -> PortalApiResult<bool> {
        Ok(self.my_role().await? == UserRole::Admin)
    }

    async fn assign_role(&self, principal: &str, role: &str) -> PortalApiResult<()> {
        let principal = PrincipalId::new(principal)
            .map_err(|e| crate::error::PortalApiError::InvalidRequest(e.to_string()))?;
        let role = UserRole::from_str(role)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.directory_tools
            .assign_role(principal.as_str(), role)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AsyncPortalClient, AsyncPortalClientImpl, PortalClient};
    use crate::config::Config;
    use crate::error::PortalApiError;
    use crate::repositories::PortalMemberRepository;

    fn make_service() -> DirectoryServiceImpl {
        let config = Config::default();
        let sync_client = PortalClient::new(&config);
        let client =
            Arc::new(AsyncPortalClientImpl::new(sync_client)) as Arc<dyn AsyncPortalClient>;

        let directory_tools = Arc::new(DirectoryTools::new(
            Arc::new(PortalMemberRepository::new(client)),
            300,
        ));
        DirectoryServiceImpl::new(directory_tools, 200)
    }

    #[test]
    fn test_directory_service_creation() {
        let _service = make_service();
        // Just verify it constructs without panic
    }

    #[tokio::test]
    async fn test_profile_of_rejects_invalid_principal() {
        let service = make_service();

        let result = service.profile_of("NOT-a-principal!").await;

        assert!(matches!(
            result,
            Err(PortalApiError::InvalidRequest(msg)) if msg.contains("Invalid principal")
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_email() {
        let service = make_service();

        let result = service
            .register("Alice".to_string(), "not-an-email".to_string())
            .await;

        assert!(matches!(
            result,
            Err(PortalApiError::InvalidRequest(msg)) if msg.contains("Invalid email")
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_name() {
        let service = make_service();

        let result = service
            .register("  ".to_string(), "alice@example.com".to_string())
            .await;

        assert!(matches!(
            result,
            Err(PortalApiError::InvalidRequest(msg)) if msg == "Name cannot be empty"
        ));
    }

    #[tokio::test]
    async fn test_assign_role_rejects_unknown_role() {
        let service = make_service();

        let result = service.assign_role("w7x7r-cok77-xa", "owner").await;

        assert!(matches!(
            result,
            Err(PortalApiError::InvalidRequest(msg)) if msg.contains("Unknown role")
        ));
    }
}
