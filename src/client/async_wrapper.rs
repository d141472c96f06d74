//! Async wrapper around synchronous PortalClient.
//!
//! This module provides an async interface to the synchronous PortalClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::PortalClient;
use crate::error::{PortalApiError, PortalApiResult};
use crate::models::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for portal client operations.
///
/// This trait provides async versions of all PortalClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid
/// blocking the async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncPortalClient: Send + Sync {
    async fn get_meetings(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Meeting>>;
    async fn create_meeting(&self, title: &str, description: &str) -> PortalApiResult<Meeting>;

    async fn get_notices(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Notice>>;
    async fn create_notice(&self, title: &str, content: &str) -> PortalApiResult<Notice>;
    async fn delete_notice(&self, id: u64) -> PortalApiResult<()>;

    async fn get_inbox(&self) -> PortalApiResult<Vec<Message>>;
    async fn get_sent_messages(&self) -> PortalApiResult<Vec<Message>>;
    async fn send_message(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message>;

    async fn get_members(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<MemberRecord>>;
    async fn get_usernames(&self) -> PortalApiResult<Vec<String>>;
    async fn get_member_count(&self) -> PortalApiResult<u64>;
    async fn get_member_profile(&self, principal: &str) -> PortalApiResult<UserProfile>;
    async fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile>;
    async fn get_my_profile(&self) -> PortalApiResult<UserProfile>;
    async fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile>;
    async fn get_my_role(&self) -> PortalApiResult<UserRole>;
    async fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()>;

    async fn list_documents(&self) -> PortalApiResult<Vec<String>>;
    async fn delete_document(&self, name: &str) -> PortalApiResult<()>;
}

/// Async wrapper around synchronous PortalClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncPortalClientImpl {
    client: Arc<PortalClient>,
}

impl AsyncPortalClientImpl {
    pub fn new(client: PortalClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncPortalClient for AsyncPortalClientImpl {
    async fn get_meetings(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Meeting>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_meetings(limit, offset))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_meeting(&self, title: &str, description: &str) -> PortalApiResult<Meeting> {
        let client = self.client.clone();
        let title = title.to_string();
        let description = description.to_string();

        tokio::task::spawn_blocking(move || client.create_meeting(&title, &description))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_notices(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Notice>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_notices(limit, offset))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_notice(&self, title: &str, content: &str) -> PortalApiResult<Notice> {
        let client = self.client.clone();
        let title = title.to_string();
        let content = content.to_string();

        tokio::task::spawn_blocking(move || client.create_notice(&title, &content))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete_notice(&self, id: u64) -> PortalApiResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.delete_notice(id))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_inbox(&self) -> PortalApiResult<Vec<Message>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_inbox())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_sent_messages(&self) -> PortalApiResult<Vec<Message>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_sent_messages())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn send_message(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message> {
        let client = self.client.clone();
        let recipient_name = recipient_name.to_string();
        let subject = subject.to_string();
        let content = content.to_string();

        tokio::task::spawn_blocking(move || {
            client.send_message(&recipient_name, &subject, &content)
        })
        .await
        .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_members(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<MemberRecord>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_members(limit, offset))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_usernames(&self) -> PortalApiResult<Vec<String>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_usernames())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_member_count(&self) -> PortalApiResult<u64> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_member_count())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_member_profile(&self, principal: &str) -> PortalApiResult<UserProfile> {
        let client = self.client.clone();
        let principal = principal.to_string();

        tokio::task::spawn_blocking(move || client.get_member_profile(&principal))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        let client = self.client.clone();
        let profile = profile.clone();

        tokio::task::spawn_blocking(move || client.register(&profile))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_my_profile(&self) -> PortalApiResult<UserProfile> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_my_profile())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        let client = self.client.clone();
        let profile = profile.clone();

        tokio::task::spawn_blocking(move || client.update_my_profile(&profile))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_my_role(&self) -> PortalApiResult<UserRole> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_my_role())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()> {
        let client = self.client.clone();
        let principal = principal.to_string();

        tokio::task::spawn_blocking(move || client.assign_role(&principal, role))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn list_documents(&self) -> PortalApiResult<Vec<String>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_documents())
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete_document(&self, name: &str) -> PortalApiResult<()> {
        let client = self.client.clone();
        let name = name.to_string();

        tokio::task::spawn_blocking(move || client.delete_document(&name))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
