//! HTTP client for interacting with the membership portal API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and response unwrapping for the portal API.

mod async_wrapper;
pub use async_wrapper::{AsyncPortalClient, AsyncPortalClientImpl};

use crate::config::Config;
use crate::error::{PortalApiError, PortalApiResult};
use crate::metrics::Metrics;
use crate::models::{
    AssignRoleRequest, CreateMeetingRequest, CreateNoticeRequest, MemberRecord, Meeting, Message,
    Notice, RegisterMemberRequest, SendMessageRequest, UpdateProfileRequest, UserProfile, UserRole,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Response wrapper for the meetings listing endpoint.
#[derive(Debug, Deserialize)]
pub struct MeetingsResponse {
    /// The list of meetings
    pub meetings: Vec<Meeting>,
}

/// Response wrapper for a single meeting (creation).
#[derive(Debug, Deserialize)]
pub struct MeetingResponse {
    /// The created meeting, with backend-assigned id and owner
    pub meeting: Meeting,
}

/// Response wrapper for the notices listing endpoint.
#[derive(Debug, Deserialize)]
pub struct NoticesResponse {
    /// The list of notices
    pub notices: Vec<Notice>,
}

/// Response wrapper for a single notice (creation).
#[derive(Debug, Deserialize)]
pub struct NoticeResponse {
    /// The created notice
    pub notice: Notice,
}

/// Response wrapper for the message listing endpoints.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    /// The list of messages
    pub messages: Vec<Message>,
}

/// Response wrapper for a single message (send).
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    /// The delivered message with resolved sender and recipient principals
    pub message: Message,
}

/// Response wrapper for the member directory endpoint.
#[derive(Debug, Deserialize)]
pub struct MembersResponse {
    /// The list of directory records
    pub members: Vec<MemberRecord>,
}

/// Response wrapper for the usernames endpoint.
#[derive(Debug, Deserialize)]
pub struct UsernamesResponse {
    /// All registered usernames
    pub usernames: Vec<String>,
}

/// Response wrapper for the member count endpoint.
#[derive(Debug, Deserialize)]
pub struct MemberCountResponse {
    /// Number of registered members
    pub count: u64,
}

/// Response wrapper for profile endpoints.
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    /// The requested profile
    pub profile: UserProfile,
}

/// Response wrapper for the caller role endpoint.
#[derive(Debug, Deserialize)]
pub struct RoleResponse {
    /// The caller's role
    pub role: UserRole,
}

/// Response wrapper for the document vault listing.
#[derive(Debug, Deserialize)]
pub struct DocumentsResponse {
    /// Names of stored documents
    pub documents: Vec<String>,
}

/// HTTP client for the membership portal API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PortalClient {
    /// Base URL for the portal API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl PortalClient {
    /// Create a new PortalClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.portal_api_url.clone(),
            api_key: config.portal_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a PortalClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, PortalApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .get(&url)
            .set("x-portal-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, PortalApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .set("x-portal-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Execute a PUT request with authentication and JSON body.
    fn put(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, PortalApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .put(&url)
            .set("x-portal-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a DELETE request with authentication.
    fn delete(&self, path: &str) -> Result<ureq::Response, PortalApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .delete(&url)
            .set("x-portal-api-key", &self.api_key)
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a PortalApiError.
    fn map_error(&self, error: ureq::Error) -> PortalApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => PortalApiError::Unauthorized,
                    403 => PortalApiError::Forbidden(message),
                    404 => PortalApiError::NotFound(message),
                    429 => PortalApiError::RateLimitExceeded,
                    _ => PortalApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    PortalApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    PortalApiError::Timeout
                } else {
                    PortalApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Read a response body and deserialize it.
    fn parse_body<T: serde::de::DeserializeOwned>(
        &self,
        response: ureq::Response,
    ) -> PortalApiResult<T> {
        let body = response
            .into_string()
            .map_err(|e| PortalApiError::HttpError(e.to_string()))?;
        serde_json::from_str(&body).map_err(PortalApiError::JsonError)
    }

    // ========================= Meeting Operations =========================

    /// Get meetings with pagination.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of meetings to return
    /// * `offset` - Number of meetings to skip (for pagination)
    pub fn get_meetings(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Meeting>> {
        let path = format!("/meetings?limit={}&offset={}", limit, offset);
        let response = self.get(&path)?;
        let meetings_response: MeetingsResponse = self.parse_body(response)?;

        let meetings = meetings_response.meetings;
        self.metrics.record_meetings_fetched(meetings.len());
        Ok(meetings)
    }

    /// Create a new meeting. The backend assigns the id and owner.
    pub fn create_meeting(&self, title: &str, description: &str) -> PortalApiResult<Meeting> {
        tracing::info!("Creating meeting: {}", title);

        let request = CreateMeetingRequest::new(title, description);
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        let response = self.post("/meetings", &body)?;
        let meeting_response: MeetingResponse = self.parse_body(response)?;

        tracing::info!(
            "Meeting created successfully with id: {}",
            meeting_response.meeting.id
        );
        Ok(meeting_response.meeting)
    }

    // ========================= Notice Operations =========================

    /// Get notices with pagination.
    pub fn get_notices(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Notice>> {
        let path = format!("/notices?limit={}&offset={}", limit, offset);
        let response = self.get(&path)?;
        let notices_response: NoticesResponse = self.parse_body(response)?;

        let notices = notices_response.notices;
        self.metrics.record_notices_fetched(notices.len());
        Ok(notices)
    }

    /// Post a new notice to the board.
    pub fn create_notice(&self, title: &str, content: &str) -> PortalApiResult<Notice> {
        tracing::info!("Posting notice: {}", title);

        let request = CreateNoticeRequest::new(title, content);
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        let response = self.post("/notices", &body)?;
        let notice_response: NoticeResponse = self.parse_body(response)?;

        tracing::info!(
            "Notice posted successfully with id: {}",
            notice_response.notice.id
        );
        Ok(notice_response.notice)
    }

    /// Delete a notice by id.
    pub fn delete_notice(&self, id: u64) -> PortalApiResult<()> {
        let path = format!("/notices/{}", id);
        self.delete(&path)?;
        Ok(())
    }

    // ========================= Message Operations =========================

    /// Get the caller's inbox.
    pub fn get_inbox(&self) -> PortalApiResult<Vec<Message>> {
        let response = self.get("/messages/inbox")?;
        let messages_response: MessagesResponse = self.parse_body(response)?;

        let messages = messages_response.messages;
        self.metrics.record_messages_fetched(messages.len());
        Ok(messages)
    }

    /// Get the messages the caller has sent.
    pub fn get_sent_messages(&self) -> PortalApiResult<Vec<Message>> {
        let response = self.get("/messages/sent")?;
        let messages_response: MessagesResponse = self.parse_body(response)?;

        let messages = messages_response.messages;
        self.metrics.record_messages_fetched(messages.len());
        Ok(messages)
    }

    /// Send a message addressed to a username.
    ///
    /// The backend resolves the username to a principal and responds 404
    /// when no such user exists.
    pub fn send_message(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message> {
        tracing::info!("Sending message to: {}", recipient_name);

        let request = SendMessageRequest::new(recipient_name, subject, content);
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        let response = self.post("/messages", &body)?;
        let message_response: MessageResponse = self.parse_body(response)?;

        Ok(message_response.message)
    }

    // ========================= Member Operations =========================

    /// Get directory records with pagination.
    pub fn get_members(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<MemberRecord>> {
        let path = format!("/members?limit={}&offset={}", limit, offset);
        let response = self.get(&path)?;
        let members_response: MembersResponse = self.parse_body(response)?;

        let members = members_response.members;
        self.metrics.record_members_fetched(members.len());
        Ok(members)
    }

    /// Get all registered usernames.
    pub fn get_usernames(&self) -> PortalApiResult<Vec<String>> {
        let response = self.get("/members/usernames")?;
        let usernames_response: UsernamesResponse = self.parse_body(response)?;

        let usernames = usernames_response.usernames;
        self.metrics.record_members_fetched(usernames.len());
        Ok(usernames)
    }

    /// Get the number of registered members.
    pub fn get_member_count(&self) -> PortalApiResult<u64> {
        let response = self.get("/members/count")?;
        let count_response: MemberCountResponse = self.parse_body(response)?;
        Ok(count_response.count)
    }

    /// Get the profile of a member by principal.
    pub fn get_member_profile(&self, principal: &str) -> PortalApiResult<UserProfile> {
        let path = format!("/members/{}", urlencoding::encode(principal));
        let response = self.get(&path)?;
        let profile_response: ProfileResponse = self.parse_body(response)?;
        Ok(profile_response.profile)
    }

    /// Register the caller as a member with the given profile.
    pub fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        tracing::info!("Registering member: {}", profile.name);

        let request = RegisterMemberRequest::new(profile.clone());
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        let response = self.post("/members", &body)?;
        let profile_response: ProfileResponse = self.parse_body(response)?;
        Ok(profile_response.profile)
    }

    /// Get the caller's own profile.
    ///
    /// Responds 404 when the caller has not registered yet.
    pub fn get_my_profile(&self) -> PortalApiResult<UserProfile> {
        let response = self.get("/me/profile")?;
        let profile_response: ProfileResponse = self.parse_body(response)?;
        Ok(profile_response.profile)
    }

    /// Update the caller's own profile.
    pub fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        let request = UpdateProfileRequest::from(profile);
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        let response = self.put("/me/profile", &body)?;
        let profile_response: ProfileResponse = self.parse_body(response)?;
        Ok(profile_response.profile)
    }

    /// Get the caller's role.
    pub fn get_my_role(&self) -> PortalApiResult<UserRole> {
        let response = self.get("/me/role")?;
        let role_response: RoleResponse = self.parse_body(response)?;
        Ok(role_response.role)
    }

    /// Assign a role to a member. Admin-only on the server side.
    pub fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()> {
        tracing::info!("Assigning role {} to {}", role, principal);

        let request = AssignRoleRequest::new(role);
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        let path = format!("/members/{}/role", urlencoding::encode(principal));
        self.put(&path, &body)?;
        Ok(())
    }

    // ========================= Document Operations =========================

    /// List the names of documents in the vault.
    pub fn list_documents(&self) -> PortalApiResult<Vec<String>> {
        let response = self.get("/documents")?;
        let documents_response: DocumentsResponse = self.parse_body(response)?;
        Ok(documents_response.documents)
    }

    /// Delete a document from the vault by name.
    pub fn delete_document(&self, name: &str) -> PortalApiResult<()> {
        let path = format!("/documents/{}", urlencoding::encode(name));
        self.delete(&path)?;
        Ok(())
    }
}
