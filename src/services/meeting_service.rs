//! Meeting service layer.
//!
//! Business logic for listing, filtering, and creating meetings.

use crate::error::PortalApiResult;
use crate::models::Meeting;
use crate::tools::{MeetingListResponse, MeetingTools};
use async_trait::async_trait;
use std::sync::Arc;

/// Meeting service trait for business operations.
#[async_trait]
pub trait MeetingService: Send + Sync {
    /// Get all meetings, newest first.
    async fn list_meetings(&self) -> PortalApiResult<MeetingListResponse>;

    /// Get the most recent meetings, optionally narrowed by a query.
    async fn recent_meetings(&self, query: &str) -> PortalApiResult<MeetingListResponse>;

    /// Search all meetings by title and description.
    async fn search_meetings(&self, query: &str) -> PortalApiResult<MeetingListResponse>;

    /// Create a new meeting.
    async fn create_meeting(&self, title: String, description: String)
        -> PortalApiResult<Meeting>;
}

/// Default implementation of MeetingService.
pub struct MeetingServiceImpl {
    meeting_tools: Arc<MeetingTools>,
    max_query_len: usize,
}

/// Validation helper functions.
impl MeetingServiceImpl {
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

    /// Validate meeting title.
    fn validate_title(title: &str) -> Result<(), String> {
        if title.trim().is_empty() {
            return Err("Meeting title cannot be empty".to_string());
        }
        if title.len() > 200 {
            return Err("Meeting title too long (max 200 characters)".to_string());
        }
        Ok(())
    }

    /// Validate meeting description. May be empty.
    fn validate_description(description: &str) -> Result<(), String> {
        if description.len() > 2000 {
            return Err("Meeting description too long (max 2000 characters)".to_string());
        }
        Ok(())
    }
}

impl MeetingServiceImpl {
    /// Create a new meeting service.
    pub fn new(meeting_tools: Arc<MeetingTools>, max_query_len: usize) -> Self {
        Self {
            meeting_tools,
            max_query_len,
        }
    }
}

#[async_trait]
impl MeetingService for MeetingServiceImpl {
    async fn list_meetings(&self) -> PortalApiResult<MeetingListResponse> {
        self.meeting_tools.get_all_meetings().await
    }

    async fn recent_meetings(&self, query: &str) -> PortalApiResult<MeetingListResponse> {
        self.validate_query(query)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.meeting_tools.recent_meetings(query).await
    }

    async fn search_meetings(&self, query: &str) -> PortalApiResult<MeetingListResponse> {
        self.validate_query(query)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.meeting_tools.search_meetings(query).await
    }

    async fn create_meeting(
        &self,
        title: String,
        description: String,
    ) -> PortalApiResult<Meeting> {
        Self::validate_title(&title)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;
        Self::validate_description(&description)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.meeting_tools
            .create_meeting(title.trim(), description.trim())
            .await
    }
}
