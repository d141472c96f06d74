//! Notice service layer.
//!
//! Business logic for the shared notice board.

use crate::error::PortalApiResult;
use crate::models::Notice;
use crate::tools::{NoticeListResponse, NoticeTools};
use async_trait::async_trait;
use std::sync::Arc;

/// Notice service trait for business operations.
#[async_trait]
pub trait NoticeService: Send + Sync {
    /// Get all notices, newest first.
    async fn list_notices(&self) -> PortalApiResult<NoticeListResponse>;

    /// Search all notices by title and content.
    async fn search_notices(&self, query: &str) -> PortalApiResult<NoticeListResponse>;

    /// Post a new notice.
    async fn post_notice(&self, title: String, content: String) -> PortalApiResult<Notice>;

    /// Remove a notice by id (admin only).
    async fn remove_notice(&self, id: u64) -> PortalApiResult<()>;
}

/// Default implementation of NoticeService.
pub struct NoticeServiceImpl {
    notice_tools: Arc<NoticeTools>,
    max_query_len: usize,
}

/// Validation helper functions.
impl NoticeServiceImpl {
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

    /// Validate notice title.
    fn validate_title(title: &str) -> Result<(), String> {
        if title.trim().is_empty() {
            return Err("Notice title cannot be empty".to_string());
        }
        if title.len() > 200 {
            return Err("Notice title too long (max 200 characters)".to_string());
        }
        Ok(())
    }

    /// Validate notice content.
    fn validate_content(content: &str) -> Result<(), String> {
        if content.trim().is_empty() {
            return Err("Notice content cannot be empty".to_string());
        }
        if content.len() > 5000 {
            return Err("Notice content too long (max 5000 characters)".to_string());
        }
        Ok(())
    }
}

impl NoticeServiceImpl {
    /// Create a new notice service.
    pub fn new(notice_tools: Arc<NoticeTools>, max_query_len: usize) -> Self {
        Self {
            notice_tools,
            max_query_len,
        }
    }
}

#[async_trait]
impl NoticeService for NoticeServiceImpl {
    async fn list_notices(&self) -> PortalApiResult<NoticeListResponse> {
        self.notice_tools.get_all_notices().await
    }

    async fn search_notices(&self, query: &str) -> PortalApiResult<NoticeListResponse> {
        self.validate_query(query)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.notice_tools.search_notices(query).await
    }

    async fn post_notice(&self, title: String, content: String) -> PortalApiResult<Notice> {
        Self::validate_title(&title)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;
        Self::validate_content(&content)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.notice_tools
            .create_notice(title.trim(), content.trim())
            .await
    }

    async fn remove_notice(&self, id: u64) -> PortalApiResult<()> {
        self.notice_tools.delete_notice(id).await
    }
}
