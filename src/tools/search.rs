//! Portal-wide search tools.
//!
//! Fans out over meetings, notices, and usernames concurrently, then
//! applies the shared text filter to each collection.

use crate::error::PortalApiResult;
use crate::metrics::Metrics;
use crate::models::{Meeting, Notice};
use crate::search::filter_by_search;
use crate::tools::{DirectoryTools, MeetingTools, NoticeTools};
use std::sync::Arc;

/// Portal-wide search over meetings, notices, and usernames.
#[derive(Clone)]
pub struct PortalSearchTools {
    meeting_tools: Arc<MeetingTools>,
    notice_tools: Arc<NoticeTools>,
    directory_tools: Arc<DirectoryTools>,
    metrics: Metrics,
}

/// Grouped results from a portal-wide search.
#[derive(Debug, Clone)]
pub struct PortalSearchResponse {
    /// Matching meetings, newest first
    pub meetings: Vec<Meeting>,

    /// Matching notices, newest first
    pub notices: Vec<Notice>,

    /// Matching usernames
    pub usernames: Vec<String>,

    /// Number of matching meetings
    pub meeting_count: usize,

    /// Number of matching notices
    pub notice_count: usize,

    /// Number of matching usernames
    pub username_count: usize,

    /// Whether every collection came from cache
    pub from_cache: bool,
}

impl PortalSearchTools {
    /// Create new portal search tools.
    ///
    /// # Arguments
    /// * `meeting_tools` - Meeting tools providing the cached meeting list
    /// * `notice_tools` - Notice tools providing the cached notice list
    /// * `directory_tools` - Directory tools providing the cached usernames
    /// * `metrics` - Shared metrics (usually the client's)
    pub fn new(
        meeting_tools: Arc<MeetingTools>,
        notice_tools: Arc<NoticeTools>,
        directory_tools: Arc<DirectoryTools>,
        metrics: Metrics,
    ) -> Self {
        Self {
            meeting_tools,
            notice_tools,
            directory_tools,
            metrics,
        }
    }

    /// Search meetings, notices, and usernames with one query.
    ///
    /// The three collections are fetched concurrently. Meetings match on
    /// title and description, notices on title and content, usernames on
    /// themselves. An empty query returns every collection unfiltered.
    pub async fn search_portal(&self, query: &str) -> PortalApiResult<PortalSearchResponse> {
        let (meetings_result, notices_result, usernames_result) = tokio::join!(
            self.meeting_tools.get_all_meetings(),
            self.notice_tools.get_all_notices(),
            self.directory_tools.all_usernames(),
        );

        let meetings_response = meetings_result?;
        let notices_response = notices_result?;
        let usernames_response = usernames_result?;

        let from_cache = meetings_response.from_cache
            && notices_response.from_cache
            && usernames_response.from_cache;

        let meetings = filter_by_search(meetings_response.meetings, query, |meeting| {
            vec![meeting.title.clone(), meeting.description.clone()]
        });
        let notices = filter_by_search(notices_response.notices, query, |notice| {
            vec![notice.title.clone(), notice.content.clone()]
        });
        let usernames =
            filter_by_search(usernames_response.usernames, query, |username| {
                vec![username.clone()]
            });

        self.metrics.record_search();

        Ok(PortalSearchResponse {
            meeting_count: meetings.len(),
            notice_count: notices.len(),
            username_count: usernames.len(),
            meetings,
            notices,
            usernames,
            from_cache,
        })
    }
}
