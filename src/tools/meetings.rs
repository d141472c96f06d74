//! Meeting tools.
//!
//! Provides cached access to the meeting list, newest-first ordering,
//! text filtering, and meeting creation.

use crate::cache::TimedCache;
use crate::error::PortalApiResult;
use crate::models::Meeting;
use crate::repositories::MeetingRepository;
use crate::search::filter_by_search;
use std::sync::Arc;

const MEETINGS_CACHE_KEY: &str = "meetings";

/// Meeting tools for listing, filtering, and creating meetings.
pub struct MeetingTools {
    meeting_repo: Arc<dyn MeetingRepository>,
    meeting_cache: Arc<TimedCache<String, Vec<Meeting>>>,
    recent_limit: usize,
    cache_ttl_secs: u64,
}

/// Response from meeting listings with cache metadata.
#[derive(Debug, Clone)]
pub struct MeetingListResponse {
    /// Meetings, newest first
    pub meetings: Vec<Meeting>,

    /// Whether the results came from cache
    pub from_cache: bool,
}

impl MeetingTools {
    /// Create new meeting tools.
    ///
    /// # Arguments
    /// * `meeting_repo` - MeetingRepository for data access
    /// * `recent_limit` - How many meetings `recent_meetings` considers
    /// * `cache_ttl_secs` - Cache time-to-live in seconds
    pub fn new(
        meeting_repo: Arc<dyn MeetingRepository>,
        recent_limit: usize,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            meeting_repo,
            meeting_cache: Arc::new(TimedCache::new(cache_ttl_secs)),
            recent_limit,
            cache_ttl_secs,
        }
    }

    /// Get all meetings, newest first.
    pub async fn get_all_meetings(&self) -> PortalApiResult<MeetingListResponse> {
        let (mut meetings, from_cache) = self.get_cached_meetings().await?;
        sort_newest_first(&mut meetings);

        Ok(MeetingListResponse {
            meetings,
            from_cache,
        })
    }

    /// Get the most recent meetings, optionally filtered by a query.
    ///
    /// Takes the newest meetings up to the configured limit first, then
    /// applies the text filter over title and description. A query can
    /// therefore only narrow the recent window, never reach past it.
    pub async fn recent_meetings(&self, query: &str) -> PortalApiResult<MeetingListResponse> {
        let (mut meetings, from_cache) = self.get_cached_meetings().await?;
        sort_newest_first(&mut meetings);
        meetings.truncate(self.recent_limit);

        let meetings = filter_by_search(meetings, query, |meeting| {
            vec![meeting.title.clone(), meeting.description.clone()]
        });

        Ok(MeetingListResponse {
            meetings,
            from_cache,
        })
    }

    /// Search all meetings by title and description.
    pub async fn search_meetings(&self, query: &str) -> PortalApiResult<MeetingListResponse> {
        let (mut meetings, from_cache) = self.get_cached_meetings().await?;
        sort_newest_first(&mut meetings);

        let meetings = filter_by_search(meetings, query, |meeting| {
            vec![meeting.title.clone(), meeting.description.clone()]
        });

        Ok(MeetingListResponse {
            meetings,
            from_cache,
        })
    }

    /// Create a new meeting.
    ///
    /// Invalidates the meeting cache so the next listing reflects the
    /// new entry.
    pub async fn create_meeting(&self, title: &str, description: &str) -> PortalApiResult<Meeting> {
        let meeting = self.meeting_repo.create(title, description).await?;
        self.invalidate_cache();
        Ok(meeting)
    }

    /// Get all meetings from cache or API.
    async fn get_cached_meetings(&self) -> PortalApiResult<(Vec<Meeting>, bool)> {
        let cache_key = MEETINGS_CACHE_KEY.to_string();

        // Check cache first
        if let Some(meetings) = self.meeting_cache.get(&cache_key) {
            tracing::debug!("Using cached meetings");
            return Ok((meetings, true));
        }

        // Cache miss - fetch from repository in pages of 100
        let mut all_meetings = Vec::new();
        let mut offset = 0;
        const PAGE_SIZE: usize = 100;

        loop {
            let meetings = self.meeting_repo.list(PAGE_SIZE, offset).await?;
            let count = meetings.len();
            all_meetings.extend(meetings);

            if count < PAGE_SIZE {
                // Last page
                break;
            }

            offset += PAGE_SIZE;
        }

        self.meeting_cache.insert(cache_key, all_meetings.clone());

        Ok((all_meetings, false))
    }

    /// Invalidate the meeting cache.
    pub fn invalidate_cache(&self) {
        self.meeting_cache.remove(&MEETINGS_CACHE_KEY.to_string());
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}

/// Sort meetings newest first.
///
/// Ids are assigned by the backend in creation order, so descending id
/// is descending creation time.
fn sort_newest_first(meetings: &mut [Meeting]) {
    meetings.sort_by(|a, b| b.id.cmp(&a.id));
}
