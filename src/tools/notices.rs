//! Notice board tools.
//!
//! Provides cached access to the notice board, text filtering, posting,
//! and removal of notices.

use crate::cache::TimedCache;
use crate::error::PortalApiResult;
use crate::models::Notice;
use crate::repositories::NoticeRepository;
use crate::search::filter_by_search;
use std::sync::Arc;

const NOTICES_CACHE_KEY: &str = "notices";

/// Notice board tools for listing, filtering, posting, and removing notices.
pub struct NoticeTools {
    notice_repo: Arc<dyn NoticeRepository>,
    notice_cache: Arc<TimedCache<String, Vec<Notice>>>,
    cache_ttl_secs: u64,
}

/// Response from notice listings with cache metadata.
#[derive(Debug, Clone)]
pub struct NoticeListResponse {
    /// Notices, newest first
    pub notices: Vec<Notice>,

    /// Whether the results came from cache
    pub from_cache: bool,
}

impl NoticeTools {
    /// Create new notice tools.
    ///
    /// # Arguments
    /// * `notice_repo` - NoticeRepository for data access
    /// * `cache_ttl_secs` - Cache time-to-live in seconds
    pub fn new(notice_repo: Arc<dyn NoticeRepository>, cache_ttl_secs: u64) -> Self {
        Self {
            notice_repo,
            notice_cache: Arc::new(TimedCache::new(cache_ttl_secs)),
            cache_ttl_secs,
        }
    }

    /// Get all notices, newest first.
    pub async fn get_all_notices(&self) -> PortalApiResult<NoticeListResponse> {
        let (mut notices, from_cache) = self.get_cached_notices().await?;
        sort_newest_first(&mut notices);

        Ok(NoticeListResponse {
            notices,
            from_cache,
        })
    }

    /// Search all notices by title and content.
    pub async fn search_notices(&self, query: &str) -> PortalApiResult<NoticeListResponse> {
        let (mut notices, from_cache) = self.get_cached_notices().await?;
        sort_newest_first(&mut notices);

        let notices = filter_by_search(notices, query, |notice| {
            vec![notice.title.clone(), notice.content.clone()]
        });

        Ok(NoticeListResponse {
            notices,
            from_cache,
        })
    }

    /// Post a new notice.
    ///
    /// Invalidates the notice cache so the next listing reflects the
    /// new entry.
    pub async fn create_notice(&self, title: &str, content: &str) -> PortalApiResult<Notice> {
        let notice = self.notice_repo.create(title, content).await?;
        self.invalidate_cache();
        Ok(notice)
    }

    /// Delete a notice by id.
    pub async fn delete_notice(&self, id: u64) -> PortalApiResult<()> {
        self.notice_repo.delete(id).await?;
        self.invalidate_cache();
        Ok(())
    }

    /// Get all notices from cache or API.
    async fn get_cached_notices(&self) -> PortalApiResult<(Vec<Notice>, bool)> {
        let cache_key = NOTICES_CACHE_KEY.to_string();

        // Check cache first
        if let Some(notices) = self.notice_cache.get(&cache_key) {
            tracing::debug!("Using cached notices");
            return Ok((notices, true));
        }

        // Cache miss - fetch from repository in pages of 100
        let mut all_notices = Vec::new();
        let mut offset = 0;
        const PAGE_SIZE: usize = 100;

        loop {
            let notices = self.notice_repo.list(PAGE_SIZE, offset).await?;
            let count = notices.len();
            all_notices.extend(notices);

            if count < PAGE_SIZE {
                // Last page
                break;
            }

            offset += PAGE_SIZE;
        }

        self.notice_cache.insert(cache_key, all_notices.clone());

        Ok((all_notices, false))
    }

    /// Invalidate the notice cache.
    pub fn invalidate_cache(&self) {
        self.notice_cache.remove(&NOTICES_CACHE_KEY.to_string());
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}

/// Sort notices newest first.
///
/// Ids are assigned by the backend in creation order. The `created_at`
/// field is not used here because the current backend always reports 0.
fn sort_newest_first(notices: &mut [Notice]) {
    notices.sort_by(|a, b| b.id.cmp(&a.id));
}
