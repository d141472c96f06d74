use async_trait::async_trait;
use portal_mcp_server::error::{PortalApiError, PortalApiResult};
use portal_mcp_server::models::Notice;
use portal_mcp_server::repositories::NoticeRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock notice repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockNoticeRepository {
    notices: Arc<Mutex<Vec<Notice>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockNoticeRepository {
    pub fn new() -> Self {
        Self {
            notices: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_notice(&self, notice: Notice) {
        let mut notices = self.notices.lock().unwrap();
        notices.push(notice);
    }

    pub fn add_notices(&self, notices_list: Vec<Notice>) {
        let mut notices = self.notices.lock().unwrap();
        notices.extend(notices_list);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    pub fn clear(&self) {
        let mut notices = self.notices.lock().unwrap();
        notices.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn next_id(notices: &[Notice]) -> u64 {
        notices.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }
}

impl Default for MockNoticeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoticeRepository for MockNoticeRepository {
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Notice>> {
        self.track_call("list");

        let notices = self.notices.lock().unwrap();
        let result: Vec<Notice> = notices.iter().skip(offset).take(limit).cloned().collect();
        Ok(result)
    }

    async fn create(&self, title: &str, content: &str) -> PortalApiResult<Notice> {
        self.track_call("create");

        let mut notices = self.notices.lock().unwrap();
        // The backend reports 0 for created_at
        let notice = Notice::new(
            Self::next_id(&notices),
            title.to_string(),
            content.to_string(),
            0,
        );

        notices.push(notice.clone());
        Ok(notice)
    }

    async fn delete(&self, id: u64) -> PortalApiResult<()> {
        self.track_call("delete");

        let mut notices = self.notices.lock().unwrap();

        let before = notices.len();
        notices.retain(|n| n.id != id);

        if notices.len() == before {
            return Err(PortalApiError::NotFound(format!("Notice {} not found", id)));
        }

        Ok(())
    }
}
