use async_trait::async_trait;
use portal_mcp_server::error::PortalApiResult;
use portal_mcp_server::models::Meeting;
use portal_mcp_server::repositories::MeetingRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock meeting repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMeetingRepository {
    meetings: Arc<Mutex<Vec<Meeting>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockMeetingRepository {
    pub fn new() -> Self {
        Self {
            meetings: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_meeting(&self, meeting: Meeting) {
        let mut meetings = self.meetings.lock().unwrap();
        meetings.push(meeting);
    }

    pub fn add_meetings(&self, meetings_list: Vec<Meeting>) {
        let mut meetings = self.meetings.lock().unwrap();
        meetings.extend(meetings_list);
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
        let mut meetings = self.meetings.lock().unwrap();
        meetings.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn next_id(meetings: &[Meeting]) -> u64 {
        meetings.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

impl Default for MockMeetingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MeetingRepository for MockMeetingRepository {
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<Meeting>> {
        self.track_call("list");

        let meetings = self.meetings.lock().unwrap();
        let result: Vec<Meeting> = meetings.iter().skip(offset).take(limit).cloned().collect();
        Ok(result)
    }

    async fn create(&self, title: &str, description: &str) -> PortalApiResult<Meeting> {
        self.track_call("create");

        let mut meetings = self.meetings.lock().unwrap();
        let meeting = Meeting::new(
            Self::next_id(&meetings),
            title.to_string(),
            super::CALLER_PRINCIPAL.to_string(),
            description.to_string(),
        );

        meetings.push(meeting.clone());
        Ok(meeting)
    }
}
