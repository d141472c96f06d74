use async_trait::async_trait;
use portal_mcp_server::error::PortalApiResult;
use portal_mcp_server::models::Message;
use portal_mcp_server::repositories::MessageRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock message repository for testing.
///
/// `send` always succeeds; recipient validation belongs to the service
/// layer and is exercised against the member mock.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMessageRepository {
    inbox: Arc<Mutex<Vec<Message>>>,
    sent: Arc<Mutex<Vec<Message>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            inbox: Arc::new(Mutex::new(Vec::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_inbox_message(&self, message: Message) {
        let mut inbox = self.inbox.lock().unwrap();
        inbox.push(message);
    }

    pub fn add_sent_message(&self, message: Message) {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message);
    }

    pub fn sent_messages(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn inbox(&self) -> PortalApiResult<Vec<Message>> {
        self.track_call("inbox");

        let inbox = self.inbox.lock().unwrap();
        Ok(inbox.clone())
    }

    async fn sent(&self) -> PortalApiResult<Vec<Message>> {
        self.track_call("sent");

        let sent = self.sent.lock().unwrap();
        Ok(sent.clone())
    }

    async fn send(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message> {
        self.track_call("send");

        let message = Message::new(
            super::CALLER_PRINCIPAL.to_string(),
            recipient_name.to_string(),
            subject.to_string(),
            content.to_string(),
        );

        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(message)
    }
}
