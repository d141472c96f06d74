//! Mailbox tools.
//!
//! Provides access to the caller's inbox and sent messages, and sending.
//! The inbox is cached; sent messages are always fetched fresh because
//! the caller is the only writer and expects to see a send immediately.

use crate::cache::TimedCache;
use crate::error::PortalApiResult;
use crate::models::Message;
use crate::repositories::MessageRepository;
use std::sync::Arc;

const INBOX_CACHE_KEY: &str = "inbox";

/// Mailbox tools for reading and sending messages.
pub struct MessagingTools {
    message_repo: Arc<dyn MessageRepository>,
    inbox_cache: Arc<TimedCache<String, Vec<Message>>>,
    cache_ttl_secs: u64,
}

/// Response from mailbox listings with cache metadata.
#[derive(Debug, Clone)]
pub struct MessageListResponse {
    /// Messages in storage order
    pub messages: Vec<Message>,

    /// Whether the results came from cache
    pub from_cache: bool,
}

impl MessagingTools {
    /// Create new messaging tools.
    ///
    /// # Arguments
    /// * `message_repo` - MessageRepository for data access
    /// * `cache_ttl_secs` - Cache time-to-live in seconds
    pub fn new(message_repo: Arc<dyn MessageRepository>, cache_ttl_secs: u64) -> Self {
        Self {
            message_repo,
            inbox_cache: Arc::new(TimedCache::new(cache_ttl_secs)),
            cache_ttl_secs,
        }
    }

    /// Get the caller's inbox.
    pub async fn inbox(&self) -> PortalApiResult<MessageListResponse> {
        let cache_key = INBOX_CACHE_KEY.to_string();

        if let Some(messages) = self.inbox_cache.get(&cache_key) {
            tracing::debug!("Using cached inbox");
            return Ok(MessageListResponse {
                messages,
                from_cache: true,
            });
        }

        let messages = self.message_repo.inbox().await?;
        self.inbox_cache.insert(cache_key, messages.clone());

        Ok(MessageListResponse {
            messages,
            from_cache: false,
        })
    }

    /// Get the caller's sent messages. Never cached.
    pub async fn sent(&self) -> PortalApiResult<MessageListResponse> {
        let messages = self.message_repo.sent().await?;

        Ok(MessageListResponse {
            messages,
            from_cache: false,
        })
    }

    /// Send a message to a member, addressed by username.
    ///
    /// Invalidates the inbox cache; self-addressed messages land there.
    pub async fn send_message(
        &self,
        recipient_name: &str,
        subject: &str,
        content: &str,
    ) -> PortalApiResult<Message> {
        let message = self
            .message_repo
            .send(recipient_name, subject, content)
            .await?;
        self.invalidate_cache();
        Ok(message)
    }

    /// Invalidate the inbox cache.
    pub fn invalidate_cache(&self) {
        self.inbox_cache.remove(&INBOX_CACHE_KEY.to_string());
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}
