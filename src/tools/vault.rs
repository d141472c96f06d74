//! Document vault tools.
//!
//! Provides cached access to stored document names and deletion.

use crate::cache::TimedCache;
use crate::error::PortalApiResult;
use crate::repositories::DocumentRepository;
use std::sync::Arc;

const DOCUMENTS_CACHE_KEY: &str = "documents";

/// Document vault tools for listing and removing documents.
pub struct VaultTools {
    document_repo: Arc<dyn DocumentRepository>,
    document_cache: Arc<TimedCache<String, Vec<String>>>,
    cache_ttl_secs: u64,
}

/// Response from document listings with cache metadata.
#[derive(Debug, Clone)]
pub struct DocumentListResponse {
    /// Stored document names
    pub documents: Vec<String>,

    /// Whether the results came from cache
    pub from_cache: bool,
}

impl VaultTools {
    /// Create new vault tools.
    ///
    /// # Arguments
    /// * `document_repo` - DocumentRepository for data access
    /// * `cache_ttl_secs` - Cache time-to-live in seconds
    pub fn new(document_repo: Arc<dyn DocumentRepository>, cache_ttl_secs: u64) -> Self {
        Self {
            document_repo,
            document_cache: Arc::new(TimedCache::new(cache_ttl_secs)),
            cache_ttl_secs,
        }
    }

    /// Get the names of all stored documents.
    pub async fn list_documents(&self) -> PortalApiResult<DocumentListResponse> {
        let cache_key = DOCUMENTS_CACHE_KEY.to_string();

        if let Some(documents) = self.document_cache.get(&cache_key) {
            tracing::debug!("Using cached documents");
            return Ok(DocumentListResponse {
                documents,
                from_cache: true,
            });
        }

        let documents = self.document_repo.list().await?;
        self.document_cache.insert(cache_key, documents.clone());

        Ok(DocumentListResponse {
            documents,
            from_cache: false,
        })
    }

    /// Delete a document by name (admin only).
    pub async fn delete_document(&self, name: &str) -> PortalApiResult<()> {
        self.document_repo.delete(name).await?;
        self.invalidate_cache();
        Ok(())
    }

    /// Invalidate the document cache.
    pub fn invalidate_cache(&self) {
        self.document_cache.remove(&DOCUMENTS_CACHE_KEY.to_string());
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}
