use async_trait::async_trait;
use portal_mcp_server::error::{PortalApiError, PortalApiResult};
use portal_mcp_server::repositories::DocumentRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock document repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDocumentRepository {
    documents: Arc<Mutex<Vec<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDocumentRepository {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_document(&self, name: &str) {
        let mut documents = self.documents.lock().unwrap();
        documents.push(name.to_string());
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

impl Default for MockDocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepository {
    async fn list(&self) -> PortalApiResult<Vec<String>> {
        self.track_call("list");

        let documents = self.documents.lock().unwrap();
        Ok(documents.clone())
    }

    async fn delete(&self, name: &str) -> PortalApiResult<()> {
        self.track_call("delete");

        let mut documents = self.documents.lock().unwrap();

        let before = documents.len();
        documents.retain(|d| d != name);

        if documents.len() == before {
            return Err(PortalApiError::NotFound(format!(
                "Document {} not found",
                name
            )));
        }

        Ok(())
    }
}
