//! Vault service layer.
//!
//! Business logic for the document vault.

use crate::error::PortalApiResult;
use crate::tools::{DocumentListResponse, VaultTools};
use async_trait::async_trait;
use std::sync::Arc;

/// Vault service trait for business operations.
#[async_trait]
pub trait VaultService: Send + Sync {
    /// Get the names of all stored documents.
    async fn list_documents(&self) -> PortalApiResult<DocumentListResponse>;

    /// Remove a document by name (admin only).
    async fn remove_document(&self, name: &str) -> PortalApiResult<()>;
}

/// Default implementation of VaultService.
pub struct VaultServiceImpl {
    vault_tools: Arc<VaultTools>,
}

/// Validation helper functions.
impl VaultServiceImpl {
    /// Validate a document name.
    fn validate_document_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Document name cannot be empty".to_string());
        }
        if name.len() > 255 {
            return Err("Document name too long (max 255 characters)".to_string());
        }
        Ok(())
    }
}

impl VaultServiceImpl {
    /// Create a new vault service.
    pub fn new(vault_tools: Arc<VaultTools>) -> Self {
        Self { vault_tools }
    }
}

#[async_trait]
impl VaultService for VaultServiceImpl {
    async fn list_documents(&self) -> PortalApiResult<DocumentListResponse> {
        self.vault_tools.list_documents().await
    }

    async fn remove_document(&self, name: &str) -> PortalApiResult<()> {
        Self::validate_document_name(name)
            .map_err(crate::error::PortalApiError::InvalidRequest)?;

        self.vault_tools.delete_document(name.trim()).await
    }
}
