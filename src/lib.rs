//! Portal MCP Server - A Rust implementation of the Model Context Protocol server for a membership portal.
//!
//! This library provides a production-quality MCP server that enables AI assistants
//! to interact with a membership portal: meeting schedules, the notice board,
//! member-to-member messaging, the member directory, and the document vault.
//!
//! # Architecture
//!
//! - **models**: Data structures for meetings, notices, messages, and members
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **domain**: Validated value objects (principals, email addresses)
//! - **client**: HTTP client for the portal backend API
//! - **repositories**: Data access traits over the client
//! - **search**: Case-insensitive substring filtering shared by all tools
//! - **tools**: Cached portal operations backing the MCP tools
//! - **services**: Business logic and input validation
//! - **cache**: Time-based caching with TTL
//! - **server**: MCP protocol server

// Re-export commonly used types
pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;
pub mod tools;

pub use cache::TimedCache;
pub use client::{AsyncPortalClient, AsyncPortalClientImpl, PortalClient};
pub use config::Config;
pub use domain::{EmailAddress, PrincipalId, ValidationError};
pub use error::{ConfigError, PortalApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Meeting, MemberRecord, Message, Notice, UserProfile, UserRole};
pub use search::{filter_by_search, matches_search, normalize_text};
pub use server::PortalMcpServer;
pub use tools::{
    DirectoryTools, DocumentListResponse, MeetingListResponse, MeetingTools, MemberListResponse,
    MessageListResponse, MessagingTools, NoticeListResponse, NoticeTools, PortalSearchResponse,
    PortalSearchTools, RecipientResolution, UsernameListResponse, VaultTools,
};
