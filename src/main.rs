//! Portal MCP Server - Main entry point
//!
//! This is the main executable for the Portal MCP Server, which provides a Model
//! Context Protocol (MCP) interface to a membership portal backend.

use anyhow::Result;
use portal_mcp_server::repositories::{
    DocumentRepository, MeetingRepository, MemberRepository, MessageRepository, NoticeRepository,
    PortalDocumentRepository, PortalMeetingRepository, PortalMemberRepository,
    PortalMessageRepository, PortalNoticeRepository,
};
use portal_mcp_server::{AsyncPortalClient, AsyncPortalClientImpl};
use portal_mcp_server::{Config, PortalClient, PortalMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter.
    // RUST_LOG still wins when set.
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logging goes to stderr only to avoid polluting stdout/MCP communication
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Portal MCP Server with API URL: {}",
        config.portal_api_url
    );

    // Initialize portal client
    let sync_client = PortalClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncPortalClientImpl::new(sync_client)) as Arc<dyn AsyncPortalClient>;

    // Initialize repositories
    let meeting_repo =
        Arc::new(PortalMeetingRepository::new(client.clone())) as Arc<dyn MeetingRepository>;
    let notice_repo =
        Arc::new(PortalNoticeRepository::new(client.clone())) as Arc<dyn NoticeRepository>;
    let message_repo =
        Arc::new(PortalMessageRepository::new(client.clone())) as Arc<dyn MessageRepository>;
    let member_repo =
        Arc::new(PortalMemberRepository::new(client.clone())) as Arc<dyn MemberRepository>;
    let document_repo =
        Arc::new(PortalDocumentRepository::new(client)) as Arc<dyn DocumentRepository>;

    // Cache TTL configuration
    let cache_ttl_secs = config.cache_ttl_minutes * 60; // Convert minutes to seconds

    // Create the MCP server (tools and services are constructed internally)
    let server = PortalMcpServer::new(
        meeting_repo,
        notice_repo,
        message_repo,
        member_repo,
        document_repo,
        metrics,
        cache_ttl_secs,
        config.recent_meetings_limit,
        config.max_search_query_len,
    );

    info!("Portal MCP Server initialized");
    info!(
        "Cache TTL: {} minutes ({} seconds)",
        config.cache_ttl_minutes, cache_ttl_secs
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    portal_mcp_server::server::run_server(server).await?;

    info!("Portal MCP Server shutdown complete");
    Ok(())
}
