//! Tests for MCP server construction and advertised capabilities.
//!
//! Tool behavior is covered by the service and tools integration tests;
//! these tests check that the server wires together and reports itself
//! correctly over the MCP handshake.

mod mocks;

use mocks::{
    MockDocumentRepository, MockMeetingRepository, MockMemberRepository, MockMessageRepository,
    MockNoticeRepository,
};
use portal_mcp_server::metrics::Metrics;
use portal_mcp_server::repositories::{
    DocumentRepository, MeetingRepository, MemberRepository, MessageRepository, NoticeRepository,
};
use portal_mcp_server::server::PortalMcpServer;
use rmcp::ServerHandler;
use std::sync::Arc;

fn make_server() -> PortalMcpServer {
    PortalMcpServer::new(
        Arc::new(MockMeetingRepository::new()) as Arc<dyn MeetingRepository>,
        Arc::new(MockNoticeRepository::new()) as Arc<dyn NoticeRepository>,
        Arc::new(MockMessageRepository::new()) as Arc<dyn MessageRepository>,
        Arc::new(MockMemberRepository::new()) as Arc<dyn MemberRepository>,
        Arc::new(MockDocumentRepository::new()) as Arc<dyn DocumentRepository>,
        Metrics::new(),
        300,
        10,
        200,
    )
}

#[test]
fn test_server_construction() {
    let server = make_server();
    let _cloned = server.clone();
}

#[test]
fn test_server_info() {
    let server = make_server();
    let info = server.get_info();

    assert_eq!(info.server_info.name, "portal-mcp-server");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.instructions.is_some());
    assert!(info.capabilities.tools.is_some());
}
