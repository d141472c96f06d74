//! MCP tool handlers for the portal server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::metrics::Metrics;
use crate::models::UserRole;
use crate::repositories::{
    DocumentRepository, MeetingRepository, MemberRepository, MessageRepository, NoticeRepository,
};
use crate::services::MessageFolder;
use crate::tools::{
    DirectoryTools, MeetingTools, MessagingTools, NoticeTools, PortalSearchTools, VaultTools,
};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The portal MCP server that exposes tools for the membership portal.
#[derive(Clone)]
pub struct PortalMcpServer {
    // Services provide business logic
    meeting_service: Arc<dyn crate::services::MeetingService>,
    notice_service: Arc<dyn crate::services::NoticeService>,
    messaging_service: Arc<dyn crate::services::MessagingService>,
    directory_service: Arc<dyn crate::services::DirectoryService>,
    vault_service: Arc<dyn crate::services::VaultService>,
    search_tools: PortalSearchTools,
    max_query_len: usize,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for PortalMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "portal-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a membership portal - provides meeting schedules, the notice board, member-to-member messaging, the member directory, and the document vault.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct SearchPortalParams {
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchMeetingsParams {
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RecentMeetingsParams {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateMeetingParams {
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetNoticesParams {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PostNoticeParams {
    title: String,
    content: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RemoveNoticeParams {
    id: u64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetMessagesParams {
    /// "inbox" (default) or "sent"
    #[serde(default)]
    folder: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SendMessageParams {
    recipient: String,
    subject: String,
    content: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchMembersParams {
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetMemberProfileParams {
    principal: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RegisterMemberParams {
    name: String,
    email: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateMyProfileParams {
    name: String,
    email: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AssignRoleParams {
    principal: String,
    /// "admin", "user", or "guest"
    role: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RemoveDocumentParams {
    name: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl PortalMcpServer {
    /// Create a new portal MCP server.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        meeting_repo: Arc<dyn MeetingRepository>,
        notice_repo: Arc<dyn NoticeRepository>,
        message_repo: Arc<dyn MessageRepository>,
        member_repo: Arc<dyn MemberRepository>,
        document_repo: Arc<dyn DocumentRepository>,
        metrics: Metrics,
        cache_ttl_secs: u64,
        recent_meetings_limit: usize,
        max_query_len: usize,
    ) -> Self {
        // Construct all tools with repository dependencies
        let meeting_tools = Arc::new(MeetingTools::new(
            meeting_repo,
            recent_meetings_limit,
            cache_ttl_secs,
        ));
        let notice_tools = Arc::new(NoticeTools::new(notice_repo, cache_ttl_secs));
        let messaging_tools = Arc::new(MessagingTools::new(message_repo, cache_ttl_secs));
        let directory_tools = Arc::new(DirectoryTools::new(member_repo, cache_ttl_secs));
        let vault_tools = Arc::new(VaultTools::new(document_repo, cache_ttl_secs));

        let search_tools = PortalSearchTools::new(
            meeting_tools.clone(),
            notice_tools.clone(),
            directory_tools.clone(),
            metrics,
        );

        // Construct services from tools
        let meeting_service = Arc::new(crate::services::MeetingServiceImpl::new(
            meeting_tools,
            max_query_len,
        )) as Arc<dyn crate::services::MeetingService>;

        let notice_service = Arc::new(crate::services::NoticeServiceImpl::new(
            notice_tools,
            max_query_len,
        )) as Arc<dyn crate::services::NoticeService>;

        let messaging_service = Arc::new(crate::services::MessagingServiceImpl::new(
            messaging_tools,
            directory_tools.clone(),
        )) as Arc<dyn crate::services::MessagingService>;

        let directory_service = Arc::new(crate::services::DirectoryServiceImpl::new(
            directory_tools,
            max_query_len,
        )) as Arc<dyn crate::services::DirectoryService>;

        let vault_service = Arc::new(crate::services::VaultServiceImpl::new(vault_tools))
            as Arc<dyn crate::services::VaultService>;

        Self {
            meeting_service,
            notice_service,
            messaging_service,
            directory_service,
            vault_service,
            search_tools,
            max_query_len,
            tool_router: Self::tool_router(),
        }
    }

    /// Search meetings, notices, and member usernames with one query.
    #[tool(
        description = "Search the whole portal with one query. Matches meeting titles and descriptions, notice titles and contents, and member usernames (case-insensitive substring). An empty query returns everything."
    )]
    async fn search_portal(
        &self,
        params: Parameters<SearchPortalParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        if params.query.len() > self.max_query_len {
            return Err(to_mcp_error(crate::error::PortalApiError::InvalidRequest(
                format!("Search query too long (max {} characters)", self.max_query_len),
            )));
        }

        let response = self
            .search_tools
            .search_portal(&params.query)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "query": params.query,
            "from_cache": response.from_cache,
            "meeting_count": response.meeting_count,
            "notice_count": response.notice_count,
            "username_count": response.username_count,
            "meetings": response.meetings,
            "notices": response.notices,
            "usernames": response.usernames,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Search meetings by title and description.
    #[tool(
        description = "Search meetings by title and description (case-insensitive substring). Results are sorted newest first."
    )]
    async fn search_meetings(
        &self,
        params: Parameters<SearchMeetingsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .meeting_service
            .search_meetings(&params.query)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "query": params.query,
            "result_count": response.meetings.len(),
            "from_cache": response.from_cache,
            "meetings": response.meetings,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Get the most recent meetings.
    #[tool(
        description = "Get the most recently created meetings, optionally narrowed by a query over title and description. The query filters within the recent window, it does not reach further back."
    )]
    async fn get_recent_meetings(
        &self,
        params: Parameters<RecentMeetingsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let query = params.query.as_deref().unwrap_or("");

        let response = self
            .meeting_service
            .recent_meetings(query)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "result_count": response.meetings.len(),
            "from_cache": response.from_cache,
            "meetings": response.meetings,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Create a new meeting.
    #[tool(
        description = "Create a new meeting with a title and an optional description. The title must not be empty."
    )]
    async fn create_meeting(
        &self,
        params: Parameters<CreateMeetingParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let meeting = self
            .meeting_service
            .create_meeting(params.title, params.description)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&meeting).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Get notices from the notice board.
    #[tool(
        description = "Get the notice board, newest first. An optional query filters by title and content (case-insensitive substring)."
    )]
    async fn get_notices(
        &self,
        params: Parameters<GetNoticesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = match params.query.as_deref() {
            Some(query) => self.notice_service.search_notices(query).await,
            None => self.notice_service.list_notices().await,
        }
        .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "result_count": response.notices.len(),
            "from_cache": response.from_cache,
            "notices": response.notices,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Post a notice to the notice board.
    #[tool(description = "Post a notice to the shared notice board (admin only)")]
    async fn post_notice(
        &self,
        params: Parameters<PostNoticeParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let notice = self
            .notice_service
            .post_notice(params.title, params.content)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&notice).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Remove a notice from the notice board.
    #[tool(description = "Remove a notice from the notice board by id (admin only)")]
    async fn remove_notice(
        &self,
        params: Parameters<RemoveNoticeParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.notice_service
            .remove_notice(params.id)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "deleted": true,
            "id": params.id,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Get the caller's messages.
    #[tool(
        description = "Get the caller's messages. The folder parameter selects \"inbox\" (default) or \"sent\"."
    )]
    async fn get_messages(
        &self,
        params: Parameters<GetMessagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let folder = match params.folder.as_deref() {
            None => MessageFolder::Inbox,
            Some(s) => s
                .parse::<MessageFolder>()
                .map_err(crate::error::PortalApiError::InvalidRequest)
                .map_err(to_mcp_error)?,
        };

        let response = self
            .messaging_service
            .get_messages(folder)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "folder": match folder {
                MessageFolder::Inbox => "inbox",
                MessageFolder::Sent => "sent",
            },
            "result_count": response.messages.len(),
            "from_cache": response.from_cache,
            "messages": response.messages,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Send a message to another member.
    #[tool(
        description = "Send a message to another member, addressed by username. Usernames are case-sensitive; the recipient must be registered."
    )]
    async fn send_message(
        &self,
        params: Parameters<SendMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: send_message called");
        tracing::debug!(
            "Parameters: recipient={}, subject={}, content_len={}",
            params.recipient,
            params.subject,
            params.content.len()
        );

        let message = self
            .messaging_service
            .send_message(params.recipient, params.subject, params.content)
            .await
            .map_err(|e| {
                tracing::error!("Failed to send message: {:?}", e);
                to_mcp_error(e)
            })?;

        tracing::info!("Message sent to: {}", message.recipient);
        let json_response = serde_json::to_string_pretty(&message).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Search the member directory.
    #[tool(
        description = "Search the member directory by name and email (case-insensitive substring)"
    )]
    async fn search_members(
        &self,
        params: Parameters<SearchMembersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .directory_service
            .search_members(&params.query)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "query": params.query,
            "result_count": response.members.len(),
            "from_cache": response.from_cache,
            "members": response.members,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Get the profile of a member by principal.
    #[tool(description = "Get the profile of a member identified by principal")]
    async fn get_member_profile(
        &self,
        params: Parameters<GetMemberProfileParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let profile = self
            .directory_service
            .profile_of(&params.principal)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&profile).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Get the caller's own profile, role, and admin flag.
    #[tool(
        description = "Get the caller's own profile together with their role and whether they are an admin. Fails if the caller has not registered."
    )]
    async fn get_my_profile(&self) -> Result<CallToolResult, McpError> {
        let profile = self
            .directory_service
            .my_profile()
            .await
            .map_err(to_mcp_error)?;
        let role = self
            .directory_service
            .my_role()
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "profile": profile,
            "role": role,
            "is_admin": role == UserRole::Admin,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Register the caller as a member.
    #[tool(description = "Register the caller as a member with a display name and email address")]
    async fn register_member(
        &self,
        params: Parameters<RegisterMemberParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: register_member called");

        let profile = self
            .directory_service
            .register(params.name, params.email)
            .await
            .map_err(|e| {
                tracing::error!("Failed to register member: {:?}", e);
                to_mcp_error(e)
            })?;

        tracing::info!("Member registered: {}", profile.name);
        let json_response = serde_json::to_string_pretty(&profile).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Update the caller's profile.
    #[tool(description = "Update the caller's display name and email address")]
    async fn update_my_profile(
        &self,
        params: Parameters<UpdateMyProfileParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let profile = self
            .directory_service
            .update_profile(params.name, params.email)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&profile).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Assign a role to a member.
    #[tool(
        description = "Assign a role (admin, user, or guest) to a member identified by principal (admin only)"
    )]
    async fn assign_member_role(
        &self,
        params: Parameters<AssignRoleParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.directory_service
            .assign_role(&params.principal, &params.role)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "assigned": true,
            "principal": params.principal,
            "role": params.role.to_lowercase(),
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Get the number of registered members.
    #[tool(description = "Get the number of registered members")]
    async fn get_member_count(&self) -> Result<CallToolResult, McpError> {
        let count = self
            .directory_service
            .member_count()
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "member_count": count,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// List the documents stored in the vault.
    #[tool(description = "List the names of all documents stored in the vault")]
    async fn list_documents(&self) -> Result<CallToolResult, McpError> {
        let response = self
            .vault_service
            .list_documents()
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "result_count": response.documents.len(),
            "from_cache": response.from_cache,
            "documents": response.documents,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Remove a document from the vault.
    #[tool(description = "Remove a document from the vault by name (admin only)")]
    async fn remove_document(
        &self,
        params: Parameters<RemoveDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        self.vault_service
            .remove_document(&params.name)
            .await
            .map_err(to_mcp_error)?;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "deleted": true,
            "name": params.name,
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
