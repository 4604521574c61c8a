//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes content validation over the MCP protocol, making it
//! available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer — it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method should delegate to core
//! library functions rather than implementing business logic directly.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use prose_vet_core::config::Config;
use prose_vet_core::{ValidationContext, protocol, run_validation};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `validate_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ValidateContentParams {
    /// The Markdown or plain-text content to validate.
    pub content: String,
    /// Optional filename hint, used in messages only.
    pub filename: Option<String>,
    /// Checkers to run. Omit for all.
    pub checkers: Option<Vec<String>>,
}

/// MCP server exposing content validation to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProseVetServer {
    config: Config,
    max_input: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl ProseVetServer {
    /// Create a new MCP server instance.
    pub fn new(config: Config, max_input: Option<usize>) -> Self {
        Self {
            config,
            max_input,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Validate content for spelling, grammar, honorific, placeholder, and
    /// capitalization issues.
    #[tool(
        description = "Validate Markdown or plain-text content. Returns pass/fail status with issues: severity, message, and suggested fix."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn validate_content(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ValidateContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "validate_content",
            content_len = params.content.len(),
            filename = ?params.filename,
            "executing MCP tool"
        );

        if let Some(max) = self.max_input
            && params.content.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.content.len()
                ),
                None,
            ));
        }

        let ctx = match self.config.extra_words {
            Some(ref words) => ValidationContext::with_extra_words(words),
            None => ValidationContext::builtin(),
        };
        let enabled = params
            .checkers
            .as_deref()
            .or(self.config.checkers.as_deref());
        let file_hint = params.filename.as_deref().unwrap_or("content");

        let report = run_validation(file_hint, &params.content, &ctx, enabled)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        // Structured contract: status, issues, summary message.
        let parsed = protocol::parse(&protocol::render(&report));
        let json = serde_json::to_string_pretty(&parsed)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "validate_content",
            pass = report.pass,
            findings = report.findings.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProseVetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use validate_content to check Markdown or plain text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn test_server() -> ProseVetServer {
        ProseVetServer::new(Config::default(), Some(1024 * 1024))
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = test_server();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = test_server();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = test_server();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");

        assert!(!result.is_error.unwrap_or(false));
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = test_server();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");

        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn validate_content_tool_reports_pass() {
        let server = test_server();
        let params = Parameters(ValidateContentParams {
            content: "The cat sat on the mat.".to_string(),
            filename: None,
            checkers: None,
        });

        let result = server
            .validate_content(params)
            .expect("validate_content should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");

        assert_eq!(json["status"], "pass");
        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn validate_content_tool_reports_issues() {
        let server = test_server();
        let params = Parameters(ValidateContentParams {
            content: "This document has recieve in it.\nTODO: finish".to_string(),
            filename: Some("draft.md".to_string()),
            checkers: None,
        });

        let result = server
            .validate_content(params)
            .expect("validate_content should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");

        assert_eq!(json["status"], "fail");
        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["severity"], "critical");
        assert_eq!(issues[0]["suggestion"], "receive");
        assert_eq!(issues[1]["severity"], "low");
    }

    #[test]
    fn validate_content_tool_respects_checker_subset() {
        let server = test_server();
        let params = Parameters(ValidateContentParams {
            content: "recieve TODO".to_string(),
            filename: None,
            checkers: Some(vec!["placeholder".to_string()]),
        });

        let result = server
            .validate_content(params)
            .expect("validate_content should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");

        let issues = json["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0]["severity"], "low");
    }

    #[test]
    fn validate_content_tool_rejects_unknown_checker() {
        let server = test_server();
        let params = Parameters(ValidateContentParams {
            content: "text".to_string(),
            filename: None,
            checkers: Some(vec!["styleguide".to_string()]),
        });

        let err = server
            .validate_content(params)
            .expect_err("unknown checker should error");
        assert!(err.message.contains("unknown checker"));
    }

    #[test]
    fn validate_content_tool_enforces_input_limit() {
        let server = ProseVetServer::new(Config::default(), Some(16));
        let params = Parameters(ValidateContentParams {
            content: "x".repeat(64),
            filename: None,
            checkers: None,
        });

        let err = server
            .validate_content(params)
            .expect_err("oversized input should error");
        assert!(err.message.contains("input too large"));
    }
}
