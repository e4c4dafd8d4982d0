//! Result envelope and centralized error presentation.
//!
//! Every tool operation funnels through [`handle_async_operation`], which is
//! the single point where internal failures are downgraded to user-safe
//! text. No other layer decides verbosity: user-facing error kinds pass
//! through verbatim in every environment, everything else is generic unless
//! development mode is on.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// One block of tool-call result content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block type; always `"text"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The rendered text.
    pub text: String,
}

impl ContentBlock {
    /// A text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_owned(),
            text: text.into(),
        }
    }
}

/// Result envelope returned to the tool-call dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    /// Rendered content blocks (always exactly one text block today).
    pub content: Vec<ContentBlock>,
    /// Whether the operation failed.
    pub is_error: bool,
}

impl ToolResponse {
    /// A successful response wrapping the given text.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: false,
        }
    }

    /// A failed response wrapping the given message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: true,
        }
    }

    /// The first text block, for assertions and logging.
    pub fn text(&self) -> &str {
        self.content.first().map(|b| b.text.as_str()).unwrap_or("")
    }
}

/// Whether development mode is on (`DEBUG` set, or
/// `DATEBOOK_ENV=development`).
fn dev_mode() -> bool {
    if std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty()) {
        return true;
    }
    std::env::var("DATEBOOK_ENV").is_ok_and(|v| v == "development")
}

/// Render one failure into user-visible text.
///
/// User-facing kinds (validation, helper-reported) carry their message
/// verbatim regardless of environment. Everything else names the operation
/// and, outside development mode, hides the internal detail.
fn render_error(operation_name: &str, error: &BridgeError, dev: bool) -> String {
    if error.is_user_facing() {
        return error.message().to_owned();
    }
    if dev {
        format!("Failed to {operation_name}: {}", error.message())
    } else {
        format!("Failed to {operation_name}: System error occurred")
    }
}

/// Run a tool operation and wrap its outcome into a [`ToolResponse`].
///
/// Success text is wrapped as-is with `is_error: false`; failures are
/// rendered by kind (see [`render_error`]) with `is_error: true`.
pub async fn handle_async_operation<F>(operation: F, operation_name: &str) -> ToolResponse
where
    F: std::future::Future<Output = crate::error::Result<String>>,
{
    match operation.await {
        Ok(text) => ToolResponse::success(text),
        Err(error) => {
            tracing::debug!(
                operation = operation_name,
                code = error.code(),
                error = %error,
                "tool operation failed"
            );
            ToolResponse::error(render_error(operation_name, &error, dev_mode()))
        }
    }
}
