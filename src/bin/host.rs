//! Headless host binary for stdin/stdout JSON tool calls.
//!
//! Reads newline-delimited JSON requests of the form
//! `{"tool": "reminders_tasks", "args": {"action": "read"}}` from stdin,
//! dispatches them through the tool registry, and writes the resulting
//! response envelopes as JSON lines to stdout.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean JSON protocol channel.

use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

use datebook::ToolRegistry;
use datebook::tools::ToolResponse;

/// One tool-call request line.
#[derive(Debug, Deserialize)]
struct ToolCallRequest {
    /// Tool name (underscore or dotted alias form).
    tool: String,
    /// Raw tool arguments; validated downstream.
    #[serde(default)]
    args: Option<serde_json::Value>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing to stderr only (stdout is reserved for the JSON
    // protocol).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("datebook-host starting");

    let registry = ToolRegistry::new();
    run_stdio_loop(&registry).await?;

    tracing::info!("datebook-host shut down cleanly");
    Ok(())
}

/// Read stdin line-by-line, dispatch each request, and write responses.
async fn run_stdio_loop(registry: &ToolRegistry) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut writer = BufWriter::new(tokio::io::stdout());
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        // EOF
        if bytes_read == 0 {
            tracing::info!("stdin closed (EOF); shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ToolCallRequest>(trimmed) {
            Ok(request) => {
                registry
                    .handle_tool_call(&request.tool, request.args.as_ref())
                    .await
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse tool call request");
                ToolResponse::error(format!("failed to parse tool call request: {e}"))
            }
        };

        let json = serde_json::to_string(&response)?;
        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
