//! Low-level subprocess spawn/capture primitive.
//!
//! Arguments are always passed as a discrete vector, never concatenated
//! into a shell command string, so no value needs shell quoting and no
//! injection surface exists. Output is captured as raw bytes and normalized
//! to text here, in one place.
//!
//! No timeout is imposed at this layer: a hung child blocks its calling
//! task until OS-level termination. Cancellation is likewise unsupported;
//! once spawned, a child runs to completion.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::BridgeError;

/// Captured output of a finished child process, normalized to text.
#[derive(Debug, Clone)]
pub struct RawOutput {
    /// Whether the process exited with a success status.
    pub success: bool,
    /// Exit status description for diagnostics (e.g. `"exit status: 1"`).
    pub status: String,
    /// Stdout decoded as UTF-8 (lossy); empty when the process wrote nothing.
    pub stdout: String,
    /// Stderr decoded as UTF-8 (lossy); diagnostics only, never parsed for
    /// control decisions.
    pub stderr: String,
}

/// Decode captured bytes to text.
///
/// Byte buffers are decoded as UTF-8 (lossily, so variable helper output can
/// never poison the transport); absent output is empty text.
pub(crate) fn decode_output(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    String::from_utf8_lossy(bytes).into_owned()
}

/// Spawn the helper binary with the given argument vector and wait for it.
///
/// # Errors
///
/// Returns [`BridgeError::Transport`] when the process cannot be spawned at
/// all (missing binary, exec failure). A nonzero exit is *not* an error at
/// this layer; classification of helper-reported failures happens in the
/// executor, which needs the captured stdout to do so.
pub async fn run_helper(binary: &Path, args: &[String]) -> Result<RawOutput, BridgeError> {
    run_captured(Command::new(binary).args(args)).await
}

/// Run an AppleScript one-liner via `osascript -e`.
///
/// Used by the permission-prompt and list-emblem side channels. Values
/// interpolated into `script` must already be escaped via
/// [`crate::automation::script::escape_applescript_string`].
///
/// # Errors
///
/// Returns [`BridgeError::Transport`] when `osascript` cannot be spawned or
/// exits with a failure status.
pub async fn run_osascript(script: &str) -> Result<String, BridgeError> {
    let output = run_captured(Command::new("osascript").arg("-e").arg(script)).await?;
    if !output.success {
        return Err(BridgeError::Transport(format!(
            "osascript failed ({}): {}",
            output.status,
            output.stderr.trim()
        )));
    }
    Ok(output.stdout)
}

async fn run_captured(command: &mut Command) -> Result<RawOutput, BridgeError> {
    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| BridgeError::Transport(format!("failed to spawn process: {e}")))?;

    Ok(RawOutput {
        success: output.status.success(),
        status: output.status.to_string(),
        stdout: decode_output(&output.stdout),
        stderr: decode_output(&output.stderr),
    })
}
