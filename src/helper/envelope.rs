//! The JSON response envelope, the sole contract with the helper binary.
//!
//! The helper writes exactly one JSON document to stdout:
//!
//! ```json
//! { "status": "success", "result": <any JSON> }
//! { "status": "error",   "message": "<user-facing text>" }
//! ```
//!
//! The contract is versionless and must be parsed defensively: empty
//! output, invalid JSON, and non-matching shapes are all failure conditions,
//! never defaults.

use serde::{Deserialize, Serialize};

/// One decoded helper response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HelperEnvelope {
    /// The helper completed the operation; `result` is its payload.
    Success {
        /// Untyped payload; the repository layer shapes it into records.
        result: serde_json::Value,
    },
    /// The helper ran but reports a domain-level failure.
    Error {
        /// User-facing message, surfaced verbatim.
        message: String,
    },
}

impl HelperEnvelope {
    /// Defensively parse helper stdout into an envelope.
    ///
    /// Returns a parse-failure description (not a [`crate::error::BridgeError`];
    /// the executor decides the error class based on context).
    pub fn parse(stdout: &str) -> Result<Self, String> {
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Err("Empty CLI output".to_owned());
        }
        serde_json::from_str(trimmed).map_err(|e| format!("invalid response envelope: {e}"))
    }
}
