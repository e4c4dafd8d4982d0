//! Error types for the helper bridge.
//!
//! Every failure is classified exactly once, at the boundary nearest its
//! origin, into one of four kinds. Upstream code switches on the kind (never
//! on message text) to decide how a failure is rendered. Each kind carries a
//! stable error code (SCREAMING_SNAKE_CASE) included in the Display output
//! and accessible via [`BridgeError::code()`].

/// Stable error codes for programmatic error handling.
///
/// These codes never change and form part of the public API contract.
/// Use these for distinguishing errors rather than parsing Display output.
pub mod error_codes {
    /// Helper binary unresolved or installation root not found.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// Process failed to spawn, or its output was empty/malformed.
    pub const TRANSPORT_FAILED: &str = "TRANSPORT_FAILED";

    /// The helper ran and reported a structured, user-facing failure.
    pub const CLI_USER_ERROR: &str = "CLI_USER_ERROR";

    /// Request arguments failed schema validation.
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
}

/// Errors produced by the helper bridge.
///
/// Each variant includes a stable error code accessible via
/// [`BridgeError::code()`]. The Display impl formats as `[CODE] message`;
/// use [`BridgeError::message()`] when the bare message must be surfaced
/// verbatim (user-facing kinds).
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    /// Helper binary unresolved or installation root not found.
    /// Fatal for the calling operation; never retried.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    Configuration(String),

    /// The helper process could not run or produced undecodable output.
    #[error("[{}] {}", error_codes::TRANSPORT_FAILED, .0)]
    Transport(String),

    /// The helper ran and reported a domain-level failure (including
    /// permission-denied variants). Surfaced verbatim; never retried and
    /// never auto-remediated via the permission-prompt side channel.
    #[error("[{}] {}", error_codes::CLI_USER_ERROR, .0)]
    CliUser(String),

    /// Request arguments failed schema validation before reaching the helper.
    #[error("[{}] {}", error_codes::VALIDATION_FAILED, .0)]
    Validation(String),
}

impl BridgeError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => error_codes::CONFIG_INVALID,
            Self::Transport(_) => error_codes::TRANSPORT_FAILED,
            Self::CliUser(_) => error_codes::CLI_USER_ERROR,
            Self::Validation(_) => error_codes::VALIDATION_FAILED,
        }
    }

    /// Returns the inner message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(m) | Self::Transport(m) | Self::CliUser(m) | Self::Validation(m) => {
                m
            }
        }
    }

    /// Whether this error already carries a message written for the end
    /// user. User-facing errors are surfaced verbatim in every environment;
    /// all other kinds are downgraded to a generic message outside
    /// development mode.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::CliUser(_) | Self::Validation(_))
    }
}

/// Convenience alias for bridge results.
pub type Result<T> = std::result::Result<T, BridgeError>;
