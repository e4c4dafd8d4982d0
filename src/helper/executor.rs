//! Helper invocation orchestration: resolve, spawn, decode, classify.
//!
//! [`HelperExecutor::execute`] makes exactly one attempt per call: no
//! internal retry, no permission re-prompt, no second invocation. Earlier
//! designs retried after triggering the permission dialog; that was removed
//! because blocking the caller on a human interacting with a system dialog
//! produced inconsistent latency and duplicate prompts. The permission
//! prompt remains available as an explicit, independently callable operation
//! in [`crate::automation::prompt`].
//!
//! Classification happens here, once, at the transport boundary, so every
//! upstream consumer can distinguish "helper ran but reported a domain
//! error" from "helper could not run at all" without re-parsing text.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::automation::prompt::CapabilityDomain;
use crate::error::{BridgeError, Result};

use super::envelope::HelperEnvelope;
use super::invoke::run_helper;
use super::locate::{HELPER_BINARY_NAME, HelperLocation, HelperLocator};

/// Narrow contract the repository layer depends on.
///
/// Production uses [`HelperExecutor`]; tests substitute an in-process double
/// that implements the same contract.
#[async_trait]
pub trait HelperBridge: Send + Sync {
    /// Run one helper operation with a flat argument vector and return the
    /// success envelope's `result` payload verbatim.
    async fn execute(&self, args: &[String]) -> Result<serde_json::Value>;
}

/// Production executor backed by the on-disk helper binary.
pub struct HelperExecutor {
    /// Pre-resolved location, used by tests; `None` resolves per call.
    pinned: Option<HelperLocation>,
}

impl HelperExecutor {
    /// Executor that resolves the helper binary on every call.
    ///
    /// Resolution is idempotent and cheap (a handful of stat calls), and
    /// resolving per call means an installation repaired mid-session is
    /// picked up without a restart.
    pub fn new() -> Self {
        Self { pinned: None }
    }

    /// Executor pinned to a fixed, already-resolved location.
    pub fn with_location(location: HelperLocation) -> Self {
        Self {
            pinned: Some(location),
        }
    }

    fn location(&self) -> HelperLocation {
        match &self.pinned {
            Some(location) => location.clone(),
            None => HelperLocator::resolve(),
        }
    }

    fn resolve_binary(&self) -> Result<PathBuf> {
        let location = self.location();
        match location.path {
            Some(path) => Ok(path),
            None => Err(BridgeError::Configuration(match location.reason {
                Some(reason) => format!(
                    "{HELPER_BINARY_NAME} binary not found or validation failed: {reason}"
                ),
                None => format!("{HELPER_BINARY_NAME} binary not found or validation failed"),
            })),
        }
    }
}

impl Default for HelperExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HelperBridge for HelperExecutor {
    async fn execute(&self, args: &[String]) -> Result<serde_json::Value> {
        let binary = self.resolve_binary()?;

        let domain = permission_domain_for_args(args);
        tracing::debug!(
            binary = %binary.display(),
            %domain,
            "invoking eventkit helper"
        );

        let output = run_helper(&binary, args).await.map_err(|e| {
            BridgeError::Transport(format!(
                "{HELPER_BINARY_NAME} execution failed: {}",
                e.message()
            ))
        })?;

        if !output.success {
            // A failing helper still writes its structured error envelope to
            // stdout; surface that message verbatim when it parses.
            if let Ok(HelperEnvelope::Error { message }) = HelperEnvelope::parse(&output.stdout) {
                tracing::debug!(%domain, %message, "helper reported a user-facing error");
                return Err(BridgeError::CliUser(message));
            }
            let detail = if output.stderr.trim().is_empty() {
                output.status.clone()
            } else {
                output.stderr.trim().to_owned()
            };
            return Err(BridgeError::Transport(format!(
                "{HELPER_BINARY_NAME} execution failed: {detail}"
            )));
        }

        match HelperEnvelope::parse(&output.stdout) {
            Ok(HelperEnvelope::Success { result }) => Ok(result),
            Ok(HelperEnvelope::Error { message }) => Err(BridgeError::CliUser(message)),
            Err(reason) => Err(BridgeError::Transport(format!(
                "{HELPER_BINARY_NAME} execution failed: {reason}"
            ))),
        }
    }
}

/// Infer which capability domain an argument vector belongs to.
///
/// Inspects the value following the `--action` flag; actions touching
/// events or calendars belong to [`CapabilityDomain::Calendars`], everything
/// else (including a missing or value-less `--action`) defaults to
/// [`CapabilityDomain::Reminders`]. Diagnostic use only; classification
/// never depends on this.
pub fn permission_domain_for_args(args: &[String]) -> CapabilityDomain {
    let action = args
        .iter()
        .position(|a| a == "--action")
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
        .unwrap_or("");

    if action.contains("event") || action.contains("calendar") {
        CapabilityDomain::Calendars
    } else {
        CapabilityDomain::Reminders
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::automation::prompt::{has_been_prompted, reset_prompted_domains};
    use crate::error::error_codes;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    // ── permission_domain_for_args ────────────────────────────────────────

    #[test]
    fn reminder_actions_map_to_reminders() {
        assert_eq!(
            permission_domain_for_args(&args(&["--action", "read", "--id", "123"])),
            CapabilityDomain::Reminders
        );
        assert_eq!(
            permission_domain_for_args(&args(&["--action", "create", "--title", "x"])),
            CapabilityDomain::Reminders
        );
    }

    #[test]
    fn event_and_calendar_actions_map_to_calendars() {
        assert_eq!(
            permission_domain_for_args(&args(&["--action", "read-events"])),
            CapabilityDomain::Calendars
        );
        assert_eq!(
            permission_domain_for_args(&args(&["--title", "Test", "--action", "update-event"])),
            CapabilityDomain::Calendars
        );
        assert_eq!(
            permission_domain_for_args(&args(&["--action", "read-calendars"])),
            CapabilityDomain::Calendars
        );
    }

    #[test]
    fn missing_action_value_defaults_to_reminders() {
        assert_eq!(
            permission_domain_for_args(&args(&["--title", "Test", "--action"])),
            CapabilityDomain::Reminders
        );
        assert_eq!(
            permission_domain_for_args(&args(&["--title", "Test"])),
            CapabilityDomain::Reminders
        );
    }

    // ── execute, against stub helper scripts ──────────────────────────────

    /// Build an executor pinned to a stub helper script.
    #[cfg(unix)]
    fn stub_executor(script_body: &str) -> (tempfile::TempDir, HelperExecutor) {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HELPER_BINARY_NAME);
        std::fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        let executor = HelperExecutor::with_location(HelperLocation {
            path: Some(path),
            reason: None,
        });
        (dir, executor)
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn returns_result_payload_on_success_envelope() {
        let (_dir, executor) = stub_executor(
            r#"echo '{"status":"success","result":{"id":"123","title":"Test reminder"}}'"#,
        );
        let result = executor
            .execute(&args(&["--action", "read", "--id", "123"]))
            .await
            .unwrap();
        assert_eq!(result["id"], "123");
        assert_eq!(result["title"], "Test reminder");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn error_envelope_message_propagates_verbatim() {
        let (_dir, executor) = stub_executor(
            r#"echo '{"status":"error","message":"Failed to read reminder"}'; exit 1"#,
        );
        let err = executor
            .execute(&args(&["--action", "read", "--id", "123"]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), error_codes::CLI_USER_ERROR);
        assert_eq!(err.message(), "Failed to read reminder");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn error_envelope_on_success_exit_still_rejects() {
        let (_dir, executor) =
            stub_executor(r#"echo '{"status":"error","message":"Authorization denied."}'"#);
        let err = executor.execute(&args(&["--action", "read"])).await.unwrap_err();
        assert_eq!(err.code(), error_codes::CLI_USER_ERROR);
        assert_eq!(err.message(), "Authorization denied.");
    }

    #[tokio::test]
    async fn unresolved_binary_is_a_configuration_error() {
        let executor = HelperExecutor::with_location(HelperLocation {
            path: None,
            reason: Some("helper binary does not exist: /x/bin/eventkit-helper".to_owned()),
        });
        let err = executor.execute(&args(&["--action", "read"])).await.unwrap_err();
        assert_eq!(err.code(), error_codes::CONFIG_INVALID);
        assert!(
            err.message()
                .contains("eventkit-helper binary not found or validation failed")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn empty_stdout_on_success_exit_is_a_transport_error() {
        let (_dir, executor) = stub_executor("true");
        let err = executor
            .execute(&args(&["--action", "read", "--id", "123"]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), error_codes::TRANSPORT_FAILED);
        assert_eq!(
            err.message(),
            "eventkit-helper execution failed: Empty CLI output"
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn invalid_json_stdout_is_a_transport_error() {
        let (_dir, executor) = stub_executor("echo 'invalid json'");
        let err = executor
            .execute(&args(&["--action", "read", "--id", "123"]))
            .await
            .unwrap_err();
        assert_eq!(err.code(), error_codes::TRANSPORT_FAILED);
        assert!(err.message().contains("eventkit-helper execution failed"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_with_unparseable_stdout_wraps_stderr() {
        let (_dir, executor) = stub_executor("echo 'boom' >&2; exit 2");
        let err = executor.execute(&args(&["--action", "read"])).await.unwrap_err();
        assert_eq!(err.code(), error_codes::TRANSPORT_FAILED);
        assert!(err.message().contains("boom"), "message: {}", err.message());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn permission_denial_messages_are_byte_for_byte() {
        for message in [
            "Reminder permission denied or restricted.",
            "Calendar permission denied or restricted.",
            "Reminder permission denied.",
            "Calendar permission denied.",
        ] {
            let (_dir, executor) = stub_executor(&format!(
                r#"echo '{{"status":"error","message":"{message}"}}'; exit 1"#
            ));
            let err = executor.execute(&args(&["--action", "read"])).await.unwrap_err();
            assert_eq!(err.message(), message);
        }
    }

    /// Regression guard for the removed auto-retry behavior: no executor
    /// failure path may touch the permission-prompt side channel, even when
    /// `--action` sits at the end of the vector or is missing its value.
    #[cfg(unix)]
    #[tokio::test]
    async fn failures_never_trigger_the_permission_prompt() {
        let _guard = crate::automation::prompt::prompt_test_lock();
        reset_prompted_domains();

        let (_dir, executor) =
            stub_executor(r#"echo '{"status":"error","message":"Permission denied."}'; exit 1"#);

        let cases = [
            args(&["--action", "read"]),
            args(&["--title", "Test", "--action", "update-event"]),
            args(&["--title", "Test", "--action"]),
        ];
        for case in &cases {
            let err = executor.execute(case).await.unwrap_err();
            assert_eq!(err.message(), "Permission denied.");
        }

        assert!(!has_been_prompted(CapabilityDomain::Reminders));
        assert!(!has_been_prompted(CapabilityDomain::Calendars));
    }
}
