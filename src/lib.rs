//! Datebook: macOS Reminders and Calendar operations as LLM agent tools.
//!
//! This crate is the protocol bridge between structured tool-call requests
//! and the native `eventkit-helper` binary that performs the actual EventKit
//! work:
//!
//! Tool call → validation → argument vector → helper subprocess →
//! JSON envelope → typed record → markdown result
//!
//! # Architecture
//!
//! - **helper** — secure binary resolution, subprocess invocation, the
//!   `{status, result|message}` wire contract, and single-point error
//!   classification
//! - **automation** — AppleScript side channels: the session-scoped
//!   permission prompt and reminder-list emblem utilities
//! - **repository** — typed request/record mapping over the helper bridge
//! - **tools** — argument validation, per-domain handlers, markdown
//!   rendering, and tool-call dispatch
//!
//! The helper itself is opaque: one flat argument vector in, one JSON
//! envelope out. Everything platform-coupled is substitutable in tests
//! through the [`helper::HelperBridge`] trait.

pub mod automation;
pub mod error;
pub mod helper;
pub mod repository;
pub mod tools;

pub use error::{BridgeError, Result};
pub use helper::{HelperBridge, HelperExecutor};
pub use tools::{ToolRegistry, ToolResponse};
