//! Per-domain tool handlers.
//!
//! Each handler validates its arguments, drives the matching repository
//! operation, and renders the outcome as markdown through
//! [`crate::tools::response::handle_async_operation`].

pub mod events;
pub mod lists;
pub mod reminders;
pub mod shared;
