//! Bridge to the `eventkit-helper` native binary.
//!
//! The helper performs the actual EventKit operations; this crate treats it
//! as an opaque capability behind a narrow request/response contract:
//!
//! - [`locate`] — secure on-disk resolution of the helper binary
//! - [`invoke`] — low-level subprocess spawn/capture primitive
//! - [`envelope`] — the `{status, result|message}` wire contract
//! - [`executor`] — orchestration: resolve, spawn, decode, classify
//!
//! All platform coupling lives here. Repositories depend only on the
//! [`HelperBridge`] trait, which test code implements in-process.

pub mod envelope;
pub mod executor;
pub mod invoke;
pub mod locate;

pub use envelope::HelperEnvelope;
pub use executor::{HelperBridge, HelperExecutor, permission_domain_for_args};
pub use invoke::{RawOutput, run_helper, run_osascript};
pub use locate::{HELPER_BINARY_NAME, HelperLocation, HelperLocator};
