//! Secure on-disk resolution of the `eventkit-helper` binary.
//!
//! The helper ships inside the installation tree (`<root>/bin/`), where the
//! installation root is the nearest ancestor of the running executable that
//! contains the package manifest. An environment override can point at an
//! alternate build, but it passes the identical validation rules: the
//! override is a convenience, not a bypass.
//!
//! Resolution never fails with an error: every rejected candidate produces a
//! [`HelperLocation`] with `path: None` and a human-readable reason, and the
//! caller decides how fatal that is.

use std::path::{Path, PathBuf};

/// File name of the native helper binary.
pub const HELPER_BINARY_NAME: &str = "eventkit-helper";

/// Environment variable that supplies an alternate helper binary path.
pub const HELPER_PATH_ENV: &str = "DATEBOOK_EVENTKIT_HELPER";

/// Manifest file that marks the installation root.
const MANIFEST_FILE: &str = "Cargo.toml";

/// Maximum number of parent directories to walk when looking for the
/// installation root.
const MANIFEST_SEARCH_DEPTH: usize = 8;

/// Outcome of helper binary resolution.
///
/// `path` is `Some` only when a candidate passed every validation rule;
/// otherwise `reason` explains the rejection.
#[derive(Debug, Clone)]
pub struct HelperLocation {
    /// Validated absolute path to the helper binary, if any.
    pub path: Option<PathBuf>,
    /// Human-readable rejection reason when `path` is `None`.
    pub reason: Option<String>,
}

impl HelperLocation {
    fn found(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            reason: None,
        }
    }

    fn rejected(reason: String) -> Self {
        Self {
            path: None,
            reason: Some(reason),
        }
    }
}

/// Helper binary discovery and validation.
///
/// Stateless; all methods are associated functions. [`HelperLocator::resolve`]
/// is deterministic for a fixed installation and environment, idempotent, and
/// performs no filesystem mutation.
pub struct HelperLocator;

impl HelperLocator {
    /// Resolve the helper binary for the current installation.
    ///
    /// Prefers the [`HELPER_PATH_ENV`] override when present; both the
    /// override and the default `<root>/bin/eventkit-helper` candidate are
    /// subject to the same rules: the path must exist, be a regular file, be
    /// executable, and its symlink-resolved real path must not escape its
    /// trusted directory.
    pub fn resolve() -> HelperLocation {
        let root = match Self::installation_root() {
            Ok(root) => root,
            Err(reason) => return HelperLocation::rejected(reason),
        };

        if let Ok(override_path) = std::env::var(HELPER_PATH_ENV) {
            return Self::resolve_in(&root, Some(Path::new(&override_path)));
        }
        Self::resolve_in(&root, None)
    }

    /// Resolution against an explicit root and optional override path.
    ///
    /// Split out from [`HelperLocator::resolve`] so tests can exercise the
    /// rule set against temp directories without touching process state.
    pub fn resolve_in(root: &Path, override_path: Option<&Path>) -> HelperLocation {
        if let Some(candidate) = override_path {
            // The override's stated parent directory is explicitly trusted,
            // but the symlink-resolved target must not escape it or the
            // installation root.
            return match Self::validate(candidate, root, true) {
                Ok(path) => HelperLocation::found(path),
                Err(reason) => {
                    tracing::warn!(
                        candidate = %candidate.display(),
                        reason = %reason,
                        "helper override rejected"
                    );
                    HelperLocation::rejected(reason)
                }
            };
        }

        let default = root.join("bin").join(HELPER_BINARY_NAME);
        match Self::validate(&default, root, false) {
            Ok(path) => HelperLocation::found(path),
            Err(reason) => HelperLocation::rejected(reason),
        }
    }

    /// Locate the installation root by walking upward from the running
    /// executable until the package manifest is found.
    pub fn installation_root() -> Result<PathBuf, String> {
        let exe = std::env::current_exe()
            .map_err(|e| format!("cannot determine running executable path: {e}"))?;
        let start = exe
            .parent()
            .ok_or_else(|| format!("executable path {} has no parent", exe.display()))?;
        Self::find_manifest_root(start)
    }

    /// Bounded upward walk for the directory containing [`MANIFEST_FILE`].
    pub fn find_manifest_root(start: &Path) -> Result<PathBuf, String> {
        let mut dir = start;
        for _ in 0..MANIFEST_SEARCH_DEPTH {
            if dir.join(MANIFEST_FILE).is_file() {
                return Ok(dir.to_path_buf());
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        Err(format!(
            "no {MANIFEST_FILE} found within {MANIFEST_SEARCH_DEPTH} levels above {}",
            start.display()
        ))
    }

    /// Apply the full validation rule set to one candidate path.
    ///
    /// Returns the candidate (as given, not canonicalized; the canonical
    /// form is only used for the containment check) or a rejection reason.
    fn validate(candidate: &Path, root: &Path, trusted_override: bool) -> Result<PathBuf, String> {
        let metadata = std::fs::symlink_metadata(candidate).map_err(|_| {
            format!("helper binary does not exist: {}", candidate.display())
        })?;

        // Follow the link chain for the file-type and containment checks.
        let target = std::fs::metadata(candidate).map_err(|e| {
            format!(
                "helper binary at {} is a broken link: {e}",
                candidate.display()
            )
        })?;

        if !target.is_file() {
            return Err(format!(
                "helper path is not a regular file: {}",
                candidate.display()
            ));
        }
        // Reject anything odd at the candidate itself (directories, sockets).
        if !metadata.is_file() && !metadata.file_type().is_symlink() {
            return Err(format!(
                "helper path is not a regular file: {}",
                candidate.display()
            ));
        }

        if !is_executable(&target) {
            return Err(format!(
                "helper binary is not executable: {}",
                candidate.display()
            ));
        }

        let real = std::fs::canonicalize(candidate).map_err(|e| {
            format!(
                "cannot canonicalize helper path {}: {e}",
                candidate.display()
            )
        })?;

        let trusted_dirs = Self::trusted_dirs(candidate, root, trusted_override);
        let contained = trusted_dirs.iter().any(|dir| real.starts_with(dir));
        if !contained {
            return Err(format!(
                "helper binary resolves outside the installation root: {}",
                real.display()
            ));
        }

        Ok(candidate.to_path_buf())
    }

    /// Directories a candidate's real path may resolve into.
    fn trusted_dirs(candidate: &Path, root: &Path, trusted_override: bool) -> Vec<PathBuf> {
        let mut dirs = Vec::with_capacity(2);
        if let Ok(canonical_root) = std::fs::canonicalize(root) {
            dirs.push(canonical_root);
        }
        if trusted_override {
            // The directory explicitly named by the operator is trusted;
            // a symlink may not escape it.
            if let Some(parent) = candidate.parent() {
                if let Ok(canonical_parent) = std::fs::canonicalize(parent) {
                    dirs.push(canonical_parent);
                }
            }
        }
        dirs
    }
}

/// Executable-bit check.
#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    true
}
