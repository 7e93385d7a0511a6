// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host exclude-file registration.
//!
//! ```text
//! host  /work/host          instance /work/host/tools/tether  --> "tools/tether/"
//! host  /tmp/b              instance /tmp/a                   --> "a/"
//! host == instance                                            --> (none)
//!
//! <git common dir>/info/exclude
//!   # comments and blank lines ignored
//!   tools/tether/     \
//!   /tools/tether/     > all count as already registered
//!   ./tools/tether/   /
//! ```
//!
//! The exclude file is local to the clone and never committed, so the
//! instance checkout disappears from the host's `git status` without
//! touching its tracked `.gitignore`.

use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::error::{GitError, GixError, TetherResult};
use crate::utility::fs::append_line;
use crate::utility::path::{relative_path, to_slash};

/// Ignore pattern naming `instance_root` as seen from `host_root`.
///
/// Leading `..` segments are dropped: an instance checked out beside the
/// host is registered by its own directory name. Returns `None` when the
/// two roots coincide or share no root.
#[must_use]
pub fn ignore_pattern(host_root: &Path, instance_root: &Path) -> Option<String> {
    let relative = relative_path(host_root, instance_root)?;
    let inside: PathBuf = relative
        .components()
        .skip_while(|c| matches!(c, Component::ParentDir))
        .collect();
    let pattern = to_slash(&inside);
    if pattern.is_empty() {
        return None;
    }
    Some(format!("{}/", pattern.trim_end_matches('/')))
}

/// Whether `content` already carries `pattern` in any equivalent spelling.
#[must_use]
pub fn contains_pattern(content: &str, pattern: &str) -> bool {
    let bare = pattern.trim_matches('/');
    let forms = [format!("{bare}/"), format!("/{bare}/"), format!("./{bare}/")];
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .any(|line| forms.iter().any(|form| form == line))
}

/// Location of the host's exclude file.
///
/// Uses the repository's common directory so linked worktrees share the
/// main checkout's file.
///
/// # Errors
///
/// Returns `GitError::Gix` if the repository cannot be opened.
pub fn exclude_file(host_root: &Path) -> TetherResult<PathBuf> {
    let repo = gix::open(host_root).map_err(|e| GitError::Gix(GixError::Open(Box::new(e))))?;
    Ok(repo.common_dir().join("info").join("exclude"))
}

/// Append `pattern` to `file` unless it is already registered.
///
/// Returns `true` when a line was written.
///
/// # Errors
///
/// Returns `GitError::IgnoreUpdate` if the file cannot be read or appended to.
pub fn register_pattern(file: &Path, pattern: &str) -> TetherResult<bool> {
    let update_error = |e: std::io::Error| GitError::IgnoreUpdate {
        path: file.display().to_string(),
        message: e.to_string(),
    };

    let existing = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(update_error(e).into()),
    };

    if contains_pattern(&existing, pattern) {
        debug!(file = %file.display(), pattern, "pattern already registered");
        return Ok(false);
    }

    append_line(file, pattern).map_err(update_error)?;
    info!(file = %file.display(), pattern, "registered ignore pattern");
    Ok(true)
}

/// Register the instance checkout in the host's exclude file.
///
/// Returns the pattern when one was appended.
///
/// # Errors
///
/// Returns `GitError::IgnoreUpdate` or `GitError::Gix` on failure; callers
/// treat both as advisory.
pub fn register_instance(host_root: &Path, instance_root: &Path) -> TetherResult<Option<String>> {
    let Some(pattern) = ignore_pattern(host_root, instance_root) else {
        debug!("instance and host share a root, nothing to exclude");
        return Ok(None);
    };
    let file = exclude_file(host_root)?;
    let written = register_pattern(&file, &pattern)?;
    Ok(written.then_some(pattern))
}
