// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository validation.
//!
//! ```text
//! path missing         --> RepoCheck::Missing        --> FsError::NotFound
//! path without .git    --> RepoCheck::NotARepository --> GitError::NotARepository
//! path/.git present    --> RepoCheck::Valid
//! ```
//!
//! `.git` may be a directory or, for linked worktrees and submodules, a
//! file. Repositories are never initialized here.

use std::path::Path;
use tracing::{debug, error};

use crate::error::{FsError, GitError, TetherResult};

/// Name of the git metadata marker.
pub const GIT_MARKER: &str = ".git";

/// Outcome of checking a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoCheck {
    Valid,
    Missing,
    NotARepository,
}

impl RepoCheck {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Operator-facing explanation, empty when valid.
    #[must_use]
    pub fn diagnostics(self, label: &str, path: &Path) -> Vec<String> {
        match self {
            Self::Valid => Vec::new(),
            Self::Missing => vec![
                format!("{label} does not exist: {}", path.display()),
                "Check the configured path.".to_string(),
            ],
            Self::NotARepository => vec![
                format!("{label} is not a git repository: {}", path.display()),
                format!(
                    "Run `git init` in {} yourself, or correct the configured path.",
                    path.display()
                ),
            ],
        }
    }
}

/// Inspect `path` without side effects.
#[must_use]
pub fn check_repository(path: &Path) -> RepoCheck {
    if !path.is_dir() {
        RepoCheck::Missing
    } else if path.join(GIT_MARKER).exists() {
        RepoCheck::Valid
    } else {
        RepoCheck::NotARepository
    }
}

/// Require `path` to be a git repository, logging diagnostics on failure.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory does not exist and
/// `GitError::NotARepository` if it has no `.git` marker.
pub fn require_repository(path: &Path, label: &str) -> TetherResult<()> {
    let check = check_repository(path);
    for line in check.diagnostics(label, path) {
        error!("{line}");
    }
    match check {
        RepoCheck::Valid => {
            debug!(path = %path.display(), label, "repository ok");
            Ok(())
        }
        RepoCheck::Missing => Err(FsError::NotFound {
            label: label.to_string(),
            path: path.display().to_string(),
        }
        .into()),
        RepoCheck::NotARepository => Err(GitError::NotARepository {
            label: label.to_string(),
            path: path.display().to_string(),
        }
        .into()),
    }
}
