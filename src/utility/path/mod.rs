// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lexical path resolution.
//!
//! ```text
//! resolve_path("../host", Some("/work/tool"))  --> /work/host
//! resolve_path("/abs/path", _)                 --> /abs/path (unchanged)
//! relative_path("/work/host", "/work/host/tools/tether") --> tools/tether
//! relative_path("/work/host", "/work/other")             --> ../other
//! ```
//!
//! Nothing here touches the filesystem except [`default_base`].

use std::path::{Component, Path, PathBuf};

/// Base directory used when the caller does not provide one.
///
/// The invocation directory, falling back to the directory holding the
/// executable, falling back to `.`.
#[must_use]
pub fn default_base() -> PathBuf {
    std::env::current_dir()
        .ok()
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve `path` against `base` into an absolute, normalized path.
///
/// Absolute input is returned unchanged.
#[must_use]
pub fn resolve_path(path: &Path, base: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let base = base.map_or_else(default_base, Path::to_path_buf);
    normalize(&base.join(path))
}

/// Remove `.` and `..` segments without consulting the filesystem.
///
/// `..` never climbs above the root; on a relative path, leading `..`
/// segments that cannot be cancelled are kept.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Relative path leading from directory `from` to `to`.
///
/// Both paths are normalized first. Returns an empty path when they are the
/// same directory and `None` when they do not share a root (different
/// drives, or one of them is relative).
#[must_use]
pub fn relative_path(from: &Path, to: &Path) -> Option<PathBuf> {
    if !from.is_absolute() || !to.is_absolute() {
        return None;
    }
    let from = normalize(from);
    let to = normalize(to);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    // Must at least share the root (and the prefix on Windows)
    let anchored = to_parts
        .iter()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .count();
    if common < anchored {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..from_parts.len() {
        relative.push("..");
    }
    for part in &to_parts[common..] {
        relative.push(part.as_os_str());
    }
    Some(relative)
}

/// Render a path with forward slashes regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
