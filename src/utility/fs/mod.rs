// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers for config documents and the exclude file.
//!
//! ```text
//! write_atomic(path, bytes)  NamedTempFile in parent --> persist (rename)
//! append_line(path, line)    create if missing, newline-terminated append
//! ```

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace the contents of `path` with `contents`.
///
/// The data goes to a temporary file next to the target which is then
/// renamed over it, so readers see either the old or the new document.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an I/O error if the parent directory cannot be created or the
/// temporary file cannot be written or persisted.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Append `line` to `path`, creating the file (and its parents) if needed.
///
/// A newline is inserted first when the existing content does not end
/// with one.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, read or written.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    let mut existing = String::new();
    file.read_to_string(&mut existing)?;

    let mut entry = String::with_capacity(line.len() + 2);
    if !existing.is_empty() && !existing.ends_with('\n') {
        entry.push('\n');
    }
    entry.push_str(line);
    entry.push('\n');
    file.write_all(entry.as_bytes())
}
