// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed load/save of JSON documents.
//!
//! ```text
//! load(path)       missing --> ConfigError::NotFound
//!                  io      --> ConfigError::ReadError
//!                  json    --> ConfigError::ParseError
//! save(path, doc)  pretty JSON + '\n', atomic overwrite
//!                  io      --> ConfigError::WriteError
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{ConfigError, TetherResult};
use crate::utility::fs::write_atomic;

/// Load and deserialize the JSON document at `path`.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file is absent, `ReadError` for
/// any other read failure and `ParseError` if the content is not valid
/// JSON for `T`.
pub fn load<T: DeserializeOwned>(path: &Path) -> TetherResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;
    trace!(path = %path.display(), bytes = content.len(), "read config");

    let document = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(document)
}

/// Serialize `document` and fully overwrite `path` with it.
///
/// # Errors
///
/// Returns `ConfigError::WriteError` if serialization or the write fails.
pub fn save<T: Serialize>(path: &Path, document: &T) -> TetherResult<()> {
    let write_error = |source: std::io::Error| ConfigError::WriteError {
        path: path.display().to_string(),
        source,
    };

    let mut content = serde_json::to_string_pretty(document)
        .map_err(|e| write_error(std::io::Error::other(e)))?;
    content.push('\n');

    write_atomic(path, content.as_bytes()).map_err(write_error)?;
    debug!(path = %path.display(), "wrote config");
    Ok(())
}
