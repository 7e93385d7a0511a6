// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for tether.
//!
//! Two kinds of configuration live here:
//!
//! ```text
//! tool config (TOML, config crate)      workflow documents (JSON, store.rs)
//!   Priority (low -> high)                instance_config.json
//!   1. defaults                           working_config.json
//!   2. tether.toml (cwd, optional)        <host root>/repo_config.json
//!   3. --config FILE (repeatable)
//!   4. CLI overrides
//! ```
//!
//! # Example `tether.toml`
//!
//! ```toml
//! [global]
//! output_log_level = 4
//!
//! [files]
//! host = "tools/repo_config.json"
//!
//! [git]
//! program = "/usr/local/bin/git"
//! ```

pub mod documents;
pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utility::path::{default_base, resolve_path};

use loader::ConfigLoader;
use types::{FilesConfig, GitConfig, GlobalConfig};

/// Complete tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Document file names.
    pub files: FilesConfig,
    /// Git invocation.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Directory relative document paths resolve against.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        let base = default_base();
        match &self.global.base_dir {
            Some(dir) => resolve_path(dir, Some(&base)),
            None => base,
        }
    }

    /// Absolute locations of the workflow documents.
    #[must_use]
    pub fn document_paths(&self) -> DocumentPaths {
        DocumentPaths::new(&self.base_dir(), &self.files)
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry", self.global.dry.to_string());
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file", log_file.display().to_string());
        }
        options.insert("global.base_dir", self.base_dir().display().to_string());
        options.insert("files.instance", self.files.instance.display().to_string());
        options.insert("files.working", self.files.working.display().to_string());
        options.insert("files.host", self.files.host.display().to_string());
        options.insert("git.program", self.git.program.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

/// Resolved document locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// Base directory the instance and working paths were resolved against.
    pub base: PathBuf,
    pub instance: PathBuf,
    pub working: PathBuf,
    /// Host config name, joined onto the host root on demand.
    pub host_file: PathBuf,
}

impl DocumentPaths {
    #[must_use]
    pub fn new(base: &Path, files: &FilesConfig) -> Self {
        Self {
            base: base.to_path_buf(),
            instance: resolve_path(&files.instance, Some(base)),
            working: resolve_path(&files.working, Some(base)),
            host_file: files.host.clone(),
        }
    }

    /// Host config location for a host repository root.
    #[must_use]
    pub fn host(&self, host_root: &Path) -> PathBuf {
        resolve_path(&self.host_file, Some(host_root))
    }
}
