// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered loading of the tool config.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("tether.toml")   Layer::Optional (only if present)
//!   .add_toml_file(--config FILE)...         Layer::Required
//!   .set("global.dry", true)                 Layer::Override
//!        |
//!        v
//!    build() --> Config       later layers win, unknown keys rejected
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::{File, FileFormat};

use super::Config;
use crate::error::Result;

/// Where one layer of the tool config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// `--config FILE`; `build` fails if it is missing.
    Required,
    /// `tether.toml` in the current directory, skipped when absent.
    Optional,
    /// TOML text handed over directly.
    Inline,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Required => "file",
            Self::Optional => "optional",
            Self::Inline => "string",
        })
    }
}

/// Accumulates config layers; the last layer to set a key wins.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    layers: Vec<(Layer, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            layers: Vec::new(),
        }
    }

    /// Layer a TOML file that must exist, such as a `--config` argument.
    ///
    /// Nothing is read until [`build`](Self::build).
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), Layer::Required)
    }

    /// Layer a TOML file that may be absent, such as `./tether.toml`.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), Layer::Optional)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.layers.push((Layer::Inline, PathBuf::from("<string>")));
        self
    }

    fn add_file(mut self, path: &Path, layer: Layer) -> Self {
        let required = layer == Layer::Required;
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.layers.push((layer, path.to_path_buf()));
        }
        self
    }

    /// Override one dotted key, e.g. `global.output_log_level`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed as a config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Merge every layer into a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, or the merged values do not fit `Config` (unknown keys included).
    pub fn build(self) -> Result<Config> {
        Ok(self.builder.build()?.try_deserialize()?)
    }

    /// Layers that contribute to the config, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> &[(Layer, PathBuf)] {
        &self.layers
    }

    /// One numbered line per layer for the debug log.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, (layer, path))| format!("{}. [{layer}] {}", i + 1, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
