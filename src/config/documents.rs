// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON documents owned by the instance and the host repository.
//!
//! ```text
//! instance_config.json  InstanceConfig  {instanceType, instanceRepoRoot, hostRepoRoot?, ...}
//! <host>/repo_config.json HostConfig    {repoType, repoPush, repoSettings}
//! working_config.json   WorkingConfig   {repoType, repoPush, repoRoot}   (derived)
//!
//! instanceType = standalone --> PersistentConfig::Instance
//! instanceType = companion  --> PersistentConfig::Host
//! ```
//!
//! Keys the tool does not know about are kept in `extra` and written back
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Whether the instance runs on its own or attached to a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    #[default]
    Standalone,
    Companion,
}

impl std::fmt::Display for InstanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Companion => write!(f, "companion"),
        }
    }
}

/// Kind of repository being managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    #[default]
    Regular,
    Notebooks,
}

impl RepoType {
    pub const ALL: [Self; 2] = [Self::Regular, Self::Notebooks];
}

impl std::fmt::Display for RepoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Notebooks => write!(f, "notebooks"),
        }
    }
}

impl std::str::FromStr for RepoType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "notebooks" => Ok(Self::Notebooks),
            _ => Err(ConfigError::InvalidValue {
                section: "repoSettings".to_string(),
                key: "repoType".to_string(),
                message: format!("expected 'regular' or 'notebooks', got '{s}'"),
            }),
        }
    }
}

/// Notebook sync locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotebookPaths {
    /// Absolute directory notebooks are copied from.
    pub source_path: String,
    /// Absolute, or relative to the working repository root.
    pub destination_path: String,
}

/// Editable workflow settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepoSettings {
    pub repo_type: RepoType,
    /// Semicolon-delimited git subcommands run by `push`.
    pub repo_push_commands: String,
    /// Semicolon-delimited git subcommands run by `init`.
    pub init_git_commands: String,
    pub notebooks: NotebookPaths,
}

/// The instance's own configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfig {
    #[serde(default)]
    pub instance_type: InstanceType,
    pub instance_repo_root: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_repo_root: Option<PathBuf>,
    #[serde(default)]
    pub repo_type: RepoType,
    #[serde(default)]
    pub repo_push: String,
    #[serde(default)]
    pub repo_settings: RepoSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InstanceConfig {
    /// Minimal standalone configuration rooted at `instance_repo_root`.
    #[must_use]
    pub fn new(instance_repo_root: impl Into<PathBuf>) -> Self {
        Self {
            instance_type: InstanceType::Standalone,
            instance_repo_root: instance_repo_root.into(),
            host_repo_root: None,
            repo_type: RepoType::default(),
            repo_push: String::new(),
            repo_settings: RepoSettings::default(),
            extra: Map::new(),
        }
    }
}

/// Configuration owned by the host repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    pub repo_type: RepoType,
    pub repo_push: String,
    #[serde(default)]
    pub repo_settings: RepoSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Derived description of the active repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingConfig {
    pub repo_type: RepoType,
    pub repo_push: String,
    pub repo_root: PathBuf,
}

impl WorkingConfig {
    /// Project the persistent settings onto the active repository root.
    #[must_use]
    pub fn project(persistent: &PersistentConfig, repo_root: &Path) -> Self {
        Self {
            repo_type: persistent.repo_type(),
            repo_push: persistent.repo_push().to_string(),
            repo_root: repo_root.to_path_buf(),
        }
    }
}

/// Which document owns durable settings, decided once from `instanceType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Standalone: the instance config file.
    Instance,
    /// Companion: the host config inside `root`.
    Host { root: PathBuf },
}

/// The authoritative settings document.
///
/// Serializes as the inner document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PersistentConfig {
    Instance(InstanceConfig),
    Host(HostConfig),
}

impl PersistentConfig {
    #[must_use]
    pub const fn repo_type(&self) -> RepoType {
        match self {
            Self::Instance(c) => c.repo_type,
            Self::Host(c) => c.repo_type,
        }
    }

    #[must_use]
    pub fn repo_push(&self) -> &str {
        match self {
            Self::Instance(c) => &c.repo_push,
            Self::Host(c) => &c.repo_push,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &RepoSettings {
        match self {
            Self::Instance(c) => &c.repo_settings,
            Self::Host(c) => &c.repo_settings,
        }
    }

    /// Set the repository type at the top level and in `repoSettings`.
    pub fn set_repo_type(&mut self, repo_type: RepoType) {
        let (top, settings) = self.parts_mut();
        *top.0 = repo_type;
        settings.repo_type = repo_type;
    }

    /// Set the push commands at the top level and in `repoSettings`.
    pub fn set_push_commands(&mut self, commands: &str) {
        let (top, settings) = self.parts_mut();
        commands.clone_into(top.1);
        commands.clone_into(&mut settings.repo_push_commands);
    }

    pub fn set_init_commands(&mut self, commands: &str) {
        let (_, settings) = self.parts_mut();
        commands.clone_into(&mut settings.init_git_commands);
    }

    pub fn set_notebooks(&mut self, notebooks: NotebookPaths) {
        let (_, settings) = self.parts_mut();
        settings.notebooks = notebooks;
    }

    fn parts_mut(&mut self) -> ((&mut RepoType, &mut String), &mut RepoSettings) {
        match self {
            Self::Instance(c) => (
                (&mut c.repo_type, &mut c.repo_push),
                &mut c.repo_settings,
            ),
            Self::Host(c) => (
                (&mut c.repo_type, &mut c.repo_push),
                &mut c.repo_settings,
            ),
        }
    }
}
