// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The persistent settings of the active mode, plus its working projection.
//!
//! ```text
//! Session::open(paths)
//!   instanceType = standalone --> ConfigSource::Instance       root = instanceRepoRoot
//!   instanceType = companion  --> ConfigSource::Host { root }  root = hostRepoRoot
//!
//! Session::commit(candidate)
//!   1. save candidate        --> instance_config.json | <host>/repo_config.json
//!   2. save project(candidate, root) --> working_config.json
//!   3. adopt candidate in memory (only after both writes)
//! ```
//!
//! The working config is never edited directly: every change goes through
//! `commit`, which recomputes it from the persistent document.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{host_root, instance_root};
use crate::config::DocumentPaths;
use crate::config::documents::{
    ConfigSource, HostConfig, InstanceConfig, InstanceType, PersistentConfig, WorkingConfig,
};
use crate::config::store::{load, save};
use crate::error::TetherResult;

/// Editable state of the active mode.
#[derive(Debug, Clone)]
pub struct Session {
    paths: DocumentPaths,
    source: ConfigSource,
    persistent: PersistentConfig,
    repo_root: PathBuf,
}

impl Session {
    /// Load the documents selected by the instance's `instanceType`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance config (or, when attached, the host
    /// config) cannot be loaded, or `hostRepoRoot` is missing in companion
    /// mode.
    pub fn open(paths: DocumentPaths) -> TetherResult<Self> {
        let instance: InstanceConfig = load(&paths.instance)?;
        let session = match instance.instance_type {
            InstanceType::Standalone => {
                let repo_root = instance_root(&instance, &paths);
                Self {
                    source: ConfigSource::Instance,
                    persistent: PersistentConfig::Instance(instance),
                    repo_root,
                    paths,
                }
            }
            InstanceType::Companion => {
                let root = host_root(&instance, &paths)?;
                let host: HostConfig = load(&paths.host(&root))?;
                Self {
                    source: ConfigSource::Host { root: root.clone() },
                    persistent: PersistentConfig::Host(host),
                    repo_root: root,
                    paths,
                }
            }
        };
        debug!(source = ?session.source, root = %session.repo_root.display(), "session opened");
        Ok(session)
    }

    #[must_use]
    pub const fn source(&self) -> &ConfigSource {
        &self.source
    }

    #[must_use]
    pub const fn persistent(&self) -> &PersistentConfig {
        &self.persistent
    }

    /// Absolute root of the active repository.
    #[must_use]
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// File holding the persistent document.
    #[must_use]
    pub fn persistent_path(&self) -> PathBuf {
        match &self.source {
            ConfigSource::Instance => self.paths.instance.clone(),
            ConfigSource::Host { root } => self.paths.host(root),
        }
    }

    /// Current working projection.
    #[must_use]
    pub fn working(&self) -> WorkingConfig {
        WorkingConfig::project(&self.persistent, &self.repo_root)
    }

    /// Write `candidate` and its working projection, then adopt it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteError` from whichever write failed. The
    /// in-memory session is unchanged in that case; a persistent document
    /// already written stays on disk.
    pub fn commit(&mut self, candidate: PersistentConfig) -> TetherResult<()> {
        let persistent_path = self.persistent_path();
        save(&persistent_path, &candidate)?;

        let working = WorkingConfig::project(&candidate, &self.repo_root);
        save(&self.paths.working, &working)?;

        info!(
            persistent = %persistent_path.display(),
            working = %self.paths.working.display(),
            "settings saved"
        );
        self.persistent = candidate;
        Ok(())
    }

    /// Apply `change` to a copy of the persistent document and commit it.
    ///
    /// # Errors
    ///
    /// See [`Session::commit`].
    pub fn update(&mut self, change: impl FnOnce(&mut PersistentConfig)) -> TetherResult<()> {
        let mut candidate = self.persistent.clone();
        change(&mut candidate);
        self.commit(candidate)
    }
}
