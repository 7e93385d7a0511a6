// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mode selection: attach the instance to its host, or detach it.
//!
//! ```text
//! detach                                  attach
//!   load instance_config.json               load instance_config.json
//!   validate instance root                  require hostRepoRoot
//!   instanceType = standalone               validate instance + host roots
//!   save instance_config.json               load <host>/repo_config.json
//!   working = project(instance, root)       instanceType = companion
//!   save working_config.json                save instance_config.json
//!                                           working = project(host, host root)
//!                                           save working_config.json
//!                                           register exclude pattern (advisory)
//! ```
//!
//! Any failure before the last write aborts; files written earlier stay
//! written.

pub mod session;


use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::DocumentPaths;
use crate::config::documents::{
    HostConfig, InstanceConfig, InstanceType, PersistentConfig, WorkingConfig,
};
use crate::config::store::{load, save};
use crate::error::{ConfigError, TetherResult};
use crate::git::exclude::register_instance;
use crate::git::validate::require_repository;
use crate::utility::path::{normalize, resolve_path};

pub const INSTANCE_LABEL: &str = "instance repository";
pub const HOST_LABEL: &str = "host repository";

/// Result of a successful attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachOutcome {
    pub working: WorkingConfig,
    pub instance_root: PathBuf,
    /// Pattern appended to the host exclude file, if any.
    pub registered_pattern: Option<String>,
}

/// Absolute, normalized instance root from the instance config.
#[must_use]
pub fn instance_root(instance: &InstanceConfig, paths: &DocumentPaths) -> PathBuf {
    normalize(&resolve_path(&instance.instance_repo_root, Some(&paths.base)))
}

/// Absolute, normalized host root from the instance config.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` if `hostRepoRoot` is not set.
pub fn host_root(instance: &InstanceConfig, paths: &DocumentPaths) -> TetherResult<PathBuf> {
    let root = instance
        .host_repo_root
        .as_deref()
        .ok_or_else(|| ConfigError::MissingKey {
            section: paths.instance.display().to_string(),
            key: "hostRepoRoot".to_string(),
        })?;
    Ok(normalize(&resolve_path(root, Some(&paths.base))))
}

/// Make the instance its own working target.
///
/// # Errors
///
/// Returns an error if the instance config cannot be loaded or saved, the
/// instance root is not a git repository, or the working config cannot be
/// written.
pub fn detach(paths: &DocumentPaths) -> TetherResult<WorkingConfig> {
    let mut instance: InstanceConfig = load(&paths.instance)?;
    let root = instance_root(&instance, paths);
    require_repository(&root, INSTANCE_LABEL)?;

    instance.instance_type = InstanceType::Standalone;
    save(&paths.instance, &instance)?;

    let working = WorkingConfig::project(&PersistentConfig::Instance(instance), &root);
    save(&paths.working, &working)?;

    info!(root = %root.display(), "detached: working on the instance repository");
    Ok(working)
}

/// Make the host repository the working target.
///
/// # Errors
///
/// Returns an error if either config cannot be loaded, `hostRepoRoot` is
/// missing, either root is not a git repository, or a config write fails.
/// Failing to update the host's exclude file is only logged.
pub fn attach(paths: &DocumentPaths) -> TetherResult<AttachOutcome> {
    let mut instance: InstanceConfig = load(&paths.instance)?;
    let instance_root = instance_root(&instance, paths);
    let host_root = host_root(&instance, paths)?;
    require_repository(&instance_root, INSTANCE_LABEL)?;
    require_repository(&host_root, HOST_LABEL)?;

    let host: HostConfig = load(&paths.host(&host_root))?;

    instance.instance_type = InstanceType::Companion;
    save(&paths.instance, &instance)?;

    let working = WorkingConfig::project(&PersistentConfig::Host(host), &host_root);
    save(&paths.working, &working)?;
    info!(root = %host_root.display(), "attached: working on the host repository");

    let registered_pattern = register_exclude(&host_root, &instance_root);

    Ok(AttachOutcome {
        working,
        instance_root,
        registered_pattern,
    })
}

fn register_exclude(host_root: &Path, instance_root: &Path) -> Option<String> {
    match register_instance(host_root, instance_root) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(error = %e, "could not register the instance in the host exclude file");
            None
        }
    }
}
