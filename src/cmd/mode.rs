// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Attach, detach and status commands.

use anyhow::Context;

use crate::config::documents::{InstanceConfig, InstanceType, WorkingConfig};
use crate::config::store::load;
use crate::config::{Config, DocumentPaths};
use crate::error::{ConfigError, Result};
use crate::git::validate::check_repository;
use crate::mode::{self, HOST_LABEL, INSTANCE_LABEL, host_root, instance_root};

/// Make the host repository the working target.
///
/// # Errors
///
/// Returns an error if the configs cannot be loaded or written, or either
/// root is not a git repository.
pub fn run_attach_command(config: &Config) -> Result<()> {
    let paths = config.document_paths();
    let outcome = mode::attach(&paths).context("attach failed")?;

    println!(
        "Attached: working on {} ({}).",
        outcome.working.repo_root.display(),
        outcome.working.repo_type
    );
    if let Some(pattern) = outcome.registered_pattern {
        println!("Added '{pattern}' to the host repository's local excludes.");
    }
    Ok(())
}

/// Make the instance repository the working target.
///
/// # Errors
///
/// Returns an error if the instance config cannot be loaded or written, or
/// the instance root is not a git repository.
pub fn run_detach_command(config: &Config) -> Result<()> {
    let paths = config.document_paths();
    let working = mode::detach(&paths).context("detach failed")?;

    println!(
        "Detached: working on {} ({}).",
        working.repo_root.display(),
        working.repo_type
    );
    Ok(())
}

/// Print the active mode and working target.
///
/// # Errors
///
/// Returns an error if the instance config cannot be loaded.
pub fn run_status_command(config: &Config) -> Result<()> {
    for line in status_lines(&config.document_paths())? {
        println!("{line}");
    }
    Ok(())
}

/// Status report, one line per fact.
///
/// # Errors
///
/// Returns an error if the instance config cannot be loaded or the working
/// config exists but cannot be parsed.
pub fn status_lines(paths: &DocumentPaths) -> Result<Vec<String>> {
    let instance: InstanceConfig =
        load(&paths.instance).context("cannot read the instance config")?;

    let mode = match instance.instance_type {
        InstanceType::Standalone => "detached (standalone)",
        InstanceType::Companion => "attached (companion)",
    };
    let mut lines = vec![format!("mode     : {mode}")];

    let root = instance_root(&instance, paths);
    lines.push(format!(
        "instance : {} [{}]",
        root.display(),
        describe(check_repository(&root).is_valid(), INSTANCE_LABEL)
    ));

    match host_root(&instance, paths) {
        Ok(host) => lines.push(format!(
            "host     : {} [{}]",
            host.display(),
            describe(check_repository(&host).is_valid(), HOST_LABEL)
        )),
        Err(_) => lines.push("host     : (not configured)".to_string()),
    }

    match load::<WorkingConfig>(&paths.working) {
        Ok(working) => {
            lines.push(format!("working  : {}", working.repo_root.display()));
            lines.push(format!("type     : {}", working.repo_type));
            lines.push(format!("push     : {}", working.repo_push));
        }
        Err(e) if matches!(e.as_config(), Some(ConfigError::NotFound { .. })) => {
            lines.push("working  : (none yet, run attach or detach)".to_string());
        }
        Err(e) => return Err(e).context("cannot read the working config"),
    }

    Ok(lines)
}

fn describe(valid: bool, label: &str) -> String {
    if valid {
        "ok".to_string()
    } else {
        format!("not a valid {label}")
    }
}
