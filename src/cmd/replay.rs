// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Replay of the stored push and init command lists.

use anyhow::Context;
use std::path::Path;

use super::command_runner;
use crate::config::Config;
use crate::config::documents::WorkingConfig;
use crate::config::store::load;
use crate::error::Result;
use crate::git::validate::require_repository;
use crate::mode::session::Session;

/// Run the working config's push commands in its repository root.
///
/// # Errors
///
/// Returns an error if the working config is missing, its root is not a git
/// repository, or a command fails.
pub fn run_push_command(config: &Config) -> Result<Vec<String>> {
    let paths = config.document_paths();
    let working: WorkingConfig =
        load(&paths.working).context("no working config, run attach or detach first")?;

    replay(config, &working.repo_root, &working.repo_push, "push")
}

/// Run the persistent config's init commands in the working repository root.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded, the root is not a git
/// repository, or a command fails.
pub fn run_init_command(config: &Config) -> Result<Vec<String>> {
    let session = Session::open(config.document_paths())
        .context("cannot load settings, run attach or detach first")?;
    let commands = session.persistent().settings().init_git_commands.clone();

    replay(config, session.repo_root(), &commands, "init")
}

fn replay(config: &Config, root: &Path, commands: &str, what: &str) -> Result<Vec<String>> {
    if commands.trim().is_empty() {
        println!("No {what} commands configured; use edit-settings to add some.");
        return Ok(Vec::new());
    }
    require_repository(root, "working repository")?;

    let done = command_runner(config)
        .run(root, commands)
        .with_context(|| format!("{what} commands failed in {}", root.display()))?;
    Ok(done)
}
