// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive settings editor command.

use anyhow::Context;
use tracing::info;

use super::command_runner;
use crate::config::Config;
use crate::editor::SettingsEditor;
use crate::editor::prompt::{Prompter, TerminalPrompter};
use crate::error::Result;
use crate::mode::session::Session;

/// Edit settings on the terminal.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or a prompt fails.
pub fn run_edit_settings_command(config: &Config) -> Result<()> {
    run_editor(config, TerminalPrompter)
}

/// Edit settings with answers from `prompter`.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or a prompt fails.
pub fn run_editor<P: Prompter>(config: &Config, prompter: P) -> Result<()> {
    let session = Session::open(config.document_paths())
        .context("cannot load settings, run attach or detach first")?;
    info!(file = %session.persistent_path().display(), "editing settings");

    let mut editor = SettingsEditor::new(session, prompter, command_runner(config));
    editor.run().context("settings editor aborted")?;
    Ok(())
}
