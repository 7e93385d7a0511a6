// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive settings editor.
//!
//! # State Machine
//!
//! ```text
//!             +------------------------------------------+
//!             v                                          |
//!   +------> Menu ----> RepoType ------(notebooks?)---+  |
//!   |         |  \                                    v  |
//!   |         |   +---> PushCommands ------------> (Menu)|
//!   |         |   +---> NotebookPaths <---------------+  |
//!   |         |   +---> InitCommands --(run now?)--> runner
//!   |         v
//!   |       Quit
//!   |
//!   +-- every edit: prompt -> validate -> Session::commit -> confirm
//!       blank answer: back to Menu, nothing written
//! ```
//!
//! Rejected input and failed writes are reported and lead back to the menu.
//! Only prompt failures end the editor with an error.

pub mod prompt;

#[cfg(test)]
mod tests;

use std::path::Path;
use tracing::{error, info, warn};

use crate::config::documents::{NotebookPaths, PersistentConfig, RepoType};
use crate::error::{ConfigError, FsError, TetherError, TetherResult};
use crate::git::runner::CommandRunner;
use crate::mode::session::Session;
use crate::utility::path::{normalize, resolve_path};

use prompt::Prompter;

/// Editor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Menu,
    RepoType,
    PushCommands,
    NotebookPaths,
    InitCommands,
    Quit,
}

impl EditorState {
    /// Menu entries, in display order.
    pub const MENU: [(&'static str, Self); 5] = [
        ("Repository type", Self::RepoType),
        ("Push commands", Self::PushCommands),
        ("Notebook paths", Self::NotebookPaths),
        ("Init commands", Self::InitCommands),
        ("Quit", Self::Quit),
    ];
}

/// Drives a [`Session`] through operator prompts.
pub struct SettingsEditor<P: Prompter> {
    session: Session,
    prompter: P,
    runner: CommandRunner,
}

impl<P: Prompter> SettingsEditor<P> {
    #[must_use]
    pub const fn new(session: Session, prompter: P, runner: CommandRunner) -> Self {
        Self {
            session,
            prompter,
            runner,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Run until the operator quits.
    ///
    /// # Errors
    ///
    /// Returns an error only if a prompt fails.
    pub fn run(&mut self) -> TetherResult<()> {
        let mut state = EditorState::Menu;
        while state != EditorState::Quit {
            state = self.step(state)?;
        }
        info!("settings editor closed");
        Ok(())
    }

    /// Handle one state and return the next.
    ///
    /// # Errors
    ///
    /// Returns an error only if a prompt fails.
    pub fn step(&mut self, state: EditorState) -> TetherResult<EditorState> {
        match state {
            EditorState::Menu => self.menu(),
            EditorState::RepoType => self.edit_repo_type(),
            EditorState::PushCommands => self.edit_push_commands(),
            EditorState::NotebookPaths => self.edit_notebook_paths(),
            EditorState::InitCommands => self.edit_init_commands(),
            EditorState::Quit => Ok(EditorState::Quit),
        }
    }

    /// Current settings, one `key: value` per line.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let config = self.session.persistent();
        let settings = config.settings();
        vec![
            format!("settings file : {}", self.session.persistent_path().display()),
            format!("repo root     : {}", self.session.repo_root().display()),
            format!("repo type     : {}", config.repo_type()),
            format!("push commands : {}", config.repo_push()),
            format!("init commands : {}", settings.init_git_commands),
            format!("notebook src  : {}", settings.notebooks.source_path),
            format!("notebook dest : {}", settings.notebooks.destination_path),
        ]
    }

    fn menu(&mut self) -> TetherResult<EditorState> {
        println!();
        for line in self.summary() {
            println!("  {line}");
        }
        let labels = EditorState::MENU.map(|(label, _)| label);
        let index = self
            .prompter
            .select("What do you want to change?", &labels, 0)?;
        Ok(EditorState::MENU[index].1)
    }

    fn edit_repo_type(&mut self) -> TetherResult<EditorState> {
        let current = self.session.persistent().repo_type().to_string();
        let answer = self
            .prompter
            .input("Repository type (regular/notebooks)", &current)?;
        if is_blank(&answer) {
            return Ok(unchanged("repository type"));
        }

        let repo_type = match answer.parse::<RepoType>() {
            Ok(repo_type) => repo_type,
            Err(e) => return Ok(rejected(&TetherError::from(e))),
        };
        if !self.commit(|config| config.set_repo_type(repo_type)) {
            return Ok(EditorState::Menu);
        }
        println!("Repository type set to {repo_type}.");

        if repo_type == RepoType::Notebooks
            && self
                .prompter
                .confirm("Configure the notebook paths now?", true)?
        {
            return Ok(EditorState::NotebookPaths);
        }
        Ok(EditorState::Menu)
    }

    fn edit_push_commands(&mut self) -> TetherResult<EditorState> {
        let current = self.session.persistent().repo_push().to_string();
        let answer = self
            .prompter
            .input("Push commands (git subcommands separated by ';')", &current)?;
        if is_blank(&answer) {
            return Ok(unchanged("push commands"));
        }

        let commands = answer.trim();
        if self.commit(|config| config.set_push_commands(commands)) {
            println!("Push commands set to: {commands}");
        }
        Ok(EditorState::Menu)
    }

    fn edit_notebook_paths(&mut self) -> TetherResult<EditorState> {
        let current = self.session.persistent().settings().notebooks.clone();

        let source = self
            .prompter
            .input("Notebook source path (absolute)", &current.source_path)?;
        if is_blank(&source) {
            return Ok(unchanged("notebook paths"));
        }
        let destination = self.prompter.input(
            "Notebook destination path (relative to the repository root, or absolute)",
            &current.destination_path,
        )?;
        if is_blank(&destination) {
            return Ok(unchanged("notebook paths"));
        }

        let notebooks =
            match validate_notebook_paths(&source, &destination, self.session.repo_root()) {
                Ok(notebooks) => notebooks,
                Err(e) => return Ok(rejected(&e)),
            };
        if self.commit(|config| config.set_notebooks(notebooks.clone())) {
            println!(
                "Notebooks will be copied from {} to {}.",
                notebooks.source_path, notebooks.destination_path
            );
        }
        Ok(EditorState::Menu)
    }

    fn edit_init_commands(&mut self) -> TetherResult<EditorState> {
        let current = self
            .session
            .persistent()
            .settings()
            .init_git_commands
            .clone();
        let answer = self
            .prompter
            .input("Init commands (git subcommands separated by ';')", &current)?;
        if is_blank(&answer) {
            return Ok(unchanged("init commands"));
        }

        let commands = answer.trim();
        if !self.commit(|config| config.set_init_commands(commands)) {
            return Ok(EditorState::Menu);
        }
        println!("Init commands set to: {commands}");

        if self.prompter.confirm("Run the init commands now?", false)? {
            let root = self.session.repo_root().to_path_buf();
            match self.runner.run(&root, commands) {
                Ok(done) => println!("Ran {} init command(s) in {}.", done.len(), root.display()),
                Err(e) => error!(error = %e, "init commands failed"),
            }
        }
        Ok(EditorState::Menu)
    }

    /// Commit a change, reporting failure instead of returning it.
    fn commit(&mut self, change: impl FnOnce(&mut PersistentConfig)) -> bool {
        match self.session.update(change) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "settings not saved");
                false
            }
        }
    }
}

/// Check an operator-entered notebook source/destination pair.
///
/// The source must be absolute and exist. The destination may be relative to
/// `repo_root`; it must exist and must not be the source itself. Both values
/// are returned trimmed, as entered.
///
/// # Errors
///
/// - `FsError::NotAbsolute` for a relative source.
/// - `FsError::NotFound` if either directory is missing.
/// - `ConfigError::InvalidValue` if both name the same directory.
pub fn validate_notebook_paths(
    source: &str,
    destination: &str,
    repo_root: &Path,
) -> TetherResult<NotebookPaths> {
    let source = source.trim();
    let destination = destination.trim();

    let source_path = Path::new(source);
    if !source_path.is_absolute() {
        return Err(FsError::NotAbsolute {
            label: "notebook source".to_string(),
            path: source.to_string(),
        }
        .into());
    }
    if !source_path.exists() {
        return Err(FsError::NotFound {
            label: "notebook source".to_string(),
            path: source.to_string(),
        }
        .into());
    }

    let destination_path = resolve_path(Path::new(destination), Some(repo_root));
    if !destination_path.exists() {
        return Err(FsError::NotFound {
            label: "notebook destination".to_string(),
            path: destination_path.display().to_string(),
        }
        .into());
    }
    if normalize(&destination_path) == normalize(source_path) {
        return Err(ConfigError::InvalidValue {
            section: "notebooks".to_string(),
            key: "destinationPath".to_string(),
            message: format!("'{destination}' is the notebook source"),
        }
        .into());
    }

    Ok(NotebookPaths {
        source_path: source.to_string(),
        destination_path: destination.to_string(),
    })
}

fn is_blank(answer: &str) -> bool {
    answer.trim().is_empty()
}

fn unchanged(what: &str) -> EditorState {
    info!("{what} unchanged");
    EditorState::Menu
}

fn rejected(e: &TetherError) -> EditorState {
    warn!(error = %e, "input rejected");
    EditorState::Menu
}
