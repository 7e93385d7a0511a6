// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Replays stored git command sequences.
//!
//! ```text
//! run(root, "fetch; pull --rebase ;; push origin main")
//!        |
//!        v
//!   which(program)           ExecutableNotFound
//!        |
//!        v
//!   DirGuard::enter(root)    process cwd = root (restored on drop)
//!        |
//!        v
//!   for segment in split_commands():
//!        git <split_args(segment)>   inherited stdio
//!        exit != 0 --> SubcommandFailed { command, code, completed }
//!        exit == 0 --> "ok: git <segment>"
//! ```
//!
//! This is the only place tether spawns processes.

use bon::Builder;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

use crate::error::{GitError, ProcessError, TetherResult};

/// Serializes changes to the process-wide working directory.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Scoped change of the process working directory.
///
/// Holding the guard holds [`CWD_LOCK`]; dropping it restores the previous
/// directory on every exit path, including unwinding.
pub struct DirGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    /// Enter `dir`, remembering the current directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be read or `dir`
    /// cannot be entered. Nothing has changed in that case.
    pub fn enter(dir: &Path) -> std::io::Result<Self> {
        let lock = CWD_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(dir)?;
        debug!(cwd = %dir.display(), "cd");
        Ok(Self {
            previous,
            _lock: lock,
        })
    }

}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            error!(cwd = %self.previous.display(), error = %e, "failed to restore working directory");
        } else {
            debug!(cwd = %self.previous.display(), "cd back");
        }
    }
}

/// Split a `;`-delimited command list into trimmed, non-blank segments.
#[must_use]
pub fn split_commands(commands: &str) -> Vec<&str> {
    commands
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split one segment into arguments.
///
/// Whitespace separates arguments; single or double quotes group them
/// (`commit -m "first draft"` gives three arguments). An unterminated quote
/// runs to the end of the segment.
#[must_use]
pub fn split_args(segment: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;

    for ch in segment.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_arg = true;
            }
            None if ch.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            None => {
                current.push(ch);
                in_arg = true;
            }
        }
    }
    if in_arg {
        args.push(current);
    }
    args
}

/// Runs stored git subcommands against a repository root.
#[derive(Debug, Clone, Builder)]
pub struct CommandRunner {
    /// Git executable name or path.
    #[builder(setters(name = with_program), into, default = "git".to_string())]
    program: String,
    /// Log commands instead of running them.
    #[builder(setters(name = with_dry_run), default = false)]
    dry_run: bool,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CommandRunner {
    /// Run every command in `commands` inside `root`, in order.
    ///
    /// Returns the display form of each command that succeeded. Stops at the
    /// first command with a non-zero exit status. The working directory is
    /// restored whatever happens.
    ///
    /// # Errors
    ///
    /// - `ProcessError::ExecutableNotFound` if the git program is not on PATH.
    /// - `ProcessError::SpawnFailed` if a command cannot be started or `root`
    ///   cannot be entered.
    /// - `GitError::SubcommandFailed` for the first failing command.
    pub fn run(&self, root: &Path, commands: &str) -> TetherResult<Vec<String>> {
        let segments = split_commands(commands);
        if segments.is_empty() {
            info!("no commands to run");
            return Ok(Vec::new());
        }

        if self.dry_run {
            return Ok(segments
                .into_iter()
                .map(|segment| {
                    let shown = self.render(segment);
                    info!(cwd = %root.display(), "[dry] would run: {shown}");
                    shown
                })
                .collect());
        }

        let program = which::which(&self.program).map_err(|_| ProcessError::ExecutableNotFound {
            name: self.program.clone(),
        })?;

        let _guard = DirGuard::enter(root).map_err(|source| ProcessError::SpawnFailed {
            command: format!("cd {}", root.display()),
            source,
        })?;

        let mut completed = Vec::with_capacity(segments.len());
        for segment in segments {
            let shown = self.render(segment);
            debug!(cmd = %shown, "exec");

            let status = Command::new(&program)
                .args(split_args(segment))
                .status()
                .map_err(|source| ProcessError::SpawnFailed {
                    command: shown.clone(),
                    source,
                })?;

            if !status.success() {
                let code = status.code().unwrap_or(-1);
                warn!(cmd = %shown, code, "command failed, skipping the rest");
                return Err(GitError::SubcommandFailed {
                    command: shown,
                    code,
                    completed: completed.len(),
                }
                .into());
            }

            println!("ok: {shown}");
            completed.push(shown);
        }

        info!(count = completed.len(), cwd = %root.display(), "all commands succeeded");
        Ok(completed)
    }

    fn render(&self, segment: &str) -> String {
        format!("{} {segment}", self.program)
    }
}
