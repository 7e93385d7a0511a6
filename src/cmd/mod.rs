// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config:   options, inis
//!   mode:     attach, detach, status
//!   settings: edit-settings
//!   replay:   push, init
//! ```

pub mod config;
pub mod mode;
pub mod replay;
pub mod settings;

use crate::config::Config;
use crate::git::runner::CommandRunner;

/// Command runner configured from the tool configuration.
#[must_use]
pub fn command_runner(config: &Config) -> CommandRunner {
    CommandRunner::builder()
        .with_program(config.git.program.clone())
        .with_dry_run(config.global.dry)
        .build()
}
