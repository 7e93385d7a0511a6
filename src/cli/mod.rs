// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for tether-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! tether [global options] <command>
//! attach          work on the host repository
//! detach          work on the instance repository
//! edit-settings   interactive settings editor
//! push | init     replay stored git commands
//! status          show the active mode
//! options | inis  inspect the tool configuration
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Host/Standalone Git Workflow Helper
///
/// Switches a utility checkout between working on itself and working on the
/// repository that hosts it.
#[derive(Debug, Parser)]
#[command(
    name = "tether",
    author,
    version,
    about = "Host/Standalone Git Workflow Helper",
    long_about = "tether-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Switches a utility checkout (the instance) between working on\n\
                  itself and working on the repository that hosts it.\n\n\
                  `tether attach` targets the host, `tether detach` the instance.\n\
                  `tether edit-settings` changes the stored git commands and paths.",
    after_help = "FILES:\n\n\
                  instance_config.json and working_config.json are read from and\n\
                  written to the current directory; repo_config.json lives in the\n\
                  host repository root. The names and base directory can be changed\n\
                  in a tether.toml in the current directory or with --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all tool options and their values.
    Options,

    /// Lists the TOML files used by tether.
    Inis,

    /// Makes the host repository the working target.
    Attach,

    /// Makes the instance repository the working target.
    Detach,

    /// Edits repository settings interactively.
    #[command(name = "edit-settings")]
    EditSettings,

    /// Runs the stored push commands in the working repository.
    Push,

    /// Runs the stored init commands in the working repository.
    Init,

    /// Shows the current mode and working repository.
    Status,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
