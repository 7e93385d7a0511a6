// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional tether.toml files (can repeat)
//! --dry             ← Print stored git commands instead of running them
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: CLI flags > --config > tether.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// A single `key = value` override applied on top of the loaded files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override {
    Bool(&'static str, bool),
    Int(&'static str, i64),
    Text(&'static str, String),
}

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times; later files win.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Prints the git commands that would run without running them.
    /// Configuration files are still written.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<Override> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(Override::Int("global.output_log_level", i64::from(level)));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(Override::Int("global.file_log_level", i64::from(level)));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(Override::Text(
                "global.log_file",
                path.display().to_string(),
            ));
        }

        if self.dry {
            overrides.push(Override::Bool("global.dry", true));
        }

        overrides
    }
}
