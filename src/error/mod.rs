// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            TetherError (~24 bytes)
//!                     |
//!      +------+------+------+------+------+
//!      |      |      |      |      |      |
//!      v      v      v      v      v      v
//!     Cfg    Git   Proc    Fs   Prompt   Io
//!     Box    Box    Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config  NotFound, ReadError, ParseError, WriteError, MissingKey,
//!           InvalidValue
//!   Git     NotARepository, SubcommandFailed, IgnoreUpdate, Gix
//!   Process ExecutableNotFound, SpawnFailed
//!   Fs      NotFound, NotAbsolute, IoError
//!   Prompt  Terminal, Script
//!
//! All variants boxed => TetherError fits in 24 bytes.
//! ```
//!
//! `GitError::IgnoreUpdate` is the only advisory kind: callers log it and
//! carry on. Everything else aborts the running command.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`TetherError`].
pub type TetherResult<T> = std::result::Result<T, TetherError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum TetherError {
    /// Configuration document error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Interactive prompt error.
    #[error("prompt error: {0}")]
    Prompt(#[from] Box<PromptError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl TetherError {
    /// Borrow the inner [`GitError`], if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(e) => Some(e),
            _ => None,
        }
    }

    /// Borrow the inner [`ConfigError`], if this is one.
    #[must_use]
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }

    /// Borrow the inner [`FsError`], if this is one.
    #[must_use]
    pub fn as_fs(&self) -> Option<&FsError> {
        match self {
            Self::Fs(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for TetherError {
                fn from(err: $error) -> Self {
                    TetherError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    GitError => Git,
    ProcessError => Process,
    FsError => Fs,
    PromptError => Prompt,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to open repository.
    #[error("failed to open repository: {0}")]
    Open(#[from] Box<gix::open::Error>),
}

// --- Config Errors ---

/// Configuration document errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: String },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Missing required configuration key.
    #[error("missing required key '{key}' in '{section}'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in '{section}': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Git Errors ---

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Directory exists but carries no `.git` metadata.
    #[error("{label} is not a git repository: {path}")]
    NotARepository { label: String, path: String },

    /// A stored subcommand returned a non-zero status.
    #[error("command '{command}' exited with status {code} after {completed} successful command(s)")]
    SubcommandFailed {
        command: String,
        code: i32,
        completed: usize,
    },

    /// The host exclude file could not be updated.
    #[error("failed to update ignore file '{path}': {message}")]
    IgnoreUpdate { path: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("{label} not found: {path}")]
    NotFound { label: String, path: String },

    /// Path must be absolute.
    #[error("{label} must be an absolute path: {path}")]
    NotAbsolute { label: String, path: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Prompt Errors ---

/// Terminal prompt errors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal prompt failed (closed stdin, no tty, ...).
    #[error("terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A scripted prompt ran out of responses or got the wrong kind.
    #[error("scripted prompt '{prompt}': {message}")]
    Script { prompt: String, message: String },
}
