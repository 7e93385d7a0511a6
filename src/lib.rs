// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                           attach / detach / edit-settings
//!                           push / init / status
//!                                      |
//!                +---------------------+------------+
//!                v                                  v
//!              mode                               editor
//!      attach, detach, Session            state machine, Prompter
//!                |                                  |
//!                +-----------------+----------------+
//!                                  v
//!              ,-----------------------------------------,
//!              |  config   tool TOML + JSON documents    |
//!              |  git      validate / exclude / runner   |
//!              '-----------------------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod editor;
pub mod error;
pub mod git;
pub mod logging;
pub mod mode;
pub mod utility;
