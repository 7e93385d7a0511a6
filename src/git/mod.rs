// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git-facing operations.
//!
//! ```text
//!   validate.rs        exclude.rs            runner.rs
//!   .git marker        <common>/info/exclude  git <cmd>; git <cmd>
//!   (filesystem)       (gix, append-only)     (subprocess, DirGuard)
//! ```
//!
//! Only `runner` spawns processes; `exclude` opens the repository with gix
//! to find its common directory and never reads objects.

pub mod exclude;
pub mod runner;
pub mod validate;
