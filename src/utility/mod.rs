// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! path
//!   resolve_path()   relative --> absolute, lexical
//!   relative_path()  common prefix + `..` segments
//!   to_slash()       forward-slash rendering
//! fs
//!   write_atomic()   temp sibling + rename
//!   append_line()    append-only text files
//! ```

pub mod fs;
pub mod path;
