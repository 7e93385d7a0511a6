// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool configuration inspection.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
    let paths = config.document_paths();
    println!();
    println!("instance config: {}", paths.instance.display());
    println!("working config : {}", paths.working.display());
}

/// Display loaded configuration files.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded, using defaults");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
