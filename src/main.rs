// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Attach | Detach | EditSettings | Push | Init | Status | Options | Inis
//! ```

use std::process::ExitCode;

use tether_rs::cli::global::{GlobalOptions, Override};
use tether_rs::cli::{self, Command};
use tether_rs::cmd::config::{run_inis_command, run_options_command};
use tether_rs::cmd::mode::{run_attach_command, run_detach_command, run_status_command};
use tether_rs::cmd::replay::{run_init_command, run_push_command};
use tether_rs::cmd::settings::run_edit_settings_command;
use tether_rs::config::Config;
use tether_rs::config::loader::ConfigLoader;
use tether_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Tool config looked up in the invocation directory.
const DEFAULT_CONFIG: &str = "tether.toml";

fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(_) => {}
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &config_files)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config, config_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(config_files);
            Ok(())
        }
        Some(Command::Attach) => run_attach_command(config),
        Some(Command::Detach) => run_detach_command(config),
        Some(Command::EditSettings) => run_edit_settings_command(config),
        Some(Command::Push) => run_push_command(config).map(drop),
        Some(Command::Init) => run_init_command(config).map(drop),
        Some(Command::Status) => run_status_command(config),
        Some(Command::Version) | None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> tether_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    for item in global.to_config_overrides() {
        loader = match item {
            Override::Bool(key, value) => loader.set(key, value)?,
            Override::Int(key, value) => loader.set(key, value)?,
            Override::Text(key, value) => loader.set(key, value)?,
        };
    }
    Ok(loader)
}
