// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::documents::{
    HostConfig, InstanceConfig, InstanceType, NotebookPaths, PersistentConfig, RepoType,
    WorkingConfig,
};
use super::loader::Layer;
use super::store::{load, save};
use super::{Config, ConfigLoader, DocumentPaths};
use crate::config::types::FilesConfig;
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_snapshot!(
        format!(
            "dry={} level={} instance={} working={} host={} git={}",
            config.global.dry,
            config.global.output_log_level.as_u8(),
            config.files.instance.display(),
            config.files.working.display(),
            config.files.host.display(),
            config.git.program,
        ),
        @"dry=false level=3 instance=instance_config.json working=working_config.json host=repo_config.json git=git"
    );
}

#[test]
fn test_parse_partial_toml_keeps_defaults() {
    let config = Config::parse(
        r#"
[global]
dry = true
output_log_level = 5

[files]
host = "meta/repo_config.json"
"#,
    )
    .unwrap();
    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.files.host, PathBuf::from("meta/repo_config.json"));
    assert_eq!(config.files.instance, PathBuf::from("instance_config.json"));
    assert_eq!(config.git.program, "git");
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Config::parse("[global]\nbogus = 1\n").is_err());
    assert!(Config::parse("[nonsense]\nkey = 1\n").is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_loader_override_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nprogram = \"git-from-file\"\n")
        .set("git.program", "git-override")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.git.program, "git-override");
}

#[test]
fn test_loader_tracks_optional_files_only_when_present() {
    let temp = temp_dir();
    let present = temp.path().join("tether.toml");
    std::fs::write(&present, "[global]\ndry = true\n").unwrap();
    let missing = temp.path().join("missing.toml");

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&present)
        .add_toml_file_optional(&missing);
    assert_eq!(loader.loaded_files(), [(Layer::Optional, present.clone())]);
    assert_eq!(
        loader.format_loaded_files(),
        [format!("1. [optional] {}", present.display())]
    );

    let config = loader.build().unwrap();
    assert!(config.global.dry);
}

#[test]
fn test_format_options_is_sorted_and_aligned() {
    let options = Config::default().format_options();
    let keys: Vec<&str> = options
        .iter()
        .map(|line| line.split(" = ").next().unwrap().trim_end())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert!(keys.contains(&"git.program"));
}

#[cfg(unix)]
#[test]
fn test_document_paths_resolve_against_base() {
    let paths = DocumentPaths::new(Path::new("/work/tool"), &FilesConfig::default());
    assert_eq!(paths.instance, PathBuf::from("/work/tool/instance_config.json"));
    assert_eq!(paths.working, PathBuf::from("/work/tool/working_config.json"));
    assert_eq!(
        paths.host(Path::new("/work/host")),
        PathBuf::from("/work/host/repo_config.json")
    );
}

// =============================================================================
// JSON documents
// =============================================================================

#[test]
fn test_load_missing_file_is_not_found() {
    let temp = temp_dir();
    let err = load::<InstanceConfig>(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err.as_config(), Some(ConfigError::NotFound { .. })));
}

#[test]
fn test_load_invalid_json_is_parse_error() {
    let temp = temp_dir();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load::<InstanceConfig>(&path).unwrap_err();
    assert!(matches!(err.as_config(), Some(ConfigError::ParseError { .. })));
}

#[test]
fn test_load_missing_required_field_is_parse_error() {
    let temp = temp_dir();
    let path = temp.path().join("host.json");
    std::fs::write(&path, r#"{"repoType":"regular"}"#).unwrap();
    let err = load::<HostConfig>(&path).unwrap_err();
    assert!(matches!(err.as_config(), Some(ConfigError::ParseError { .. })));
}

#[test]
fn test_instance_config_defaults() {
    let config: InstanceConfig = serde_json::from_str(r#"{"instanceRepoRoot":"/tmp/a"}"#).unwrap();
    assert_eq!(config.instance_type, InstanceType::Standalone);
    assert_eq!(config.repo_type, RepoType::Regular);
    assert_eq!(config.host_repo_root, None);
    assert!(config.repo_push.is_empty());
}

#[test]
fn test_host_config_minimal_document() {
    let config: HostConfig =
        serde_json::from_str(r#"{"repoType":"regular","repoPush":"push origin main"}"#).unwrap();
    assert_eq!(config.repo_type, RepoType::Regular);
    assert_eq!(config.repo_push, "push origin main");
    assert_eq!(config.repo_settings.notebooks, NotebookPaths::default());
}

#[test]
fn test_unknown_keys_survive_round_trip() {
    let temp = temp_dir();
    let path = temp.path().join("repo_config.json");
    std::fs::write(
        &path,
        r#"{"repoType":"notebooks","repoPush":"push","owner":"data-team"}"#,
    )
    .unwrap();

    let config: HostConfig = load(&path).unwrap();
    save(&path, &config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["owner"], "data-team");
    assert_eq!(raw["repoType"], "notebooks");
}

#[test]
fn test_working_config_field_order() {
    let working = WorkingConfig {
        repo_type: RepoType::Regular,
        repo_push: "push origin main".to_string(),
        repo_root: PathBuf::from("/tmp/b"),
    };
    insta::assert_snapshot!(
        serde_json::to_string(&working).unwrap(),
        @r#"{"repoType":"regular","repoPush":"push origin main","repoRoot":"/tmp/b"}"#
    );
}

#[test]
fn test_save_writes_trailing_newline() {
    let temp = temp_dir();
    let path = temp.path().join("working_config.json");
    let working = WorkingConfig {
        repo_type: RepoType::Notebooks,
        repo_push: String::new(),
        repo_root: PathBuf::from("/tmp/a"),
    };
    save(&path, &working).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("}\n"));
    assert_eq!(load::<WorkingConfig>(&path).unwrap(), working);
}

#[test]
fn test_persistent_setters_keep_top_level_and_settings_aligned() {
    let mut persistent = PersistentConfig::Instance(InstanceConfig::new("/tmp/a"));

    persistent.set_repo_type(RepoType::Notebooks);
    persistent.set_push_commands("push origin main");
    persistent.set_init_commands("fetch;status");

    assert_eq!(persistent.repo_type(), RepoType::Notebooks);
    assert_eq!(persistent.settings().repo_type, RepoType::Notebooks);
    assert_eq!(persistent.repo_push(), "push origin main");
    assert_eq!(persistent.settings().repo_push_commands, "push origin main");
    assert_eq!(persistent.settings().init_git_commands, "fetch;status");

    let working = WorkingConfig::project(&persistent, Path::new("/tmp/a"));
    assert_eq!(working.repo_type, RepoType::Notebooks);
    assert_eq!(working.repo_push, "push origin main");
}

#[test]
fn test_repo_type_parse() {
    assert_eq!("Notebooks".parse::<RepoType>().unwrap(), RepoType::Notebooks);
    assert_eq!(" regular ".parse::<RepoType>().unwrap(), RepoType::Regular);
    assert!("jupyter".parse::<RepoType>().is_err());
}
