// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the settings editor driven by scripted answers.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use tether_rs::cmd::mode::{run_attach_command, run_detach_command};
use tether_rs::cmd::settings::run_editor;
use tether_rs::config::Config;
use tether_rs::editor::prompt::{Answer, ScriptedPrompter};

struct Workspace {
    temp: TempDir,
    instance: PathBuf,
    host: PathBuf,
    config: Config,
}

fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn workspace() -> Workspace {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let instance = temp.path().join("a");
    let host = temp.path().join("b");
    std::fs::create_dir_all(&instance).unwrap();
    std::fs::create_dir_all(&host).unwrap();
    gix::init(&instance).unwrap();
    gix::init(&host).unwrap();

    write_json(
        &instance.join("instance_config.json"),
        &json!({
            "instanceRepoRoot": instance,
            "hostRepoRoot": host,
            "repoType": "regular",
            "repoPush": "push origin dev"
        }),
    );
    write_json(
        &host.join("repo_config.json"),
        &json!({
            "repoType": "regular",
            "repoPush": "push origin main",
            "repoSettings": { "repoType": "regular", "repoPushCommands": "push origin main" },
            "maintainer": "host-team"
        }),
    );

    let mut config = Config::default();
    config.global.base_dir = Some(instance.clone());
    config.global.dry = true;

    Workspace {
        temp,
        instance,
        host,
        config,
    }
}

fn input(text: &str) -> Answer {
    Answer::Input(text.to_string())
}

const QUIT: Answer = Answer::Select(4);

#[test]
fn editor_requires_mode_selection_first() {
    let ws = workspace();
    std::fs::remove_file(ws.instance.join("instance_config.json")).unwrap();

    let err = run_editor(&ws.config, ScriptedPrompter::new([QUIT])).unwrap_err();
    assert!(format!("{err:#}").contains("config file not found"));
}

#[test]
fn attached_edits_go_to_host_config() {
    let ws = workspace();
    run_attach_command(&ws.config).unwrap();

    let prompter = ScriptedPrompter::new([Answer::Select(1), input("push origin release"), QUIT]);
    run_editor(&ws.config, prompter).unwrap();

    let host = read_json(&ws.host.join("repo_config.json"));
    assert_eq!(host["repoPush"], "push origin release");
    assert_eq!(host["repoSettings"]["repoPushCommands"], "push origin release");
    assert_eq!(host["maintainer"], "host-team");

    let instance = read_json(&ws.instance.join("instance_config.json"));
    assert_eq!(instance["repoPush"], "push origin dev");

    let working = read_json(&ws.instance.join("working_config.json"));
    assert_eq!(working["repoPush"], "push origin release");
    assert_eq!(working["repoRoot"], json!(ws.host));
}

#[test]
fn detached_edits_go_to_instance_config() {
    let ws = workspace();
    run_detach_command(&ws.config).unwrap();

    let prompter = ScriptedPrompter::new([Answer::Select(0), input("NOTEBOOKS"), Answer::Confirm(false), QUIT]);
    run_editor(&ws.config, prompter).unwrap();

    let instance = read_json(&ws.instance.join("instance_config.json"));
    assert_eq!(instance["repoType"], "notebooks");
    assert_eq!(instance["repoSettings"]["repoType"], "notebooks");
    assert_eq!(read_json(&ws.host.join("repo_config.json"))["repoType"], "regular");

    let working = read_json(&ws.instance.join("working_config.json"));
    assert_eq!(working["repoType"], "notebooks");
    assert_eq!(working["repoRoot"], json!(ws.instance));
}

#[test]
fn notebook_destination_equal_to_source_writes_nothing() {
    let ws = workspace();
    run_attach_command(&ws.config).unwrap();
    let notebooks = ws.temp.path().join("nb");
    std::fs::create_dir_all(&notebooks).unwrap();
    let before = std::fs::read(ws.host.join("repo_config.json")).unwrap();

    let source = notebooks.display().to_string();
    let prompter = ScriptedPrompter::new([
        Answer::Select(2),
        input(&source),
        input(&source),
        QUIT,
    ]);
    run_editor(&ws.config, prompter).unwrap();

    assert_eq!(std::fs::read(ws.host.join("repo_config.json")).unwrap(), before);
}

#[test]
fn notebook_paths_saved_relative_to_host() {
    let ws = workspace();
    run_attach_command(&ws.config).unwrap();
    let source = ws.temp.path().join("nb-src");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::create_dir_all(ws.host.join("notebooks")).unwrap();

    let prompter = ScriptedPrompter::new([
        Answer::Select(2),
        input(&source.display().to_string()),
        input("notebooks"),
        QUIT,
    ]);
    run_editor(&ws.config, prompter).unwrap();

    let host = read_json(&ws.host.join("repo_config.json"));
    assert_eq!(
        host["repoSettings"]["notebooks"],
        json!({ "sourcePath": source.display().to_string(), "destinationPath": "notebooks" })
    );
}

#[test]
fn scripted_run_out_of_answers_is_an_error() {
    let ws = workspace();
    run_detach_command(&ws.config).unwrap();

    let err = run_editor(&ws.config, ScriptedPrompter::new([Answer::Select(3)])).unwrap_err();
    assert!(format!("{err:#}").contains("no answers left"));
}
