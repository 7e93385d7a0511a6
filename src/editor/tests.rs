// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;

use crate::config::DocumentPaths;
use crate::config::documents::RepoType;
use crate::config::types::FilesConfig;
use crate::editor::prompt::{Answer, Prompter, ScriptedPrompter};
use crate::editor::{EditorState, SettingsEditor, validate_notebook_paths};
use crate::error::{ConfigError, FsError};
use crate::git::runner::CommandRunner;
use crate::mode::session::Session;

struct Fixture {
    temp: TempDir,
    root: PathBuf,
    paths: DocumentPaths,
}

/// Standalone instance repository with its documents in the repository root.
fn fixture() -> Fixture {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let root = temp.path().join("instance");
    std::fs::create_dir_all(&root).unwrap();
    gix::init(&root).unwrap();

    let paths = DocumentPaths::new(&root, &FilesConfig::default());
    let instance = json!({
        "instanceType": "standalone",
        "instanceRepoRoot": root,
        "repoType": "regular",
        "repoPush": "push origin main",
        "repoSettings": { "repoType": "regular", "repoPushCommands": "push origin main" }
    });
    std::fs::write(
        &paths.instance,
        serde_json::to_string_pretty(&instance).unwrap(),
    )
    .unwrap();
    crate::mode::detach(&paths).unwrap();

    Fixture {
        temp,
        root,
        paths,
    }
}

fn editor(fx: &Fixture, answers: Vec<Answer>) -> SettingsEditor<ScriptedPrompter> {
    let session = Session::open(fx.paths.clone()).unwrap();
    let runner = CommandRunner::builder().with_dry_run(true).build();
    SettingsEditor::new(session, ScriptedPrompter::new(answers), runner)
}

fn input(text: &str) -> Answer {
    Answer::Input(text.to_string())
}

const QUIT: Answer = Answer::Select(4);

fn read(path: &std::path::Path) -> Vec<u8> {
    std::fs::read(path).unwrap()
}

// =============================================================================
// Scripted prompter
// =============================================================================

#[test]
fn test_scripted_prompter_replays_in_order() {
    let mut prompter = ScriptedPrompter::new([Answer::Select(1), input("x"), Answer::Confirm(true)]);
    assert_eq!(prompter.select("pick", &["a", "b"], 0).unwrap(), 1);
    assert_eq!(prompter.input("text", "").unwrap(), "x");
    assert!(prompter.confirm("sure?", false).unwrap());
    assert_eq!(prompter.asked(), ["pick", "text", "sure?"]);
    assert!(prompter.input("more", "").is_err());
}

#[test]
fn test_scripted_prompter_rejects_wrong_kind() {
    let mut prompter = ScriptedPrompter::new([Answer::Confirm(true), Answer::Select(9)]);
    let err = prompter.input("name", "").unwrap_err();
    assert!(err.to_string().contains("expected input answer"));
    assert!(prompter.select("pick", &["a"], 0).is_err());
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn test_menu_maps_to_states() {
    let fx = fixture();
    let answers = (0..5).map(Answer::Select).collect();
    let mut editor = editor(&fx, answers);
    let states: Vec<_> = (0..5)
        .map(|_| editor.step(EditorState::Menu).unwrap())
        .collect();
    assert_eq!(
        states,
        [
            EditorState::RepoType,
            EditorState::PushCommands,
            EditorState::NotebookPaths,
            EditorState::InitCommands,
            EditorState::Quit,
        ]
    );
}

#[test]
fn test_blank_answers_write_nothing() {
    let fx = fixture();
    let instance_before = read(&fx.paths.instance);
    let working_before = read(&fx.paths.working);

    let mut editor = editor(
        &fx,
        vec![
            Answer::Select(0),
            input(""),
            Answer::Select(1),
            input("   "),
            Answer::Select(2),
            input(""),
            Answer::Select(3),
            input(""),
            QUIT,
        ],
    );
    editor.run().unwrap();

    assert_eq!(editor.prompter().remaining(), 0);
    assert_eq!(read(&fx.paths.instance), instance_before);
    assert_eq!(read(&fx.paths.working), working_before);
}

#[test]
fn test_push_commands_update_both_documents() {
    let fx = fixture();
    let mut editor = editor(
        &fx,
        vec![Answer::Select(1), input(" fetch; push origin dev "), QUIT],
    );
    editor.run().unwrap();

    let instance: serde_json::Value = crate::config::store::load(&fx.paths.instance).unwrap();
    assert_eq!(instance["repoPush"], "fetch; push origin dev");
    assert_eq!(
        instance["repoSettings"]["repoPushCommands"],
        "fetch; push origin dev"
    );

    let working: serde_json::Value = crate::config::store::load(&fx.paths.working).unwrap();
    assert_eq!(working["repoPush"], "fetch; push origin dev");
    assert_eq!(working["repoRoot"], json!(fx.root));
}

#[test]
fn test_invalid_repo_type_is_rejected() {
    let fx = fixture();
    let before = read(&fx.paths.instance);

    let mut editor = editor(&fx, vec![Answer::Select(0), input("monorepo"), QUIT]);
    editor.run().unwrap();

    assert_eq!(read(&fx.paths.instance), before);
    assert_eq!(editor.session().persistent().repo_type(), RepoType::Regular);
}

#[test]
fn test_notebooks_type_chains_into_paths() {
    let fx = fixture();
    let source = fx.temp.path().join("notebooks-src");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::create_dir_all(fx.root.join("nb")).unwrap();

    let mut editor = editor(
        &fx,
        vec![
            Answer::Select(0),
            input("Notebooks"),
            Answer::Confirm(true),
            input(&source.display().to_string()),
            input("nb"),
            QUIT,
        ],
    );
    editor.run().unwrap();

    let config = editor.session().persistent();
    assert_eq!(config.repo_type(), RepoType::Notebooks);
    assert_eq!(config.settings().repo_type, RepoType::Notebooks);
    assert_eq!(config.settings().notebooks.destination_path, "nb");

    let working: serde_json::Value = crate::config::store::load(&fx.paths.working).unwrap();
    assert_eq!(working["repoType"], "notebooks");
}

#[test]
fn test_notebooks_type_without_paths() {
    let fx = fixture();
    let mut editor = editor(
        &fx,
        vec![Answer::Select(0), input("notebooks"), Answer::Confirm(false), QUIT],
    );
    editor.run().unwrap();
    assert_eq!(editor.session().persistent().repo_type(), RepoType::Notebooks);
    assert_eq!(editor.prompter().remaining(), 0);
}

#[test]
fn test_init_commands_saved_and_previewed() {
    let fx = fixture();
    let mut editor = editor(
        &fx,
        vec![
            Answer::Select(3),
            input("config --local core.autocrlf false"),
            Answer::Confirm(true),
            QUIT,
        ],
    );
    editor.run().unwrap();

    assert_eq!(
        editor.session().persistent().settings().init_git_commands,
        "config --local core.autocrlf false"
    );
    // Dry-run runner: nothing touched the repository config
    let git_config = std::fs::read_to_string(fx.root.join(".git/config")).unwrap();
    assert!(!git_config.contains("autocrlf"));
}

#[test]
fn test_failed_init_run_returns_to_menu() {
    let fx = fixture();
    let session = Session::open(fx.paths.clone()).unwrap();
    let runner = CommandRunner::builder()
        .with_program("definitely-not-a-real-git")
        .build();
    let prompter = ScriptedPrompter::new([
        Answer::Select(3),
        input("status"),
        Answer::Confirm(true),
        QUIT,
    ]);
    let mut editor = SettingsEditor::new(session, prompter, runner);

    editor.run().unwrap();
    assert_eq!(editor.prompter().remaining(), 0);
    assert_eq!(
        editor.session().persistent().settings().init_git_commands,
        "status"
    );
}

#[test]
fn test_prompt_failure_ends_editor() {
    let fx = fixture();
    let mut editor = editor(&fx, vec![Answer::Select(1)]);
    assert!(editor.run().is_err());
}

#[test]
fn test_summary_lists_active_settings() {
    let fx = fixture();
    let editor = editor(&fx, Vec::new());
    let summary = editor.summary();
    assert_eq!(summary.len(), 7);
    assert_eq!(summary[2], "repo type     : regular");
    assert_eq!(summary[3], "push commands : push origin main");
}

// =============================================================================
// Notebook path validation
// =============================================================================

#[test]
fn test_notebook_source_must_be_absolute() {
    let temp = tempfile::tempdir().unwrap();
    let err = validate_notebook_paths("relative/src", "dest", temp.path()).unwrap_err();
    assert!(matches!(err.as_fs(), Some(FsError::NotAbsolute { .. })));
}

#[test]
fn test_notebook_paths_must_exist() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("missing");
    let err =
        validate_notebook_paths(&missing.display().to_string(), "dest", temp.path()).unwrap_err();
    assert!(matches!(err.as_fs(), Some(FsError::NotFound { .. })));

    let err = validate_notebook_paths(&temp.path().display().to_string(), "dest", temp.path())
        .unwrap_err();
    assert!(err.to_string().contains("notebook destination"));
}

#[test]
fn test_notebook_destination_equal_to_source_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("nb");
    std::fs::create_dir_all(&source).unwrap();

    for destination in ["nb", "./nb/", "sub/../nb"] {
        let err = validate_notebook_paths(&source.display().to_string(), destination, temp.path())
            .unwrap_err();
        assert!(
            matches!(err.as_config(), Some(ConfigError::InvalidValue { .. })),
            "{destination}"
        );
    }
}

#[test]
fn test_notebook_paths_accepted_as_entered() {
    let temp = tempfile::tempdir().unwrap();
    let source = temp.path().join("src");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::create_dir_all(temp.path().join("out")).unwrap();

    let source_text = format!("  {}  ", source.display());
    let notebooks = validate_notebook_paths(&source_text, " out ", temp.path()).unwrap();
    assert_eq!(notebooks.source_path, source.display().to_string());
    assert_eq!(notebooks.destination_path, "out");
}
