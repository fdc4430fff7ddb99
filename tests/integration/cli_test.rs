//! End-to-end tests of the mediastrip binary.

use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::{load_fixture, CssTree, MODAL_DRAWER_CLEANED};

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let tree = CssTree::new();
    tree.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("targeted"))
        .stdout(predicate::str::contains("blanket"))
        .stdout(predicate::str::contains("locate"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let tree = CssTree::new();
    tree.cmd().arg("shrink").assert().code(2);
}

// ============================================================================
// Blanket
// ============================================================================

#[test]
fn blanket_cleans_tree_and_takes_backup() {
    let tree = CssTree::new();
    tree.add_fixture("main.css", "modal-drawer.css");
    tree.add_fixture("tokens/colors.css", "tokens.css");

    tree.cmd()
        .arg("blanket")
        .arg(&tree.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 stylesheets found"))
        .stdout(predicate::str::contains("3 media queries removed"))
        .stdout(predicate::str::contains("No media queries"))
        .stdout(predicate::str::contains("Media queries removed: 3"));

    assert_eq!(tree.read("main.css"), MODAL_DRAWER_CLEANED);

    let backups = tree.backups();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fs::read_to_string(backups[0].join("main.css")).unwrap(),
        load_fixture("modal-drawer.css")
    );
}

#[test]
fn blanket_no_backup_flag() {
    let tree = CssTree::new();
    tree.add_fixture("main.css", "modal-drawer.css");

    tree.cmd()
        .args(["blanket", "--no-backup"])
        .arg(&tree.root)
        .assert()
        .success();

    assert!(tree.backups().is_empty());
    assert_eq!(tree.read("main.css"), MODAL_DRAWER_CLEANED);
}

#[test]
fn blanket_dry_run_writes_nothing() {
    let tree = CssTree::new();
    tree.add_fixture("modules/modal.css", "modal-drawer.css");

    tree.cmd()
        .args(["blanket", "--dry-run"])
        .arg(&tree.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("would be removed"));

    assert!(tree.backups().is_empty());
    assert_eq!(tree.read("modules/modal.css"), load_fixture("modal-drawer.css"));
}

#[test]
fn blanket_reports_bad_file_and_still_succeeds() {
    let tree = CssTree::new();
    fs::write(tree.root.join("bad.css"), [0xff, 0xfe]).unwrap();
    tree.add_fixture("good.css", "modal-drawer.css");

    tree.cmd()
        .args(["blanket", "--no-backup"])
        .arg(&tree.root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Failed to read"))
        .stdout(predicate::str::contains("1 file(s) failed"));

    assert_eq!(tree.read("good.css"), MODAL_DRAWER_CLEANED);
}

#[test]
fn blanket_missing_root_fails() {
    let tree = CssTree::new();
    tree.cmd()
        .args(["blanket", "--no-backup"])
        .arg(tree.root.join("absent"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Stylesheet directory not found"));
}

#[test]
fn blanket_reads_settings_from_config() {
    let tree = CssTree::new();
    tree.add_fixture("partials/modal.css", "modal-drawer.css");
    fs::write(
        &tree.config,
        format!(
            "[blanket]\nroot = {:?}\nsubdirs = [\"partials\"]\nbackup = false\nmax_blank_lines = 1\n",
            tree.root.to_string_lossy()
        ),
    )
    .unwrap();

    tree.cmd().arg("blanket").assert().success();

    assert!(tree.backups().is_empty());
    let cleaned = tree.read("partials/modal.css");
    assert!(!cleaned.contains("@media"));
    assert!(!cleaned.contains("\n\n\n"));
}

// ============================================================================
// Targeted
// ============================================================================

#[test]
fn targeted_removes_requested_blocks() {
    let tree = CssTree::new();
    let file = tree.add_fixture("modal.css", "modal-drawer.css");

    tree.cmd()
        .arg("targeted")
        .arg(&file)
        .args(["--line", "6", "--line", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing @media block at lines 6-10"))
        .stdout(predicate::str::contains("Removing @media block at lines 16-23"))
        .stdout(predicate::str::contains("Reduction: 13 lines"));

    let content = tree.read("modal.css");
    assert_eq!(content.split('\n').count(), 39 - 13);
    assert!(content.contains("@media (min-width: 960px)"));
    assert!(tree.backups().is_empty());
}

#[test]
fn targeted_warns_on_stale_and_out_of_range_lines() {
    let tree = CssTree::new();
    let file = tree.add_fixture("modal.css", "modal-drawer.css");

    tree.cmd()
        .arg("targeted")
        .arg(&file)
        .args(["--line", "5,500", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 500 is out of range"))
        .stdout(predicate::str::contains("Line 5 does not contain @media"))
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(tree.read("modal.css"), load_fixture("modal-drawer.css"));
}

#[test]
fn targeted_leaves_sheet_without_media_alone() {
    let tree = CssTree::new();
    let file = tree.add_fixture("tokens.css", "tokens.css");

    tree.cmd()
        .arg("targeted")
        .arg(&file)
        .args(["--line", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No @media at or after line 2"))
        .stdout(predicate::str::contains("Nothing to remove"));

    assert_eq!(tree.read("tokens.css"), load_fixture("tokens.css"));
}

#[test]
fn targeted_missing_file_aborts() {
    let tree = CssTree::new();
    tree.cmd()
        .arg("targeted")
        .arg(tree.root.join("missing.css"))
        .args(["--line", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("missing.css"));
}

#[test]
fn targeted_without_lines_is_an_error() {
    let tree = CssTree::new();
    let file = tree.add_fixture("modal.css", "modal-drawer.css");

    tree.cmd()
        .arg("targeted")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No line numbers given"));
}

// ============================================================================
// Locate, compact, config
// ============================================================================

#[test]
fn locate_json_lists_blocks() {
    let tree = CssTree::new();
    let file = tree.add_fixture("modal.css", "modal-drawer.css");

    let output = tree
        .cmd()
        .arg("locate")
        .arg(&file)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let blocks: Value = serde_json::from_slice(&output).unwrap();

    let starts: Vec<u64> = blocks
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["start_line"].as_u64().unwrap())
        .collect();
    assert_eq!(starts, vec![6, 16, 29]);
    assert_eq!(blocks[2]["end_line"], 33);
    assert_eq!(blocks[1]["lines"], 8);
    assert_eq!(blocks[2]["depth"], 1);
    assert_eq!(blocks[0]["query"], "@media (max-width: 640px) {");

    assert_eq!(tree.read("modal.css"), load_fixture("modal-drawer.css"));
}

#[test]
fn locate_text_output() {
    let tree = CssTree::new();
    let file = tree.add_fixture("modal.css", "modal-drawer.css");

    tree.cmd()
        .arg("locate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 media blocks in 39 lines"))
        .stdout(predicate::str::contains("16-23  @media (max-width: 400px) {"));
}

#[test]
fn compact_collapses_blank_runs() {
    let tree = CssTree::new();
    let file = tree.write("loose.css", ".a {}\n\n\n\n\n.b {}\n");

    tree.cmd()
        .arg("compact")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 blank lines removed"));

    assert_eq!(tree.read("loose.css"), ".a {}\n\n\n.b {}\n");
}

#[test]
fn compact_dry_run_reports_without_writing() {
    let tree = CssTree::new();
    let file = tree.write("loose.css", ".a {}\n\n\n\n\n.b {}\n");

    tree.cmd()
        .arg("compact")
        .arg(&file)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 blank lines would be removed"));

    assert_eq!(tree.read("loose.css"), ".a {}\n\n\n\n\n.b {}\n");
}

#[test]
fn config_init_then_show() {
    let tree = CssTree::new();

    tree.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written to"));
    assert!(tree.config.exists());

    tree.cmd()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    tree.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[blanket]"))
        .stdout(predicate::str::contains("max_blank_lines = 2"));
}

#[test]
fn completions_are_generated() {
    let tree = CssTree::new();
    tree.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mediastrip"));
}
