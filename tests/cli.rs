// tests/cli.rs

//! Binary invocation tests: default paths, flags, and exit status.

mod common;

use common::{Workspace, TEA_YAML};
use std::process::Command;

fn cookbook() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cookbook"))
}

#[test]
fn test_no_arguments_uses_default_layout() {
    let ws = Workspace::breakfast();
    let output = cookbook()
        .current_dir(ws.dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let root = ws.dir.path();
    assert!(root.join("recipes.md").is_file());
    assert!(root.join("ingredients.md").is_file());
    assert!(root.join("equipment.md").is_file());
    assert!(root.join("recipe_details/toast.md").is_file());
    assert!(root.join("recipe_details/tea.md").is_file());
}

#[test]
fn test_config_file_in_working_directory() {
    let ws = Workspace::breakfast();
    std::fs::write(
        ws.dir.path().join("cookbook.toml"),
        "[paths]\noutput = \"site\"\n\n[render]\nequipment_links = true\n",
    )
    .unwrap();

    let status = cookbook().current_dir(ws.dir.path()).status().unwrap();
    assert!(status.success());

    let equipment = std::fs::read_to_string(ws.dir.path().join("site/equipment.md")).unwrap();
    assert!(equipment.contains("- Kettle: [Tea](recipe_details/tea.md)\n"));
}

#[test]
fn test_flags_override_paths() {
    let ws = Workspace::new();
    ws.add_record("tea.yaml", TEA_YAML);

    let status = cookbook()
        .arg("--source")
        .arg(ws.source())
        .arg("--output")
        .arg(ws.output())
        .status()
        .unwrap();
    assert!(status.success());
    assert!(ws.read("recipes.md").contains("- [Tea](recipe_details/tea.md)\n"));
}

#[test]
fn test_load_error_exits_nonzero() {
    let ws = Workspace::new();
    ws.add_record("nameless.yaml", "notes: [x]\n");

    let output = cookbook().current_dir(ws.dir.path()).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("has no name"));
}

#[test]
fn test_collision_error_flag() {
    let ws = Workspace::new();
    ws.add_record("a.yaml", "name: Tea\n");
    ws.add_record("b.yaml", "name: TEA\n");

    let output = cookbook()
        .current_dir(ws.dir.path())
        .args(["--on-collision", "error"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!ws.dir.path().join("recipes.md").exists());
}
