use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn guidepub() -> Command {
    Command::new(env!("CARGO_BIN_EXE_guidepub"))
}

fn scaffold_project(root: &Path) {
    fs::create_dir_all(root.join("guides")).unwrap();
    fs::create_dir_all(root.join("web/src/pages/guides")).unwrap();
    fs::create_dir_all(root.join(".github")).unwrap();
    fs::write(root.join(".github/CONTRIBUTING.md"), "Contribute!\n").unwrap();
}

#[test]
fn test_help_lists_subcommands() {
    let output = guidepub().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("publish"));
    assert!(stdout.contains("validate"));
}

#[test]
fn test_publish_exits_one_on_missing_manifest() {
    let dir = tempdir().unwrap();
    scaffold_project(dir.path());

    let output = guidepub()
        .args(["publish", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not found"));
    // No destination files were written.
    assert!(fs::read_dir(dir.path().join("web/src/pages/guides"))
        .unwrap()
        .next()
        .is_none());
}

#[test]
fn test_publish_skips_missing_guides_and_exits_zero() {
    let dir = tempdir().unwrap();
    scaffold_project(dir.path());
    fs::write(
        dir.path().join("resources.yml"),
        "guides:\n  - file: hello\n  - file: missing\n",
    )
    .unwrap();
    fs::write(dir.path().join("guides/hello.md"), "Hello world\n").unwrap();

    let output = guidepub()
        .args(["publish", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let published =
        fs::read_to_string(dir.path().join("web/src/pages/guides/hello.md")).unwrap();
    assert!(published.contains("Hello world"));
    assert!(!dir.path().join("web/src/pages/guides/missing.md").exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Skipping missing"));
}

#[test]
fn test_publish_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    scaffold_project(dir.path());
    fs::write(dir.path().join("resources.yml"), "guides:\n  - file: hello\n").unwrap();
    fs::write(dir.path().join("guides/hello.md"), "Hello world\n").unwrap();

    let output = guidepub()
        .args(["publish", "--dry-run", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!dir.path().join("web/src/pages/guides/hello.md").exists());
    assert!(!dir.path().join("web/src/pages/contributing.md").exists());
}

#[test]
fn test_validate_json_report() {
    let dir = tempdir().unwrap();
    scaffold_project(dir.path());
    fs::write(
        dir.path().join("resources.yml"),
        "guides:\n  - file: hello\n  - file: missing\n",
    )
    .unwrap();
    fs::write(dir.path().join("guides/hello.md"), "Hello world\n").unwrap();

    let output = guidepub()
        .args(["validate", "--json", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("validate --json emits valid JSON");
    assert_eq!(report["guides"], 2);
    assert_eq!(report["missing"][0], "missing");
    assert_eq!(report["ok"], false);
}

#[test]
fn test_validate_strict_exits_one_on_missing_source() {
    let dir = tempdir().unwrap();
    scaffold_project(dir.path());
    fs::write(
        dir.path().join("resources.yml"),
        "guides:\n  - file: missing\n",
    )
    .unwrap();

    let output = guidepub()
        .args(["validate", "--strict", "--project-root"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
