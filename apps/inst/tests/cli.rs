//! Tests running the installer binary

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn inst(source: &Path, target: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_inst"));
    cmd.arg("--source-root")
        .arg(source)
        .arg("--target-dir")
        .arg(target)
        .env_remove("RUST_LOG");
    cmd
}

fn package(root: &Path) {
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::write(
        root.join("package.json"),
        r#"{"name":"iobroker","version":"2.0.0","dependencies":{"fs-extra":"^9"}}"#,
    )
    .unwrap();
    fs::write(root.join("install.js"), "// install").unwrap();
    fs::write(root.join("lib/setup.js"), "// setup").unwrap();
}

#[test]
fn test_install_succeeds() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("pkg");
    let dst = temp.path().join("target");
    package(&src);
    fs::create_dir_all(&dst).unwrap();

    let output = inst(&src, &dst).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dst.join("lib/setup.js").exists());
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dst.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["private"], true);
}

#[test]
fn test_json_report() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("pkg");
    let dst = temp.path().join("target");
    package(&src);

    let output = inst(&src, &dst).arg("--json").output().unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["manifest"], "created");
    assert_eq!(report["version"], "2.0.0");
    assert_eq!(report["copy"]["files_copied"], 2);
}

#[test]
fn test_malformed_manifest_exits_non_zero() {
    let temp = tempdir().unwrap();
    let src = temp.path().join("pkg");
    let dst = temp.path().join("target");
    package(&src);
    fs::create_dir_all(&dst).unwrap();
    fs::write(dst.join("package.json"), "{invalid json").unwrap();

    let output = inst(&src, &dst).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("manifest.parse_failed"));
    assert_eq!(
        fs::read_to_string(dst.join("package.json")).unwrap(),
        "{invalid json"
    );
}
