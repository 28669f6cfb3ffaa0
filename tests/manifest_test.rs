use rust_bridge::error::Error;
use rust_bridge::manifest::{load, Manifest, ProjectIdentity};
use std::fs;
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("pyproject.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_identity_from_project_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        &temp_dir,
        "[project]\nname = \"test-project\"\nversion = \"1.4.0\"\n",
    );

    let identity = load(&path).unwrap().identity();
    assert_eq!(
        identity,
        ProjectIdentity {
            name: "test-project".to_string(),
            version: "1.4.0".to_string(),
        }
    );
}

#[test]
fn test_missing_version_defaults() {
    let manifest: Manifest = "[project]\nname = \"demo\"\n".parse().unwrap();
    assert_eq!(manifest.identity().version, "0.1.0");
}

#[test]
fn test_missing_name_defaults() {
    let manifest: Manifest = "[project]\nversion = \"2.0.0\"\n".parse().unwrap();
    assert_eq!(manifest.identity().name, "unknown");
    assert_eq!(manifest.identity().version, "2.0.0");
}

#[test]
fn test_missing_project_table_defaults() {
    let manifest: Manifest = "[tool.other]\nkey = 1\n".parse().unwrap();
    assert_eq!(manifest.identity(), ProjectIdentity::default());

    let empty: Manifest = "".parse().unwrap();
    assert_eq!(empty.identity(), ProjectIdentity::default());
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    match load(temp_dir.path().join("nope.toml")) {
        Err(Error::NotFound { path }) => assert!(path.ends_with("nope.toml")),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_load_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(&temp_dir, "[project\nname = ");

    assert!(matches!(load(&path), Err(Error::Parse { .. })));
}

#[test]
fn test_load_non_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pyproject.toml");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(matches!(load(&path), Err(Error::Parse { .. })));
}
