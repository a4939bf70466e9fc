//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/sluice to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_sluice_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "sluice", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build sluice");

    assert!(status.success(), "Failed to build sluice binary");

    workspace.join("target/debug/sluice")
}

/// Run the sluice binary directly in the specified directory
pub fn run_sluice_in_dir(dir: &Path, args: &[&str]) -> Output {
    let binary = get_sluice_binary();

    Command::new(&binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute sluice binary")
}

/// Run the sluice binary with the given input piped to stdin
pub fn run_sluice_with_stdin(args: &[&str], input: &str) -> Output {
    let binary = get_sluice_binary();

    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sluice binary");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for sluice binary")
}
