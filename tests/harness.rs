//! Test harness for picwalk integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Stdio};

pub use picwalk::test_utils::TestTree;

/// Run the picwalk binary from `dir` with `args`, stdin closed.
pub fn run_picwalk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_picwalk");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run picwalk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Lines of `--list` output, in traversal order.
pub fn listed(tree: &TestTree, extra: &[&str]) -> Vec<String> {
    let mut args = vec!["--list"];
    args.extend_from_slice(extra);
    args.push(".");
    let (stdout, stderr, success) = run_picwalk(tree.path(), &args);
    assert!(success, "picwalk --list failed: {}", stderr);
    stdout.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_image() {
        let tree = TestTree::new();
        let path = tree.add_image("nested/pic.png", 4, 3);
        assert!(path.exists());
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
    }
}
