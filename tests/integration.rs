//! Integration tests for picwalk

mod harness;

use std::collections::BTreeSet;

use harness::{TestTree, listed, run_picwalk};

fn as_set(lines: &[String]) -> BTreeSet<&str> {
    lines.iter().map(String::as_str).collect()
}

#[test]
fn test_list_finds_images_at_every_depth() {
    let tree = TestTree::new();
    tree.add_image("top.png", 2, 2);
    tree.add_image("a/middle.jpg", 2, 2);
    tree.add_image("a/b/c/deep.gif", 2, 2);
    tree.add_file("a/readme.txt", b"not an image");

    let lines = listed(&tree, &[]);
    assert_eq!(
        as_set(&lines),
        BTreeSet::from(["top.png", "a/middle.jpg", "a/b/c/deep.gif"])
    );
}

#[test]
fn test_list_matches_extensions_case_insensitively() {
    let tree = TestTree::new();
    for name in [
        "one.JPG", "two.Jpeg", "three.PNG", "four.gif", "five.BMP", "six.tiff", "seven.WebP",
    ] {
        tree.add_file(name, b"");
    }
    tree.add_file("eight.tif", b"");
    tree.add_file("nine.svg", b"");
    tree.add_file("png", b"");

    let lines = listed(&tree, &[]);
    assert_eq!(lines.len(), 7, "unexpected listing: {:?}", lines);
    assert!(!lines.iter().any(|l| l == "eight.tif"));
    assert!(!lines.iter().any(|l| l == "png"));
}

#[test]
fn test_list_keeps_directory_contents_contiguous() {
    let tree = TestTree::new();
    tree.add_file("left/1.png", b"");
    tree.add_file("left/2.png", b"");
    tree.add_file("left/3.png", b"");
    tree.add_file("right/1.png", b"");
    tree.add_file("right/2.png", b"");
    tree.add_file("root.png", b"");

    let lines = listed(&tree, &[]);
    assert_eq!(lines.len(), 6);

    // Depth-first: once a directory is entered, all of it comes out before
    // anything else.
    let positions: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.starts_with("left/"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(positions.len(), 3);
    assert_eq!(positions[2] - positions[0], 2, "left/ was split: {:?}", lines);
}

#[test]
fn test_list_order_is_stable_between_runs() {
    let tree = TestTree::new();
    for i in 0..20 {
        tree.add_file(&format!("d{}/img{}.png", i % 4, i), b"");
    }

    let first = listed(&tree, &[]);
    let second = listed(&tree, &[]);
    assert_eq!(first, second);
}

#[test]
fn test_level_limits_depth() {
    let tree = TestTree::new();
    tree.add_file("root.png", b"");
    tree.add_file("one/first.png", b"");
    tree.add_file("one/two/second.png", b"");

    assert_eq!(listed(&tree, &["-L", "1"]), vec!["root.png"]);
    assert_eq!(
        as_set(&listed(&tree, &["-L", "2"])),
        BTreeSet::from(["root.png", "one/first.png"])
    );
}

#[test]
fn test_ignore_pattern_prunes_directories() {
    let tree = TestTree::new();
    tree.add_file("keep/a.png", b"");
    tree.add_file("thumbs/a.png", b"");
    tree.add_file("b.png", b"");
    tree.add_file("b_small.png", b"");

    let lines = listed(&tree, &["-I", "thumbs", "-I", "*_small.png"]);
    assert_eq!(as_set(&lines), BTreeSet::from(["keep/a.png", "b.png"]));
}

#[test]
fn test_older_filter_excludes_fresh_files() {
    let tree = TestTree::new();
    tree.add_file("fresh.png", b"");

    assert!(listed(&tree, &["--older", "1d"]).is_empty());
    assert_eq!(listed(&tree, &["--newer", "1d"]), vec!["fresh.png"]);
}

#[test]
fn test_invalid_duration_is_an_error() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_picwalk(tree.path(), &["--list", "--newer", "soon", "."]);
    assert!(!success);
    assert!(stderr.contains("invalid --newer duration"), "stderr: {}", stderr);
}

#[test]
fn test_duration_beyond_clock_range_is_an_error() {
    let tree = TestTree::new();
    tree.add_file("a.png", b"");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_picwalk"))
        .args(["--list", "--newer", "300000000000y", "."])
        .current_dir(tree.path())
        .output()
        .expect("Failed to run picwalk");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("picwalk: invalid --newer duration '300000000000y': out of range"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_image("photos/cat.png", 3, 2);
    tree.add_file("photos/notes.txt", b"");

    let (stdout, stderr, success) = run_picwalk(tree.path(), &["--json", "."]);
    assert!(success, "stderr: {}", stderr);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["complete"], true);
    assert_eq!(value["directories"], 2);

    let images = value["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["relative_path"], "photos/cat.png");
    assert_eq!(images[0]["format"], "png");
    assert!(images[0]["size_bytes"].as_u64().unwrap() > 0);
    assert!(images[0]["inode"].as_u64().unwrap() > 0);
}

#[test]
fn test_stats_output() {
    let tree = TestTree::new();
    tree.add_file("a.png", &[0; 10]);
    tree.add_file("b.png", &[0; 20]);
    tree.add_file("sub/c.jpg", &[0; 30]);

    let (stdout, _stderr, success) = run_picwalk(tree.path(), &["--stats", "."]);
    assert!(success);
    assert!(stdout.contains("Scan Statistics"));
    assert!(stdout.contains("Images:       3 total"));
    assert!(stdout.contains("Directories:  2"));
    assert!(stdout.contains("PNG"));
    assert!(stdout.contains("JPEG"));
}

#[test]
fn test_stats_json_output() {
    let tree = TestTree::new();
    tree.add_file("a.webp", &[0; 7]);

    let (stdout, _stderr, success) = run_picwalk(tree.path(), &["--stats", "--json", "."]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["images"], 1);
    assert_eq!(value["total_bytes"], 7);
    assert_eq!(value["by_format"][0]["format"], "webp");
}

#[test]
fn test_no_images_exits_cleanly() {
    let tree = TestTree::new();
    tree.add_file("readme.md", b"# nothing to see");
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_picwalk(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("Browsing directory: ."));
    assert!(stdout.contains("Rows: 720"));
    assert!(stdout.contains("Columns: 1080"));
    assert!(stdout.contains("No image files found in the directory."));
}

#[test]
fn test_bounds_are_echoed() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_picwalk(tree.path(), &["-rows", "480", "--cols=640", "."]);
    assert!(success);
    assert!(stdout.contains("Rows: 480"));
    assert!(stdout.contains("Columns: 640"));
}

#[test]
fn test_missing_root_fails() {
    let tree = TestTree::new();
    let (stdout, stderr, success) = run_picwalk(tree.path(), &["--list", "does-not-exist"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("picwalk: cannot access 'does-not-exist'"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_file_root_fails() {
    let tree = TestTree::new();
    tree.add_file("pic.png", b"");
    let (_stdout, stderr, success) = run_picwalk(tree.path(), &["--list", "pic.png"]);
    assert!(!success);
    assert!(stderr.contains("cannot access 'pic.png'"), "stderr: {}", stderr);
}

#[test]
fn test_missing_directory_argument_is_usage_error() {
    let tree = TestTree::new();
    let (_stdout, stderr, success) = run_picwalk(tree.path(), &[]);
    assert!(!success);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn test_help_succeeds() {
    let tree = TestTree::new();
    let (stdout, _stderr, success) = run_picwalk(tree.path(), &["--help"]);
    assert!(success);
    assert!(stdout.contains("--rows"));
    assert!(stdout.contains("--cols"));
}
