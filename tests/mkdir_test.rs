//! Filesystem materialization tests.

use std::path::Path;

use tempfile::TempDir;

use rstree::util::testing;
use rstree::{mkdir_in, mkdir_tree_in, Config, Tree, TreeError};

fn run(input: &str, base: &Path, cfg: &Config) -> Result<(), TreeError> {
    testing::init_test_setup();
    mkdir_in(base, input.as_bytes(), cfg)
}

#[test]
fn given_depth_three_outline_when_materializing_then_one_path_per_node() {
    let temp = TempDir::new().unwrap();
    let input = "- root\n\t- src\n\t\t- deep\n\t- docs";

    run(input, temp.path(), &Config::default()).unwrap();

    assert!(temp.path().join("root").is_dir());
    assert!(temp.path().join("root/src").is_dir());
    assert!(temp.path().join("root/src/deep").is_dir());
    assert!(temp.path().join("root/docs").is_dir());
}

#[test]
fn given_file_markers_when_materializing_then_matching_nodes_become_files() {
    let temp = TempDir::new().unwrap();
    let input = "- root\n\t- src\n\t\t- main.rs\n\t- Makefile";
    let cfg = Config::new().with_file_markers(["rs", "Makefile"]);

    run(input, temp.path(), &cfg).unwrap();

    assert!(temp.path().join("root/src").is_dir());
    assert!(temp.path().join("root/src/main.rs").is_file());
    assert!(temp.path().join("root/Makefile").is_file());
}

#[test]
fn given_existing_target_when_rerunning_then_path_exists_and_first_run_kept() {
    let temp = TempDir::new().unwrap();
    let input = "- root\n\t- child";

    run(input, temp.path(), &Config::default()).unwrap();
    let err = run(input, temp.path(), &Config::default()).unwrap_err();

    assert!(matches!(err, TreeError::PathExists(_)));
    assert!(temp.path().join("root/child").is_dir());
}

#[test]
fn given_partial_collision_when_materializing_then_prior_creations_stay() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("root/b")).unwrap();

    let err = run("- root2\n- root\n\t- b", temp.path(), &Config::default()).unwrap_err();

    assert!(matches!(err, TreeError::PathExists(_)));
    // the first root was already created and is not rolled back
    assert!(temp.path().join("root2").is_dir());
}

#[test]
fn given_separator_in_label_when_materializing_then_invalid_name_and_nothing_created() {
    let temp = TempDir::new().unwrap();
    let input = "- root\n\t- bad/name";

    let err = run(input, temp.path(), &Config::default()).unwrap_err();

    assert!(matches!(err, TreeError::InvalidNodeName { .. }));
    assert!(
        !temp.path().join("root").exists(),
        "validation failed before any path was created"
    );
}

#[test]
fn given_file_marker_on_node_with_children_when_materializing_then_hard_error() {
    let temp = TempDir::new().unwrap();
    let input = "- root\n\t- src.rs\n\t\t- child";
    let cfg = Config::new().with_file_markers(["rs"]);

    let err = run(input, temp.path(), &cfg).unwrap_err();

    assert!(matches!(err, TreeError::InvalidNodeName { .. }));
    assert!(!temp.path().join("root").exists());
}

#[test]
fn given_programmatic_tree_when_materializing_then_hierarchy_created() {
    let temp = TempDir::new().unwrap();
    let mut tree = Tree::new("proj");
    let src = tree.add(tree.root(), "src");
    tree.add(src, "lib.rs");
    tree.add(tree.root(), "README.md");
    let cfg = Config::new().with_file_markers(["rs", "md"]);

    mkdir_tree_in(temp.path(), &tree, &cfg).unwrap();

    assert!(temp.path().join("proj/src").is_dir());
    assert!(temp.path().join("proj/src/lib.rs").is_file());
    assert!(temp.path().join("proj/README.md").is_file());
}

#[test]
fn given_dry_run_when_materializing_then_filesystem_untouched() {
    let temp = TempDir::new().unwrap();
    let cfg = Config::new().with_dry_run(true);

    run("- root\n\t- child", temp.path(), &cfg).unwrap();

    assert!(!temp.path().join("root").exists());
}

#[test]
fn given_dry_run_with_invalid_name_when_materializing_then_error_before_output() {
    let temp = TempDir::new().unwrap();
    let cfg = Config::new().with_dry_run(true);

    let err = run("- root\n\t- ..", temp.path(), &cfg).unwrap_err();
    assert!(matches!(err, TreeError::InvalidNodeName { .. }));
}

#[test]
fn given_massive_mode_when_materializing_then_same_result() {
    let temp = TempDir::new().unwrap();
    let input = "- a\n\t- b\n- c\n\t- d.md";
    let cfg = Config::new().with_file_markers(["md"]).with_massive(true);

    run(input, temp.path(), &cfg).unwrap();

    assert!(temp.path().join("a/b").is_dir());
    assert!(temp.path().join("c/d.md").is_file());
}
