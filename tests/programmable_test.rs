//! Tests for the programmatic construction API.

use rstree::util::testing;
use rstree::{output_tree, Config, Encode, Tree};

fn render(tree: &Tree, cfg: &Config) -> String {
    testing::init_test_setup();
    let mut out = Vec::new();
    output_tree(&mut out, tree, cfg).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn given_chained_adds_when_rendering_then_converging_paths_merge() {
    let mut tree = Tree::new("root");
    let c1 = tree.add(tree.root(), "child 1");
    let c2 = tree.add(c1, "child 2");
    tree.add(c2, "child 3");
    tree.add(tree.root(), "child 5");
    // Re-walking the same path must reuse existing nodes
    let c1_again = tree.add(tree.root(), "child 1");
    let c2_again = tree.add(c1_again, "child 2");
    tree.add(c2_again, "child 4");

    let expected = "\
root
├── child 1
│   └── child 2
│       ├── child 3
│       └── child 4
└── child 5
";
    assert_eq!(render(&tree, &Config::default()), expected);
}

#[test]
fn given_existing_sibling_label_when_adding_then_same_identity_and_count() {
    let mut tree = Tree::new("root");
    let first = tree.add(tree.root(), "child");
    let before = tree.len();

    let second = tree.add(tree.root(), "child");

    assert_eq!(first, second);
    assert_eq!(tree.len(), before);
    assert_eq!(tree.node(tree.root()).children.len(), 1);
}

#[test]
fn given_single_root_when_rendering_then_label_only() {
    let tree = Tree::new("root");
    assert_eq!(render(&tree, &Config::default()), "root\n");
}

#[test]
fn given_caller_tree_when_rendering_then_left_untouched() {
    let mut tree = Tree::new("root");
    let child = tree.add(tree.root(), "child");
    render(&tree, &Config::default());

    // branch prefixes are derived on an internal copy
    assert_eq!(tree.node(child).branch, "");
}

#[test]
fn given_programmatic_tree_when_encoding_json_then_structure_preserved() {
    let mut tree = Tree::new("a");
    let b = tree.add(tree.root(), "b");
    tree.add(b, "c");
    tree.add(tree.root(), "d");

    let cfg = Config::new().with_encode(Encode::Json);
    let out = render(&tree, &cfg);
    assert_eq!(
        out.trim(),
        r#"{"value":"a","children":[{"value":"b","children":[{"value":"c","children":[]}]},{"value":"d","children":[]}]}"#
    );
}

#[test]
fn given_insertion_order_when_rendering_then_preserved_not_sorted() {
    let mut tree = Tree::new("root");
    tree.add(tree.root(), "zebra");
    tree.add(tree.root(), "alpha");

    assert_eq!(
        render(&tree, &Config::default()),
        "root\n├── zebra\n└── alpha\n"
    );
}
