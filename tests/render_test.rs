//! Tests for TreeRenderer

use mktree::domain::{render, NodeData, TreeArena, TreeRenderer};

fn sample() -> TreeArena {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::new("Root"), None);
    let a = tree.insert_node(NodeData::new("Given A"), Some(root));
    tree.insert_node(NodeData::new("When B"), Some(a));
    tree.insert_node(NodeData::new("It C"), Some(root));
    tree
}

#[test]
fn given_root_with_two_children_when_rendering_then_uses_box_connectors() {
    let expected = "\
Root
├── Given A
│   └── When B
└── It C
";
    assert_eq!(render(&sample()), expected);
}

#[test]
fn given_same_tree_when_rendering_twice_then_output_is_identical() {
    let tree = sample();
    let renderer = TreeRenderer::default();

    assert_eq!(renderer.render(&tree), renderer.render(&tree));
}

#[test]
fn given_annotated_node_when_rendering_then_comment_follows_label() {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::new("Root"), None);
    let a = tree.insert_node(NodeData::new("Given A"), Some(root));
    tree.insert_node(
        NodeData::new("It C").with_annotation(Some("note".to_string())),
        Some(a),
    );
    tree.insert_node(NodeData::new("It D"), Some(a));

    assert_eq!(
        render(&tree),
        "Root\n└── Given A\n    ├── It C // note\n    └── It D\n"
    );
}

#[test]
fn given_root_only_when_rendering_then_single_line() {
    let mut tree = TreeArena::new();
    tree.insert_node(NodeData::new("Root"), None);

    assert_eq!(render(&tree), "Root\n");
}

#[test]
fn given_deep_middle_branch_when_rendering_then_pipes_continue() {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::new("R"), None);
    let a = tree.insert_node(NodeData::new("A"), Some(root));
    let b = tree.insert_node(NodeData::new("B"), Some(a));
    tree.insert_node(NodeData::new("C"), Some(b));
    tree.insert_node(NodeData::new("D"), Some(a));
    tree.insert_node(NodeData::new("E"), Some(root));

    let expected = "\
R
├── A
│   ├── B
│   │   └── C
│   └── D
└── E
";
    assert_eq!(render(&tree), expected);
}
