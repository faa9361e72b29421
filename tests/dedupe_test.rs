//! Tests for label deduplication

use mktree::domain::{dedupe, dedupe_with, render, NodeData, SeenLabels, TreeArena, TreeBuilder};

fn flat(labels: &[&str]) -> TreeArena {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::new("Root"), None);
    for label in labels {
        tree.insert_node(NodeData::new(*label), Some(root));
    }
    tree
}

#[test]
fn given_repeated_when_labels_when_deduping_then_second_gets_suffix() {
    // Arrange
    let mut tree = flat(&["When X", "When X", "It Y", "It Y"]);

    // Act
    dedupe(&mut tree);

    // Assert
    assert_eq!(
        render(&tree),
        "Root\n├── When X\n├── When X 2\n├── It Y\n└── It Y\n"
    );
}

#[test]
fn given_existing_suffixed_label_when_deduping_then_next_free_suffix_is_used() {
    let mut tree = flat(&["When X", "When X 2", "When X"]);

    dedupe(&mut tree);

    assert_eq!(tree.labels(), vec!["Root", "When X", "When X 2", "When X 3"]);
}

#[test]
fn given_duplicates_in_distant_branches_when_deduping_then_uniqueness_is_global() {
    let doc: serde_yaml::Value = serde_yaml::from_str(
        r#"
Root:
  - given: a
    then:
      - when: shared
  - given: b
    then:
      - when: shared
      - when: shared
"#,
    )
    .unwrap();
    let mut tree = TreeBuilder::new().build(&doc).unwrap();

    dedupe(&mut tree);

    assert_eq!(
        tree.labels(),
        vec!["Root", "Given a", "When shared", "Given b", "When shared 2", "When shared 3"]
    );
}

#[test]
fn given_children_of_it_node_when_deduping_then_subtree_is_skipped() {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::new("Root"), None);
    tree.insert_node(NodeData::new("When X"), Some(root));
    let it = tree.insert_node(NodeData::new("It Y"), Some(root));
    tree.insert_node(NodeData::new("When X"), Some(it));

    dedupe(&mut tree);

    assert_eq!(tree.labels(), vec!["Root", "When X", "It Y", "When X"]);
}

#[test]
fn given_depth_first_order_when_deduping_then_earlier_subtree_keeps_plain_label() {
    let mut tree = TreeArena::new();
    let root = tree.insert_node(NodeData::new("Root"), None);
    let a = tree.insert_node(NodeData::new("Given A"), Some(root));
    tree.insert_node(NodeData::new("When B"), Some(a));
    tree.insert_node(NodeData::new("When B"), Some(root));

    dedupe(&mut tree);

    assert_eq!(tree.labels(), vec!["Root", "Given A", "When B", "When B 2"]);
}

#[test]
fn given_shared_register_when_deduping_then_prior_claims_are_respected() {
    let mut seen = SeenLabels::new();
    seen.claim("When X");
    let mut tree = flat(&["When X"]);

    dedupe_with(&mut tree, &mut seen);

    assert_eq!(tree.labels(), vec!["Root", "When X 2"]);
    assert_eq!(seen.len(), 2);
}

#[test]
fn given_padded_label_when_renamed_then_suffix_is_built_from_trimmed_text() {
    let mut tree = flat(&["When X", " When X "]);

    dedupe(&mut tree);

    assert_eq!(tree.labels(), vec!["Root", "When X", "When X 2"]);
}
