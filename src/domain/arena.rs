use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Display label, already carrying its role prefix
    pub label: String,
    /// Free-form note rendered after the label
    pub annotation: Option<String>,
}

impl NodeData {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: Option<String>) -> Self {
        self.annotation = annotation;
        self
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.annotation {
            Some(annotation) => write!(f, "{} // {}", self.label, annotation),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Label and annotation for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in outline order
    pub children: Vec<Index>,
}

/// Arena-based tree of labeled outline nodes.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// One arena holds exactly one outline, rooted at the document's top-level key.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a node, appending it to its parent's children.
    ///
    /// A node without a parent becomes the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Children of a node, empty for unknown indices.
    pub fn children(&self, idx: Index) -> &[Index] {
        self.arena
            .get(idx)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order traversal, children left to right.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Labels in pre-order, handy for assertions and logging.
    pub fn labels(&self) -> Vec<&str> {
        self.iter().map(|(_, node)| node.data.label.as_str()).collect()
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // root
    // ├── child1
    // │   └── grandchild1
    // └── child2
    fn sample() -> TreeArena {
        let mut tree = TreeArena::new();
        let root = tree.insert_node(NodeData::new("root"), None);
        let child1 = tree.insert_node(NodeData::new("child1"), Some(root));
        tree.insert_node(NodeData::new("grandchild1"), Some(child1));
        tree.insert_node(NodeData::new("child2"), Some(root));
        tree
    }

    #[test]
    fn test_insert_preserves_child_order() {
        let tree = sample();
        let root = tree.root().unwrap();
        let labels: Vec<_> = tree
            .children(root)
            .iter()
            .map(|&idx| tree.get_node(idx).unwrap().data.label.clone())
            .collect();
        assert_eq!(labels, vec!["child1", "child2"]);
    }

    #[test]
    fn test_iter_is_preorder() {
        let tree = sample();
        assert_eq!(tree.labels(), vec!["root", "child1", "grandchild1", "child2"]);
    }

    #[test]
    fn test_depth_and_len() {
        let tree = sample();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 4);
        assert_eq!(TreeArena::new().depth(), 0);
        assert!(TreeArena::new().is_empty());
    }

    #[test]
    fn test_node_data_display_appends_annotation() {
        let data = NodeData::new("It C").with_annotation(Some("note".into()));
        assert_eq!(data.to_string(), "It C // note");
        assert_eq!(NodeData::new("It C").to_string(), "It C");
    }
}
