//! Name deduplication across the whole tree.
//!
//! Labels must be unique across the tree, not just among siblings.
//! `It ` assertions are exempt and their subtrees are not visited.

use std::collections::HashSet;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::TreeArena;
use crate::domain::entities::IT_PREFIX;

/// Register of labels already assigned during one deduplication pass.
#[derive(Debug, Default)]
pub struct SeenLabels {
    labels: HashSet<String>,
}

impl SeenLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Reserve `label`, returning the suffixed variant if it was taken.
    ///
    /// Suffixes start at 2 and are always built from `label` itself:
    /// `X`, `X 2`, `X 3`, ...
    pub fn claim(&mut self, label: &str) -> Option<String> {
        if self.labels.insert(label.to_string()) {
            return None;
        }
        let renamed = (2usize..)
            .map(|suffix| format!("{} {}", label, suffix))
            .find(|candidate| !self.labels.contains(candidate))?;
        self.labels.insert(renamed.clone());
        Some(renamed)
    }
}

/// Rename colliding labels in place.
#[instrument(level = "debug", skip_all)]
pub fn dedupe(tree: &mut TreeArena) {
    let mut seen = SeenLabels::new();
    dedupe_with(tree, &mut seen);
    debug!("dedupe: {} distinct labels", seen.len());
}

/// Rename colliding labels in place, sharing an existing register.
pub fn dedupe_with(tree: &mut TreeArena, seen: &mut SeenLabels) {
    if let Some(root) = tree.root() {
        dedupe_children(tree, root, seen);
    }
}

fn dedupe_children(tree: &mut TreeArena, parent: Index, seen: &mut SeenLabels) {
    let children = tree.children(parent).to_vec();

    for child in children {
        let Some(node) = tree.get_node_mut(child) else {
            continue;
        };
        let trimmed = node.data.label.trim();
        if trimmed.starts_with(IT_PREFIX) {
            continue;
        }

        if let Some(renamed) = seen.claim(trimmed) {
            trace!("dedupe: {:?} -> {:?}", node.data.label, renamed);
            node.data.label = renamed;
        }

        dedupe_children(tree, child, seen);
    }
}
