//! Tree renderer producing a directory-listing style diagram.
//!
//! ```text
//! Root
//! ├── Given A
//! │   └── When B
//! └── It C
//! ```

use generational_arena::Index;
use itertools::{Itertools, Position};

use crate::domain::arena::TreeArena;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders a [`TreeArena`] as text.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    /// Append `// annotation` to labels that carry one
    pub annotations: bool,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self { annotations: true }
    }
}

impl TreeRenderer {
    pub fn new(annotations: bool) -> Self {
        Self { annotations }
    }

    /// Root label on the first line, then one line per node.
    ///
    /// Every line, including the last, ends with a newline.
    pub fn render(&self, tree: &TreeArena) -> String {
        let mut result = String::new();
        let Some(root) = tree.root() else {
            return result;
        };
        if let Some(node) = tree.get_node(root) {
            result.push_str(&node.data.label);
            result.push('\n');
        }
        self.append_children(&mut result, tree, root, "");
        result
    }

    fn append_node(&self, result: &mut String, tree: &TreeArena, idx: Index, prefix: &str, is_last: bool) {
        let Some(node) = tree.get_node(idx) else {
            return;
        };
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        result.push_str(prefix);
        result.push_str(connector);
        if self.annotations {
            result.push_str(&node.data.to_string());
        } else {
            result.push_str(&node.data.label);
        }
        result.push('\n');

        let new_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
        self.append_children(result, tree, idx, &new_prefix);
    }

    fn append_children(&self, result: &mut String, tree: &TreeArena, idx: Index, prefix: &str) {
        for (position, &child) in tree.children(idx).iter().with_position() {
            let is_last = matches!(position, Position::Last | Position::Only);
            self.append_node(result, tree, child, prefix, is_last);
        }
    }
}

/// Render with annotations enabled.
pub fn render(tree: &TreeArena) -> String {
    TreeRenderer::default().render(tree)
}
