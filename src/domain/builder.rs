//! Tree builder: turns a parsed outline document into a labeled tree.

use generational_arena::Index;
use serde_yaml::Value;
use tracing::{debug, instrument};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::entities::{scalar_text, RawRule, Rule, RulePath};
use crate::domain::error::{BuildResult, FormatError};

/// Constructs a [`TreeArena`] from an outline document.
///
/// The document must be a mapping with exactly one key whose value is a
/// non-empty list of rules.
#[derive(Debug, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Validate the document shape and build the tree.
    #[instrument(level = "debug", skip_all)]
    pub fn build(&self, document: &Value) -> BuildResult<TreeArena> {
        let (root_label, rules) = self.parse_document(document)?;
        debug!("build: root={:?}, rules={}", root_label, rules.len());

        let mut tree = TreeArena::new();
        let root_idx = tree.insert_node(NodeData::new(root_label), None);
        self.insert_rules(&mut tree, rules, root_idx);

        debug!("build: {} nodes, depth {}", tree.len(), tree.depth());
        Ok(tree)
    }

    /// Extract the root key and its validated rules.
    fn parse_document(&self, document: &Value) -> BuildResult<(String, Vec<Rule>)> {
        let mapping = document.as_mapping().ok_or(FormatError::NotAnObject)?;
        if mapping.len() > 1 {
            return Err(FormatError::MultipleRoots(mapping.len()));
        }
        let (key, value) = mapping.iter().next().ok_or(FormatError::MissingRoot)?;
        let root_label = scalar_text(key).ok_or(FormatError::InvalidRootKey)?;

        let items = match value {
            Value::Null => return Err(FormatError::MissingRoot),
            Value::Sequence(items) if items.is_empty() => return Err(FormatError::EmptyRoot),
            Value::Sequence(items) => items,
            _ => return Err(FormatError::RootNotAList),
        };

        let root_path = RulePath::root(&root_label);
        let rules = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let path = root_path.index(idx);
                let raw: RawRule = serde_yaml::from_value(item.clone()).map_err(|e| {
                    FormatError::InvalidRule {
                        path: path.to_string(),
                        message: e.to_string(),
                    }
                })?;
                Rule::from_raw(raw, &path)
            })
            .collect::<BuildResult<Vec<_>>>()?;

        Ok((root_label, rules))
    }

    /// Insert rules below `parent`, keeping outline order.
    ///
    /// Iterative: siblings are pushed in reverse so they are popped, and
    /// therefore appended to their parent, in their original order.
    fn insert_rules(&self, tree: &mut TreeArena, rules: Vec<Rule>, parent: Index) {
        let mut stack: Vec<(Rule, Index)> = rules.into_iter().rev().map(|r| (r, parent)).collect();

        while let Some((rule, parent_idx)) = stack.pop() {
            let data = NodeData::new(rule.statement.label()).with_annotation(rule.comment);
            let current_idx = tree.insert_node(data, Some(parent_idx));

            if let Some(branches) = rule.branches {
                for child in branches.into_rules().into_iter().rev() {
                    stack.push((child, current_idx));
                }
            }
        }
    }
}
