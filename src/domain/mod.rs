//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod dedupe;
pub mod entities;
pub mod error;
pub mod render;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::TreeBuilder;
pub use dedupe::{dedupe, dedupe_with, SeenLabels};
pub use entities::*;
pub use error::{BuildResult, FormatError};
pub use render::{render, TreeRenderer};
