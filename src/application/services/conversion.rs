//! Outline conversion service
//!
//! Runs the full pipeline: parse document → build tree → dedupe labels → render.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{dedupe, TreeArena, TreeBuilder, TreeRenderer};
use crate::infrastructure::traits::{DocumentParser, FileSystem};

/// Shape of a successfully built outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSummary {
    /// Label of the root node (the document's top-level key)
    pub root: String,
    /// Number of nodes including the root
    pub nodes: usize,
    /// Levels including the root
    pub depth: usize,
}

/// Service converting test outlines into tree diagrams.
pub struct ConversionService {
    fs: Arc<dyn FileSystem>,
    parser: Arc<dyn DocumentParser>,
    settings: Arc<Settings>,
}

impl ConversionService {
    /// Create a new conversion service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        parser: Arc<dyn DocumentParser>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            fs,
            parser,
            settings,
        }
    }

    /// Parse and build the tree, deduplicating labels when enabled.
    pub fn build_tree(&self, content: &str) -> ApplicationResult<TreeArena> {
        let document = self
            .parser
            .parse(content)
            .map_err(|message| ApplicationError::Document { message })?;

        let mut tree = TreeBuilder::new().build(&document)?;
        if self.settings.dedupe {
            dedupe(&mut tree);
        }
        Ok(tree)
    }

    /// Convert outline text into its diagram.
    #[instrument(level = "debug", skip_all, fields(bytes = content.len()))]
    pub fn convert(&self, content: &str) -> ApplicationResult<String> {
        let tree = self.build_tree(content)?;
        let rendered = TreeRenderer::new(self.settings.annotations).render(&tree);
        debug!("convert: rendered {} lines", rendered.lines().count());
        Ok(rendered)
    }

    /// Convert an outline file into its diagram.
    pub fn convert_file(&self, input: &Path) -> ApplicationResult<String> {
        let content = self.read_input(input)?;
        self.convert(&content)
    }

    /// Validate an outline without rendering it.
    #[instrument(level = "debug", skip_all)]
    pub fn check(&self, content: &str) -> ApplicationResult<TreeSummary> {
        let tree = self.build_tree(content)?;
        let root = tree
            .root()
            .and_then(|idx| tree.get_node(idx))
            .map(|node| node.data.label.clone())
            .unwrap_or_default();

        Ok(TreeSummary {
            root,
            nodes: tree.len(),
            depth: tree.depth(),
        })
    }

    /// Read an outline file.
    pub fn read_input(&self, input: &Path) -> ApplicationResult<String> {
        debug!("read_input: {}", input.display());
        if !self.fs.exists(input) {
            return Err(ApplicationError::InputNotFound(input.to_path_buf()));
        }
        if !self.fs.is_file(input) {
            return Err(ApplicationError::InputNotAFile(input.to_path_buf()));
        }
        self.fs
            .read_to_string(input)
            .with_path_context("read outline", input)
    }

    /// Write a rendered diagram to a file.
    pub fn write_output(&self, output: &Path, rendered: &str) -> ApplicationResult<()> {
        self.fs
            .write(output, rendered)
            .with_path_context("write diagram", output)?;
        info!("wrote diagram to {}", output.display());
        Ok(())
    }
}
