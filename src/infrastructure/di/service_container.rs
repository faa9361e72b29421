//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ConversionService;
use crate::config::Settings;
use crate::infrastructure::traits::{
    DocumentParser, FileSystem, RealFileSystem, YamlDocumentParser,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Outline document parser
    pub parser: Arc<dyn DocumentParser>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(YamlDocumentParser),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        parser: Arc<dyn DocumentParser>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            parser,
        }
    }

    /// Conversion service wired to this container's dependencies.
    pub fn conversion_service(&self) -> ConversionService {
        ConversionService::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.parser),
            Arc::clone(&self.settings),
        )
    }
}
