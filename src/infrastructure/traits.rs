//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, Write};
use std::path::Path;

use serde_yaml::Value;
use tempfile::NamedTempFile;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file, replacing it as a whole.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Turns raw outline text into a generic mapping/sequence structure.
pub trait DocumentParser: Send + Sync {
    /// Parse a complete document.
    fn parse(&self, content: &str) -> Result<Value, String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    /// Writes through a temp file in the target directory, then renames it
    /// into place, so readers never see a half-written file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// YAML parser backed by serde_yaml.
#[derive(Debug, Default)]
pub struct YamlDocumentParser;

impl DocumentParser for YamlDocumentParser {
    fn parse(&self, content: &str) -> Result<Value, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_parser_returns_mapping() {
        let value = YamlDocumentParser.parse("Root:\n  - it: works\n").unwrap();
        assert!(value.is_mapping());
    }

    #[test]
    fn test_yaml_parser_reports_syntax_errors() {
        assert!(YamlDocumentParser.parse("Root: [unclosed").is_err());
    }

    #[test]
    fn test_real_fs_write_replaces_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let fs = RealFileSystem;

        fs.write(&path, "first").unwrap();
        fs.write(&path, "second").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap(), "second");
        assert!(fs.is_file(&path));
    }
}
