//! Render given/when/then test outlines as box-drawing tree diagrams.
//!
//! ```text
//! Root
//! ├── Given A
//! │   └── When B
//! └── It C
//! ```
//!
//! Pipeline: YAML document → [`domain::TreeBuilder`] → [`domain::dedupe()`]
//! → [`domain::TreeRenderer`], orchestrated by
//! [`application::services::ConversionService`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
