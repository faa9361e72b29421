//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Render given/when/then test outlines as tree diagrams
#[derive(Parser, Debug)]
#[command(name = "mktree")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_precedence_over_arg = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Keep repeated labels as written
    #[arg(long, global = true)]
    pub no_dedupe: bool,

    /// Omit `// comment` annotations
    #[arg(long, global = true)]
    pub no_annotations: bool,

    /// Outline file (default: stdin, `-` also reads stdin). Not valid with a subcommand
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Write the diagram to a file instead of stdout. Not valid with a subcommand
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an outline without rendering it
    Check {
        /// Outline file (default: stdin)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
