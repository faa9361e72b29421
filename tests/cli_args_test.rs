//! Tests for command-line parsing

use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;

use mktree::cli::commands::execute_command;
use mktree::cli::{Cli, CliError, Commands, ConfigCommands};
use mktree::config::Settings;
use mktree::exitcode;
use mktree::infrastructure::di::ServiceContainer;

#[test]
fn given_no_arguments_when_parsing_then_reads_stdin_to_stdout() {
    let cli = Cli::try_parse_from(["mktree"]).unwrap();

    assert!(cli.file.is_none());
    assert!(cli.output.is_none());
    assert!(cli.command.is_none());
    assert_eq!(cli.debug, 0);
}

#[test]
fn given_file_and_output_when_parsing_then_both_are_set() {
    let cli = Cli::try_parse_from(["mktree", "in.t.yaml", "-o", "out.tree"]).unwrap();

    assert_eq!(cli.file, Some(PathBuf::from("in.t.yaml")));
    assert_eq!(cli.output, Some(PathBuf::from("out.tree")));
}

#[rstest]
#[case(&["mktree", "-d"], 1)]
#[case(&["mktree", "-dd"], 2)]
#[case(&["mktree", "-d", "-d", "-d"], 3)]
fn given_repeated_debug_flags_when_parsing_then_counts_verbosity(
    #[case] args: &[&str],
    #[case] expected: u8,
) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.debug, expected);
}

#[test]
fn given_check_subcommand_when_parsing_then_global_flags_still_apply() {
    let cli = Cli::try_parse_from(["mktree", "check", "in.t.yaml", "--no-dedupe"]).unwrap();

    assert!(cli.no_dedupe);
    match cli.command {
        Some(Commands::Check { file }) => assert_eq!(file, Some(PathBuf::from("in.t.yaml"))),
        other => panic!("expected check, got {:?}", other),
    }
}

#[test]
fn given_config_show_when_parsing_then_dispatches_to_config() {
    let cli = Cli::try_parse_from(["mktree", "config", "show"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    ));
}

#[rstest]
#[case::debug(&["mktree", "-d", "check", "x.yaml"])]
#[case::no_dedupe(&["mktree", "--no-dedupe", "check", "x.yaml"])]
#[case::no_annotations(&["mktree", "--no-annotations", "check", "x.yaml"])]
fn given_global_flag_before_subcommand_when_parsing_then_check_gets_its_file(
    #[case] args: &[&str],
) {
    let cli = Cli::try_parse_from(args).unwrap();

    assert!(cli.debug == 1 || cli.no_dedupe || cli.no_annotations);
    assert!(cli.file.is_none());
    match cli.command {
        Some(Commands::Check { file }) => assert_eq!(file, Some(PathBuf::from("x.yaml"))),
        other => panic!("expected check, got {:?}", other),
    }
}

#[test]
fn given_output_before_subcommand_when_parsing_then_subcommand_is_not_taken_as_file() {
    let cli = Cli::try_parse_from(["mktree", "-o", "out.tree", "check"]).unwrap();

    assert!(cli.file.is_none());
    assert_eq!(cli.output, Some(PathBuf::from("out.tree")));
    assert!(matches!(cli.command, Some(Commands::Check { file: None })));
}

#[rstest]
#[case::output(&["mktree", "-o", "out.tree", "check"])]
#[case::file(&["mktree", "in.t.yaml", "config", "path"])]
fn given_convert_args_with_subcommand_when_executing_then_usage_error(#[case] args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    let container = ServiceContainer::new(Settings::default());

    let err = execute_command(&cli, &container).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}
