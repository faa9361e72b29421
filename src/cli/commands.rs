//! Command dispatch

use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::ConversionService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Execute the parsed command line.
///
/// The top-level `FILE` and `--output` belong to conversion only.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    if cli.command.is_some() && (cli.file.is_some() || cli.output.is_some()) {
        return Err(CliError::InvalidArgs(
            "FILE and --output only apply when converting, not with a subcommand".to_string(),
        ));
    }

    match &cli.command {
        None => cmd_convert(container, cli.file.as_deref(), cli.output.as_deref()),
        Some(Commands::Check { file }) => cmd_check(container, file.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(container),
            ConfigCommands::Path => cmd_config_path(),
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument(skip(container))]
fn cmd_convert(
    container: &ServiceContainer,
    file: Option<&Path>,
    output_path: Option<&Path>,
) -> CliResult<()> {
    if let Some(path) = output_path {
        if path.is_dir() {
            return Err(CliError::InvalidArgs(format!(
                "output is a directory: {}",
                path.display()
            )));
        }
    }

    let service = container.conversion_service();
    let content = read_source(&service, file)?;
    let rendered = service.convert(&content)?;

    match output_path {
        Some(path) => service.write_output(path, &rendered)?,
        None => output::raw(&rendered).map_err(|e| InfraError::io("write stdout", e))?,
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_check(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let service = container.conversion_service();
    let content = read_source(&service, file)?;
    let summary = service.check(&content)?;
    output::success(&format!(
        "{}: {} nodes, depth {}",
        summary.root, summary.nodes, summary.depth
    ));
    Ok(())
}

fn cmd_config_show(container: &ServiceContainer) -> CliResult<()> {
    let rendered = container.settings.to_toml()?;
    output::info(rendered.trim_end());
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    output::header("Config files");
    match global_config_path() {
        Some(path) => output::detail(&format!("global: {}", path.display())),
        None => output::detail("global: (no home directory)"),
    }
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    output::detail(&format!("local:  {}", local_config_path(&cwd).display()));
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Read the outline from a file, or stdin when absent or `-`.
fn read_source(service: &ConversionService, file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(service.read_input(path)?),
        _ => {
            debug!("reading outline from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| InfraError::io("read stdin", e))?;
            Ok(content)
        }
    }
}
