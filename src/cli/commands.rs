//! Command execution: wiring parsed arguments to the library entry points.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::{mkdir, output};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(cmd @ Commands::Output { file, .. }) => _output(file.as_deref(), cmd),
        Some(cmd @ Commands::Mkdir { file, .. }) => _mkdir(file.as_deref(), cmd),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// File when given, stdin otherwise. Both are Send so the massive mode can
/// move the reader onto the parser stage.
fn open_input(file: Option<&Path>) -> CliResult<Box<dyn BufRead + Send>> {
    match file {
        Some(path) => {
            let f = File::open(path).map_err(CliError::Input)?;
            Ok(Box::new(BufReader::new(f)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

#[instrument(skip(cmd))]
fn _output(file: Option<&Path>, cmd: &Commands) -> CliResult<()> {
    debug!("file: {:?}", file);
    let cfg = cmd.to_config();
    let reader = open_input(file)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    output(&mut lock, reader, &cfg)?;
    Ok(())
}

#[instrument(skip(cmd))]
fn _mkdir(file: Option<&Path>, cmd: &Commands) -> CliResult<()> {
    debug!("file: {:?}", file);
    let cfg = cmd.to_config();
    let reader = open_input(file)?;
    mkdir(reader, &cfg)?;
    Ok(())
}
