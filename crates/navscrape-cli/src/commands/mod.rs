mod extract;
mod profiles;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Extract(args) => extract::run(args),
        Command::Profiles => profiles::run(),
    }
}
