//! Command implementations

mod config;
mod create;
mod delete;
mod edit;
mod list;
mod show;

use crate::cli::{Cli, Commands};
use crate::config_loader::{load_config, open_session};
use crate::interactive;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Config => config::execute(&config, &output),
        Commands::List => list::execute(&open_session(&config), &output),
        Commands::Show(args) => show::execute(args, &open_session(&config), &output),
        Commands::Create(args) => create::execute(args, &mut open_session(&config), &output),
        Commands::Edit(args) => edit::execute(args, &mut open_session(&config), &output),
        Commands::Delete(args) => delete::execute(args, &mut open_session(&config), &output),
        Commands::Interactive => interactive::run(&mut open_session(&config), &output),
    }
}
