mod cli;
mod domain;
mod infra;

use std::sync::Arc;

use clap::Parser;

use cli::{Cli, Command};
use domain::Heater;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let scope = infra::build_scope();
    scope.start()?;

    match cli.command {
        Command::Resolve => {
            let heater = scope.get::<Arc<dyn Heater>>("Heater", None)?;
            println!("resolved: {}", heater.describe());
        }
        Command::List => {
            for heater in scope.list_by_priority::<Arc<dyn Heater>>("Heater")? {
                println!("{}", heater.describe());
            }
        }
    }

    scope.close()?;
    Ok(())
}
