#[derive(Debug, clap::Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Resolves the primary heater and prints what it reports.
    Resolve,
    /// Lists every registered heater, most preferred first.
    List,
}
