mod cli;
mod errors;
mod lookup;
mod lookups;
mod run;

use clap::Parser;

fn main() -> Result<(), errors::PartnameError> {
    run::run(cli::Cli::parse())
}
