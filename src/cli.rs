use clap::{Args, Parser, Subcommand};

use crate::errors::PartnameError;

#[derive(Debug, Parser)]
#[clap(
    author = "github.com/youam",
    version,
    about = "Lookup helper deriving Linux partition device names"
)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: Option<Commands>,

    /// Lookups file
    #[arg(
        global = true,
        short = 'f',
        long = "file",
        value_parser = validate_filename,
        default_value_t = String::from("./lookups.yaml")
    )]
    pub file: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Eval(ArgsEval),
    Validate,
}

#[derive(Debug, Args)]
pub struct ArgsEval {
    /// Lookup expressions, e.g. "@partname nvme0n1 1"
    pub lookups: Vec<String>,

    /// Evaluate expressions from the lookups file
    /// instead of the command line
    #[arg(long = "use-file")]
    pub use_file: bool,

    /// Parse and validate expressions only,
    /// without printing derived values
    #[arg(short = 'n', long = "dry-run", default_value_t = false)]
    pub dry_run: bool,
}

fn validate_filename(name: &str) -> Result<String, PartnameError> {
    if name.is_empty() {
        return Err(PartnameError::BadArgs(String::from("empty filename")));
    }

    Ok(name.to_string())
}
