pub mod eval;
pub mod validate;

use crate::cli;
use crate::errors::PartnameError;

pub fn run(cli_args: cli::Cli) -> Result<(), PartnameError> {
    match cli_args.commands {
        // Default is to validate
        None | Some(cli::Commands::Validate) => {
            validate::run(&cli_args.file) //
        }
        Some(cli::Commands::Eval(args_eval)) => {
            eval::run(&cli_args.file, args_eval)
        }
    }
}
