use crate::errors::PartnameError;
use crate::{
    cli,
    lookup,
    lookups,
};

pub fn run(file: &str, cli_args: cli::ArgsEval) -> Result<(), PartnameError> {
    let exprs = collect_lookups(file, &cli_args)?;
    if exprs.is_empty() {
        return Err(PartnameError::BadArgs(String::from(
            "no lookup expressions given",
        )));
    }

    if cli_args.dry_run {
        return validate(exprs);
    }

    for expr in exprs {
        for value in lookup::eval_lookup(&expr)? {
            println!("{value}");
        }
    }

    Ok(())
}

fn validate(exprs: Vec<String>) -> Result<(), PartnameError> {
    for expr in exprs {
        lookup::validate_lookup(&expr)?;
    }

    Ok(())
}

fn collect_lookups(
    file: &str,
    cli_args: &cli::ArgsEval,
) -> Result<Vec<String>, PartnameError> {
    match cli_args.use_file {
        true => {
            let lookups_yaml =
                std::fs::read_to_string(file).map_err(|err| {
                    PartnameError::NoSuchFile(err, file.to_string())
                })?;

            let lookups_file = lookups::LookupsFile::from_yaml(&lookups_yaml)?;

            Ok(lookups_file
                .lookups
                .into_iter()
                .filter(|expr| lookup::is_lookup(expr))
                .collect())
        }

        false => Ok(cli_args.lookups.clone()),
    }
}
