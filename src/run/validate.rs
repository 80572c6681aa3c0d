use colored::Colorize;

use crate::errors::PartnameError;
use crate::{
    lookup,
    lookups,
};

pub fn run(file: &str) -> Result<(), PartnameError> {
    let lookups_yaml = std::fs::read_to_string(file)
        .map_err(|err| PartnameError::NoSuchFile(err, file.to_string()))?;

    let lookups_file = lookups::LookupsFile::from_yaml(&lookups_yaml)?;

    for expr in &lookups_file.lookups {
        if !lookup::is_lookup(expr) {
            eprintln!(
                "{}",
                format!("WARN: skipping non-lookup entry: {expr}").yellow()
            );

            continue;
        }

        lookup::validate_lookup(expr)?;
    }

    println!("{}", format!("OK: {file}").green());

    Ok(())
}
