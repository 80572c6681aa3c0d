mod constants;
mod partname;

pub use self::constants::lookup_keys::*;

use crate::errors::PartnameError;

/// A lookup expression is like a shell command - it is made of
/// 2 main parts: (1) the lookup key, and (2) the terms.
/// The lookup key is always the first word of the expression.
///
/// This module handles an expression in this fashion:
///
/// 1. The expression is split into words with shlex,
/// so quoted terms survive as single terms.
///
/// 2. The first word is matched against known lookup keys.
///
/// 3. If (2) was successful, the whole expression goes to the
/// implementation behind the matched key, which parses its own
/// terms and derives the result set.
pub fn eval_lookup(expr: &str) -> Result<Vec<String>, PartnameError> {
    let (key, _) = extract_key_and_parts(expr)?;

    match key.as_str() {
        KEY_PARTNAME => partname::eval(expr),

        key => Err(PartnameError::BadLookupCmd(format!(
            "unknown lookup key: {key}"
        ))),
    }
}

/// Lookups are pure, so validation is just evaluation
/// with the result set discarded.
pub fn validate_lookup(expr: &str) -> Result<(), PartnameError> {
    _ = eval_lookup(expr)?;

    Ok(())
}

pub fn is_lookup(expr: &str) -> bool {
    expr.starts_with('@')
}

pub fn extract_key_and_parts(
    expr: &str,
) -> Result<(String, Vec<String>), PartnameError> {
    // shlex returns None on bad quoting,
    // and an empty vec if the 1st word starts with '#'
    let parts = shlex::split(expr);
    if parts.is_none() {
        return Err(PartnameError::BadLookupCmd(format!(
            "bad expression: {expr}"
        )));
    }

    let parts = parts.unwrap();
    if parts.first().is_none() {
        return Err(PartnameError::BadLookupCmd(
            "got empty expression".to_string(),
        ));
    }

    Ok((parts.first().unwrap().to_string(), parts))
}

#[test]
fn test_extract_key_and_parts() {
    use std::collections::HashMap;

    let tests = HashMap::from([
        ("@partname sda 1", ("@partname", 3)),
        ("@partname \"nvme0n1\" 1", ("@partname", 3)),
        ("@partname \"some disk\" 2", ("@partname", 3)),
        ("@foo", ("@foo", 1)),
    ]);

    for (expr, (expected_key, expected_len)) in tests {
        let (key, parts) = extract_key_and_parts(expr)
            .unwrap_or_else(|err| panic!("got error from {expr}: {err}"));

        assert_eq!(expected_key, key);
        assert_eq!(expected_len, parts.len());
    }

    let should_err = vec!["", "   ", "# comment", "@partname \"sda 1"];

    for expr in should_err {
        assert!(extract_key_and_parts(expr).is_err());
    }
}

#[test]
fn test_is_lookup() {
    assert!(is_lookup("@partname sda 1"));
    assert!(!is_lookup("partname sda 1"));
    assert!(!is_lookup("echo hello"));
}

#[test]
fn test_eval_lookup() {
    let results = eval_lookup("@partname nvme0n1 1").unwrap();
    assert_eq!(vec![String::from("nvme0n1p1")], results);

    let should_err = vec![
        "@unknown sda 1",
        "@partname sda",
        "@partname \"sda 1",
    ];

    for expr in should_err {
        assert!(eval_lookup(expr).is_err());
    }
}
