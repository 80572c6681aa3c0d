use serde_json::json;

use crate::errors::PartnameError;

use super::KEY_PARTNAME;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Partname {
    blockdev: String,
    partno: String,
}

/// @partname <BLOCKDEV> <PARTNO>
///
/// Derives the device name of partition PARTNO on block device
/// BLOCKDEV, returning it as the expression's single-element
/// result set.
///
/// Examples:
///
/// @partname sda 1
/// => sda1
///
/// @partname nvme0n1 1
/// => nvme0n1p1
pub(super) fn eval(expr: &str) -> Result<Vec<String>, PartnameError> {
    let partname = parse_partname(expr)?;

    Ok(vec![partname.derive()])
}

impl Partname {
    fn derive(&self) -> String {
        derive_partition_name(&self.blockdev, &self.partno)
    }
}

/// Kernel partition naming convention: a disk whose name ends in
/// a letter concatenates its partition number directly (sda1),
/// while a disk whose name already ends in digits (nvme0n1, loop0,
/// mmcblk0) takes a literal `p` separator first (nvme0n1p1), so the
/// partition number stays unambiguous.
fn derive_partition_name(blockdev: &str, partno: &str) -> String {
    match ends_in_digit(blockdev) {
        false => format!("{blockdev}{partno}"),
        true => format!("{blockdev}p{partno}"),
    }
}

// Anchored digit-suffix test, i.e. `\d+$`
fn ends_in_digit(blockdev: &str) -> bool {
    blockdev.ends_with(|c: char| c.is_ascii_digit())
}

fn parse_partname(expr: &str) -> Result<Partname, PartnameError> {
    // shlex will return empty array if 1st word starts with '#'
    let parts = shlex::split(expr);
    if parts.is_none() {
        return Err(PartnameError::BadLookupCmd(format!(
            "{KEY_PARTNAME}: bad expression: {expr}"
        )));
    }

    let parts = parts.unwrap();

    let key = parts.first();
    if key.is_none() || key.unwrap() != KEY_PARTNAME {
        return Err(PartnameError::BadLookupCmd(format!(
            "{KEY_PARTNAME}: bad key in expression: {expr}"
        )));
    }

    let terms = &parts[1..];
    if terms.len() != 2 {
        return Err(usage_error("need two args"));
    }

    // Term content is not validated - empty or odd-looking
    // terms concatenate as-is.
    Ok(Partname {
        blockdev: terms[0].clone(),
        partno: terms[1].clone(),
    })
}

fn usage_error(msg: &str) -> PartnameError {
    PartnameError::InvalidArgumentCount(format!(
        "{KEY_PARTNAME}( BLOCKDEV, PARTNO ): {msg}"
    ))
}

impl ToString for Partname {
    fn to_string(&self) -> String {
        json!({
            "blockdev": self.blockdev,
            "partno": self.partno,
        })
        .to_string()
    }
}

#[test]
fn test_derive_partition_name() {
    use std::collections::HashMap;

    let tests = HashMap::from([
        (("sda", "1"), "sda1"),
        (("sdb", "2"), "sdb2"),
        (("nvme0n1", "1"), "nvme0n1p1"),
        (("loop0", "3"), "loop0p3"),
        (("mmcblk0", "1"), "mmcblk0p1"),
        (("vda", "1"), "vda1"),
        // Multi-digit partition number, no separator since
        // sda itself has no trailing digits
        (("sda", "10"), "sda10"),
    ]);

    for ((blockdev, partno), expected) in tests {
        let actual = derive_partition_name(blockdev, partno);
        assert_eq!(expected, actual);

        // Pure computation - deriving again changes nothing
        assert_eq!(actual, derive_partition_name(blockdev, partno));
    }
}

#[test]
fn test_parse_partname() {
    use std::collections::HashMap;

    let should_pass = vec![
        "@partname sda 1",
        "@partname nvme0n1 1",
        "@partname \"sda\" \"10\"",
        "@partname loop0 3",
    ];

    let should_err = vec![
        "@partname",
        "@partname sda",
        "@partname sda 1 2",
        "partname sda 1",
        "@partname \"sda 1",
    ];

    for expr in should_pass {
        let result = parse_partname(expr);
        if let Err(err) = result {
            panic!("got error from expression {expr}: {err}");
        }
    }

    for expr in should_err {
        let result = parse_partname(expr);
        if let Ok(partname) = result {
            panic!(
                "got ok result from bad expression {expr}: {}",
                partname.to_string()
            );
        }
    }

    let tests = HashMap::from([
        (
            "@partname sda 1",
            Partname {
                blockdev: String::from("sda"),
                partno: String::from("1"),
            },
        ),
        (
            "@partname \"nvme0n1\" 2",
            Partname {
                blockdev: String::from("nvme0n1"),
                partno: String::from("2"),
            },
        ),
    ]);

    for (expr, expected) in tests {
        let actual = parse_partname(expr).unwrap();

        assert_eq!(expected, actual);
    }
}

#[test]
fn test_eval_arg_count() {
    let should_err = vec![
        "@partname",
        "@partname sda",
        "@partname sda 1 2",
        "@partname sda 1 2 3",
    ];

    for expr in should_err {
        match eval(expr) {
            Err(PartnameError::InvalidArgumentCount(_)) => {}
            Err(err) => panic!("unexpected error kind for {expr}: {err}"),
            Ok(results) => panic!("got ok result from {expr}: {results:?}"),
        }
    }

    let results = eval("@partname mmcblk0 1").unwrap();
    assert_eq!(vec![String::from("mmcblk0p1")], results);
}
