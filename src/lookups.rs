use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::PartnameError;

/// A lookups file enumerates lookup expressions
/// to evaluate in order.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupsFile {
    #[serde(alias = "lookup", alias = "exprs", alias = "expressions")]
    pub lookups: Vec<String>,
}

impl LookupsFile {
    #[inline]
    pub fn from_yaml(lookups_yaml: &str) -> Result<Self, PartnameError> {
        parse(lookups_yaml)
    }
}

#[inline]
pub fn parse(lookups_yaml: &str) -> Result<LookupsFile, PartnameError> {
    serde_yaml::from_str(lookups_yaml)
        .map_err(|err| PartnameError::BadLookupsFile(err.to_string()))
}

#[test]
fn test_parse() {
    let example_yaml = r#"
lookups:
  - "@partname sda 1"
  - "@partname nvme0n1 1"
"#;

    let lookups_file = parse(example_yaml).unwrap();
    assert_eq!(2, lookups_file.lookups.len());

    let aliased_yaml = r#"
exprs:
  - "@partname loop0 3"
"#;

    let aliased = parse(aliased_yaml).unwrap();
    assert_eq!(
        LookupsFile {
            lookups: vec![String::from("@partname loop0 3")],
        },
        aliased,
    );

    assert!(parse("just a string, not a lookups map").is_err());
}
