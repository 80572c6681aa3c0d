use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartnameError {
    #[error("no such file")]
    NoSuchFile(std::io::Error, String),

    #[error("bad lookups file")]
    BadLookupsFile(String),

    #[error("bad lookup expression")]
    BadLookupCmd(String),

    #[error("invalid argument count")]
    InvalidArgumentCount(String),

    #[error("bad cli arguments")]
    BadArgs(String),
}
