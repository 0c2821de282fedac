use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AcoError {
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("City {0} is defined twice")]
    DuplicateCity(String),
}
