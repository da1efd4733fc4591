//! Error type shared by the whole crate.

use crate::body::BodyId;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A body spec or config value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A body's state went NaN or infinite during stepping.
    #[error("body {id:?} has non-finite {what}")]
    NonFinite { id: BodyId, what: &'static str },

    #[error("no body with id {0:?}")]
    UnknownBody(BodyId),

    /// Scenario could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}
