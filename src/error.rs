use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InflectError {
    /// The selected pluralization adapter has no registered factory.
    #[error("the inflector adapter '{0}' does not exist")]
    UnknownAdapter(String),

    #[error("unknown accessor option '{0}' (expected noSanitizing|ns or intelligentSplitting|is)")]
    InvalidOption(String),
}

pub type Result<T, E = InflectError> = std::result::Result<T, E>;
