use thiserror::Error;

/// Errors raised by resolution operations.
///
/// Anomaly substitution and catalog lookup are total and never produce one
/// of these; only operations that are declared but not provided do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },
}

/// Errors raised while loading anomaly tables or locale catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("yaml data error: {0}")]
    Yaml(String),

    #[error("invalid tag `{tag}`: {msg}")]
    InvalidTag { tag: String, msg: String },

    #[error("duplicate entry `{0}`")]
    Duplicate(String),

    #[error("too many entries (max {max})")]
    TooLarge { max: usize },

    #[error("note for `{code}` is too long (max {max} bytes)")]
    NoteTooLong { code: String, max: usize },
}
