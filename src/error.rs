//! Error type shared by the mining entry points and the tokenizer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AprioriError {
    /// Absolute minimum support that cannot be satisfied or is negative.
    #[error("invalid minimum support {min_support} for {num_transactions} transactions")]
    InvalidThreshold {
        min_support: i64,
        num_transactions: usize,
    },

    /// Relative minimum support outside `[0, 1]` or not finite.
    #[error("invalid relative minimum support {0}, expected a fraction in [0, 1]")]
    InvalidFraction(f64),

    /// Two items that hash as distinct compare `Equal` under `Ord`.
    #[error("item ordering is inconsistent with equality: {left} and {right} compare equal but are distinct")]
    InconsistentOrdering { left: String, right: String },

    #[error("invalid delimiter set: {0}")]
    InvalidDelimiters(String),

    #[error("failed to compile delimiter pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, AprioriError>;

#[cfg(feature = "python")]
impl From<AprioriError> for pyo3::PyErr {
    fn from(err: AprioriError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
