use thiserror::Error;

/// The only error the analysis core produces: an input string that matches
/// no supported color notation. Always carries the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color: {input}")]
pub struct InvalidColorError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl InvalidColorError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
