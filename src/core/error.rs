//! Error types for the matcher.
//!
//! Total absence of an input is the only hard failure. Malformed filenames
//! and orphans are tallied outcomes, never errors.

use std::fmt;

use thiserror::Error;

/// Which of the two raw inputs a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    Identifiers,
    Filenames,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputSide::Identifiers => "line-number",
            InputSide::Filenames => "filename",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// One of the two raw inputs is empty after trimming. Nothing is
    /// computed; the caller gets no partial result.
    #[error("missing input: the {which} list is empty")]
    MissingInput { which: InputSide },
}
