//! Codegen error types.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Debug, Error)]
pub enum CodegenError {
    /// An integer setter got a value that is not a base-10 integer
    #[error("Invalid integer value {value:?} for {setter}: {source}")]
    InvalidInteger {
        setter: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
