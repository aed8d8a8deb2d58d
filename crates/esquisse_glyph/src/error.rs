//! Error types for esquisse_glyph.

use thiserror::Error;

/// The candidate source did not parse as a JavaScript module
#[derive(Debug, Clone, Error)]
#[error("{message}\n{annotated}")]
pub struct SyntaxError {
    /// Parser messages, `; `-separated
    pub message: String,

    /// 1-based line of the first error, when the parser reported a location
    pub line: Option<usize>,

    /// The candidate with a line-number gutter and `>> ` on the failing line
    pub annotated: String,
}
