//! Error types for the esquisse pipeline.

use thiserror::Error;

use esquisse_armature::BuildError;
use esquisse_atelier::CodegenError;
use esquisse_glyph::SyntaxError;

/// Any failure between reading the markup and printing the declaration
#[derive(Debug, Error)]
pub enum TranspileError {
    /// Reading the input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The markup did not yield a usable call tree
    #[error(transparent)]
    Build(#[from] BuildError),

    /// An attribute value could not be coerced
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// The generated source is not valid JavaScript
    #[error("Generated source is invalid: {0}")]
    Syntax(#[from] SyntaxError),
}
