//! Error types for esquisse_armature.

use thiserror::Error;

/// Errors that can occur while building the call tree
#[derive(Debug, Error)]
pub enum BuildError {
    /// The markup could not be read by the HTML parser
    #[error("Failed to parse markup: {0}")]
    Markup(#[from] std::io::Error),

    /// The document has no body, e.g. a frameset document
    #[error("Markup has no <body> element")]
    MissingBody,

    /// Children-only mode with nothing inside the body
    #[error("Fragment is empty: the body has no element or text content")]
    EmptyFragment,

    /// Children-only mode with more than one top-level node
    #[error("Fragment has {0} top-level nodes, children-only mode needs exactly one")]
    MultipleRoots(usize),
}
