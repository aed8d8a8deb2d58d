//! # Esquisse
//!
//! HTML to fluent tag builder source, written in Rust.
//!
//! ## Name Origin
//!
//! An **esquisse** is the quick sketch a painter makes before the real work.
//! Give it a finished page and it hands back the sketch: a single expression
//! that rebuilds the page through a method-chaining builder API.
//!
//! ## Pipeline
//!
//! - [`armature`] - HTML5 parsing and the call tree walk
//! - [`atelier`] - setter resolution, value coercion and source generation
//! - [`glyph`] - round-trip validation and formatting with oxc
//!
//! ## Example
//!
//! ```ignore
//! use esquisse::{transpile, TranspileOptions};
//!
//! let out = transpile("<span>Hello</span>", &TranspileOptions::default()).unwrap();
//! assert!(out.code.contains("Span(\"Hello\")"));
//! ```

pub mod config;
mod error;
mod options;

pub use error::TranspileError;
pub use options::TranspileOptions;

/// Shared lookup tables and naming.
pub use esquisse_carton as carton;

/// Call tree types.
pub use esquisse_relief as relief;

/// HTML5 parsing and call tree construction.
pub use esquisse_armature as armature;

/// Builder source generation.
pub use esquisse_atelier as atelier;

/// Round-trip validation and formatting.
pub use esquisse_glyph as glyph;

/// Output of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transpiled {
    /// The generated expression, before validation re-printed it
    pub candidate: String,

    /// The formatted declaration
    pub code: String,
}

/// Transpile markup into a builder declaration
pub fn transpile(markup: &str, options: &TranspileOptions) -> Result<Transpiled, TranspileError> {
    let tree = armature::build_from_markup(markup, &options.build_options())?;
    tracing::debug!(nodes = tree.node_count(), "built call tree");

    let candidate = atelier::generate(&tree, &options.registry(), &options.codegen_options())?;
    let code = glyph::format_declaration(&candidate, &options.format_options())?;

    Ok(Transpiled { candidate, code })
}
