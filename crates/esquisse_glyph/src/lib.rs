//! # esquisse_glyph
//!
//! Glyph - The final letterforms of Esquisse output.
//!
//! Candidate builder source is only trusted after a real JavaScript parser has
//! read it back. This crate wraps the candidate in a declaration, validates it
//! with `oxc_parser` and re-prints it with `oxc_codegen`.
//!
//! ## Example
//!
//! ```ignore
//! use esquisse_glyph::{format_declaration, FormatOptions};
//!
//! let code = format_declaration("Body(Span(\"Hi\"))", &FormatOptions::default()).unwrap();
//! assert!(code.starts_with("const n = Body("));
//! ```

mod error;
mod options;
mod validate;

pub use error::*;
pub use options::*;
pub use validate::{annotate_lines, format_declaration};
