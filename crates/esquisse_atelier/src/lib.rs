//! # esquisse_atelier
//!
//! Atelier - The workshop where call trees become builder source.
//!
//! This crate turns a [`CallNode`] tree into candidate JavaScript source for a
//! fluent tag builder API:
//! - setter resolution for markup attribute keys ([`SetterRegistry`])
//! - directive shorthand expansion for the generic `Attr` path
//! - boolean / integer / string literal coercion and quoting
//! - recursive code generation with the text-bearing special case
//!
//! The output is a bare expression; validation and formatting happen in
//! `esquisse_glyph`.

pub mod codegen;
pub mod coerce;
pub mod directive;
pub mod error;
pub mod options;
pub mod registry;

pub use codegen::generate;
pub use coerce::{coerce, quote, string_literal};
pub use directive::expand_directive_key;
pub use error::CodegenError;
pub use options::CodegenOptions;
pub use registry::SetterRegistry;

pub use esquisse_relief::{Attribute, CallNode, ElementCall};
