//! # esquisse_relief
//!
//! Relief - The sculptured call tree surface for Esquisse.
//!
//! ## Name Origin
//!
//! **Relief** is a sculpture technique where forms are raised from a flat
//! background. The call tree is the raised form of the markup: every element and
//! text run stands out as a builder call, ready to be carved into source text.
//!
//! ## Structure
//!
//! - [`CallNode`] - a text run or an element call
//! - [`ElementCall`] - constructor name, attributes and children of an element
//! - [`Attribute`] - a raw markup attribute, kept in source order

mod ast;

pub use ast::*;
