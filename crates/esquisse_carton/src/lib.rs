//! Carton - The artist's toolbox for Esquisse.
//!
//! This crate holds the static tables and small helpers shared by every stage of
//! the transpiler, much like a carton (artist's portfolio case) holds the tools
//! an artist reaches for while sketching.
//!
//! # Modules
//!
//! - **Tables**: text-bearing tags, boolean and integer setters, builtin setter names
//! - **Naming**: markup tag name to builder constructor name conversion
//!
//! # Example
//!
//! ```
//! use esquisse_carton::{builtin_setter, is_text_bearing_tag, to_builder_name};
//!
//! assert_eq!(to_builder_name("span"), "Span");
//! assert!(is_text_bearing_tag("Span"));
//! assert_eq!(builtin_setter("tabindex"), Some("TabIndex"));
//! ```

pub mod naming;
pub mod tables;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{Map as PhfMap, Set as PhfSet};

// Re-export shared utilities
pub use naming::*;
pub use tables::*;
