//! # esquisse_armature
//!
//! Armature - The structural framework for Esquisse call trees.
//!
//! ## Name Origin
//!
//! An **armature** is the skeleton a sculptor builds before adding clay. This
//! crate walks the HTML5 document produced by `html5ever` and raises the
//! [`CallNode`] skeleton that codegen later dresses in source text.
//!
//! ## Example
//!
//! ```
//! use esquisse_armature::{build_call_tree, parse_markup, BuildOptions};
//!
//! let dom = parse_markup("<div><span>Hello</span></div>").unwrap();
//! let tree = build_call_tree(&dom, &BuildOptions::default()).unwrap();
//!
//! let body = tree.as_element().unwrap();
//! assert_eq!(body.name(), "Body");
//! assert_eq!(body.children[0].as_element().unwrap().name(), "Div");
//! ```

mod builder;
mod error;
mod options;

pub use builder::*;
pub use error::*;
pub use options::*;

pub use esquisse_relief::{Attribute, CallNode, ElementCall};
