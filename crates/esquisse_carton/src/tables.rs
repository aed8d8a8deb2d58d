//! Static lookup tables for the builder API surface.
//!
//! Uses compile-time perfect hash functions (phf) for O(1) lookup
//! with zero runtime initialization cost. Tag and setter names are stored in
//! their builder form (UpperCamelCase); setter keys are lowercase markup names.

use phf::{phf_map, phf_set};

// =============================================================================
// Compile-time Perfect Hash Sets
// =============================================================================

/// Constructors that accept inline text as their first argument.
/// Their remaining children go through an explicit `Children(...)` call.
pub static TEXT_BEARING_TAGS: phf::Set<&'static str> = phf_set! {
    "Abbr", "B", "Bdi", "Bdo", "Button", "Caption", "Code", "Del", "Dfn", "Em",
    "Figcaption", "H1", "H2", "H3", "H4", "H5", "H6", "I", "Img", "Input", "Kbd",
    "Label", "Legend", "Link", "Mark", "Object", "Option", "Param", "Pre", "Q",
    "Rp", "Rt", "S", "Script", "Small", "Source", "Span", "Strong", "Style", "Sub",
    "Sup", "Textarea", "Th", "Time", "Title", "Track", "U", "Var", "Wbr",
};

/// Setters taking a boolean. Attribute presence always means `true`.
pub static BOOLEAN_SETTERS: phf::Set<&'static str> = phf_set! {
    "Required", "Readonly", "Disabled", "Checked",
};

/// Setters taking a signed integer.
pub static INTEGER_SETTERS: phf::Set<&'static str> = phf_set! {
    "TabIndex",
};

/// Attribute setters exposed by the builder's generic tag type,
/// keyed by the lowercase markup attribute name.
pub static BUILTIN_SETTERS: phf::Map<&'static str, &'static str> = phf_map! {
    "action" => "Action",
    "alt" => "Alt",
    "charset" => "Charset",
    "checked" => "Checked",
    "class" => "Class",
    "content" => "Content",
    "disabled" => "Disabled",
    "for" => "For",
    "href" => "Href",
    "id" => "Id",
    "method" => "Method",
    "name" => "Name",
    "placeholder" => "Placeholder",
    "readonly" => "Readonly",
    "rel" => "Rel",
    "required" => "Required",
    "role" => "Role",
    "src" => "Src",
    "style" => "Style",
    "tabindex" => "TabIndex",
    "target" => "Target",
    "title" => "Title",
    "type" => "Type",
    "value" => "Value",
};

/// Check if a builder constructor takes inline text
#[inline]
pub fn is_text_bearing_tag(name: &str) -> bool {
    TEXT_BEARING_TAGS.contains(name)
}

/// Check if a setter takes a boolean argument
#[inline]
pub fn is_boolean_setter(setter: &str) -> bool {
    BOOLEAN_SETTERS.contains(setter)
}

/// Check if a setter takes an integer argument
#[inline]
pub fn is_integer_setter(setter: &str) -> bool {
    INTEGER_SETTERS.contains(setter)
}

/// Look up a builtin setter by lowercase attribute name
#[inline]
pub fn builtin_setter(key: &str) -> Option<&'static str> {
    BUILTIN_SETTERS.get(key).copied()
}
