//! Naming convention utilities for builder constructors.
//!
//! Markup tag names are lowercase (`nav`, `h1`, `my-widget`); builder
//! constructors are UpperCamelCase (`Nav`, `H1`, `MyWidget`).

use heck::ToUpperCamelCase;

/// Convert a markup tag name to its builder constructor name
///
/// # Examples
/// ```
/// use esquisse_carton::naming::to_builder_name;
///
/// assert_eq!(to_builder_name("nav"), "Nav");
/// assert_eq!(to_builder_name("my-widget"), "MyWidget");
/// ```
pub fn to_builder_name(tag: &str) -> String {
    tag.trim().to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tags() {
        assert_eq!(to_builder_name("div"), "Div");
        assert_eq!(to_builder_name("a"), "A");
        assert_eq!(to_builder_name("textarea"), "Textarea");
        assert_eq!(to_builder_name("figcaption"), "Figcaption");
    }

    #[test]
    fn test_tags_with_digits() {
        assert_eq!(to_builder_name("h1"), "H1");
        assert_eq!(to_builder_name("h6"), "H6");
    }

    #[test]
    fn test_custom_elements() {
        assert_eq!(to_builder_name("my-widget"), "MyWidget");
        assert_eq!(to_builder_name("x-data-table"), "XDataTable");
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(to_builder_name(" span "), "Span");
    }
}
