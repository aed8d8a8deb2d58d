//! Call tree node types.
//!
//! The call tree is the intermediate representation between the parsed markup
//! and the generated builder source. It is built once per run, consumed once by
//! codegen and dropped; nothing mutates it after construction.

use esquisse_carton::is_text_bearing_tag;
use serde::Serialize;

/// A raw markup attribute
///
/// Key and value are copied verbatim from the markup; order is significant
/// because it becomes the order of the emitted setter chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A node of the call tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CallNode {
    /// Trimmed, non-empty text run
    Text(String),
    /// Element constructor call
    Element(ElementCall),
}

impl CallNode {
    /// Create a text node
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Get the text of a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }

    /// Get the element call of an element node
    #[inline]
    pub fn as_element(&self) -> Option<&ElementCall> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Element(element) => {
                1 + element
                    .children
                    .iter()
                    .map(CallNode::node_count)
                    .sum::<usize>()
            }
        }
    }
}

impl From<ElementCall> for CallNode {
    fn from(element: ElementCall) -> Self {
        Self::Element(element)
    }
}

/// An element constructor call with its setter chain and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCall {
    /// Builder constructor name (UpperCamelCase)
    name: String,
    /// Whether the constructor takes inline text as its first argument.
    /// Derived from `name` at construction.
    takes_inline_text: bool,
    /// Attributes in source order
    pub attributes: Vec<Attribute>,
    /// Children in source order; never contains blank text or comments
    pub children: Vec<CallNode>,
}

impl ElementCall {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        let name = name.into();
        let takes_inline_text = is_text_bearing_tag(&name);
        Self {
            name,
            takes_inline_text,
            attributes,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn takes_inline_text(&self) -> bool {
        self.takes_inline_text
    }

    /// Append a child, keeping source order
    #[inline]
    pub fn push_child(&mut self, child: CallNode) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Self::push_child`]
    pub fn with_child(mut self, child: impl Into<CallNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The text passed directly to a text-bearing constructor.
    ///
    /// Only a text-bearing element whose sole child is a text run has inline
    /// text. Any other shape gets an empty argument and a `Children` block.
    pub fn inline_text(&self) -> Option<&str> {
        if !self.takes_inline_text {
            return None;
        }
        match self.children.as_slice() {
            [only] => only.as_text(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_inline_text_from_name() {
        assert!(ElementCall::new("Span", vec![]).takes_inline_text());
        assert!(ElementCall::new("Button", vec![]).takes_inline_text());
        assert!(!ElementCall::new("Div", vec![]).takes_inline_text());
        assert!(!ElementCall::new("Body", vec![]).takes_inline_text());
    }

    #[test]
    fn test_inline_text_single_text_child() {
        let span = ElementCall::new("Span", vec![]).with_child(CallNode::text("Hello"));
        assert_eq!(span.inline_text(), Some("Hello"));
    }

    #[test]
    fn test_inline_text_multiple_children() {
        let span = ElementCall::new("Span", vec![])
            .with_child(CallNode::text("Hello"))
            .with_child(ElementCall::new("B", vec![]).with_child(CallNode::text("world")));
        assert_eq!(span.inline_text(), None);
    }

    #[test]
    fn test_inline_text_single_element_child() {
        let span = ElementCall::new("Span", vec![])
            .with_child(ElementCall::new("B", vec![]).with_child(CallNode::text("world")));
        assert_eq!(span.inline_text(), None);
    }

    #[test]
    fn test_inline_text_not_text_bearing() {
        let div = ElementCall::new("Div", vec![]).with_child(CallNode::text("Hello"));
        assert_eq!(div.inline_text(), None);
    }

    #[test]
    fn test_node_count() {
        let tree: CallNode = ElementCall::new("Body", vec![])
            .with_child(
                ElementCall::new("Div", vec![Attribute::new("class", "a")])
                    .with_child(CallNode::text("x")),
            )
            .with_child(CallNode::text("y"))
            .into();
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_serialize_tree() {
        let tree: CallNode = ElementCall::new("Span", vec![Attribute::new("id", "a")])
            .with_child(CallNode::text("Hi"))
            .into();
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"element":{"name":"Span","takesInlineText":true,"attributes":[{"key":"id","value":"a"}],"children":[{"text":"Hi"}]}}"#
        );
    }
}
