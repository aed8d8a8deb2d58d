//! Markup parsing and call tree construction.
//!
//! The markup goes through a full HTML5 tree construction (`html5ever`), so the
//! implied `html`/`head`/`body` elements always exist. The call tree is rooted at
//! the body: head content never reaches codegen.

use esquisse_carton::to_builder_name;
use esquisse_relief::{Attribute, CallNode, ElementCall};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::BuildError;
use crate::options::BuildOptions;

/// Parse markup into an HTML5 document tree
pub fn parse_markup(source: &str) -> Result<RcDom, BuildError> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut source.as_bytes())?;
    Ok(dom)
}

/// Build the call tree for a parsed document
pub fn build_call_tree(dom: &RcDom, options: &BuildOptions) -> Result<CallNode, BuildError> {
    let html = find_child_element(&dom.document, "html").ok_or(BuildError::MissingBody)?;
    let body = find_child_element(&html, "body").ok_or(BuildError::MissingBody)?;

    let root = build_element(&body).ok_or(BuildError::MissingBody)?;
    tracing::debug!(children = root.children.len(), "walked body");

    if !options.children_only {
        return Ok(root.into());
    }

    let mut children = root.children;
    match children.len() {
        0 => Err(BuildError::EmptyFragment),
        1 => Ok(children.remove(0)),
        count => Err(BuildError::MultipleRoots(count)),
    }
}

/// Parse markup and build its call tree in one step
pub fn build_from_markup(source: &str, options: &BuildOptions) -> Result<CallNode, BuildError> {
    let dom = parse_markup(source)?;
    build_call_tree(&dom, options)
}

fn find_child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if &*name.local == tag))
        .cloned()
}

/// Build a call node, or `None` for nodes that never reach codegen
fn build_node(handle: &Handle) -> Option<CallNode> {
    match &handle.data {
        NodeData::Element { .. } => build_element(handle).map(CallNode::from),
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            let text = contents.trim();
            if text.is_empty() {
                None
            } else {
                Some(CallNode::text(text))
            }
        }
        // Comments, doctypes and processing instructions are dropped
        _ => None,
    }
}

fn build_element(handle: &Handle) -> Option<ElementCall> {
    let NodeData::Element {
        name,
        attrs,
        template_contents,
        ..
    } = &handle.data
    else {
        return None;
    };

    let attributes = attrs
        .borrow()
        .iter()
        .map(|attr| Attribute::new(attribute_key(&attr.name), attr.value.to_string()))
        .collect();
    let mut element = ElementCall::new(to_builder_name(&name.local), attributes);

    // <template> keeps its children in a separate document fragment
    let template_contents = template_contents.borrow();
    let source = template_contents.as_ref().unwrap_or(handle);
    for child in source.children.borrow().iter() {
        if let Some(node) = build_node(child) {
            element.push_child(node);
        }
    }

    Some(element)
}

fn attribute_key(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(source: &str) -> CallNode {
        build_from_markup(source, &BuildOptions::default()).unwrap()
    }

    fn fragment(source: &str) -> Result<CallNode, BuildError> {
        build_from_markup(
            source,
            &BuildOptions {
                children_only: true,
            },
        )
    }

    fn body(node: &CallNode) -> &ElementCall {
        let body = node.as_element().unwrap();
        assert_eq!(body.name(), "Body");
        body
    }

    #[test]
    fn test_root_is_body() {
        let root = tree("<div></div>");
        let body = body(&root);
        assert_eq!(body.children.len(), 1);
        assert_eq!(body.children[0].as_element().unwrap().name(), "Div");
    }

    #[test]
    fn test_body_attributes_stay_on_root() {
        let root = tree(r#"<body class="page" x-data="{}"><div></div></body>"#);
        let body = body(&root);
        assert_eq!(
            body.attributes,
            vec![Attribute::new("class", "page"), Attribute::new("x-data", "{}")]
        );
        assert_eq!(body.children.len(), 1);
    }

    #[test]
    fn test_head_content_is_not_walked() {
        let root = tree("<title>Page</title><p>Hi</p>");
        let body = body(&root);
        assert_eq!(body.children.len(), 1);
        assert_eq!(body.children[0].as_element().unwrap().name(), "P");
    }

    #[test]
    fn test_tag_names_are_normalized() {
        let root = tree("<nav><h1>T</h1><my-widget></my-widget></nav>");
        let nav = body(&root).children[0].as_element().unwrap();
        assert_eq!(nav.name(), "Nav");
        assert_eq!(nav.children[0].as_element().unwrap().name(), "H1");
        assert_eq!(nav.children[1].as_element().unwrap().name(), "MyWidget");
    }

    #[test]
    fn test_text_is_trimmed() {
        let root = tree("<div>\n   Hello world  \n</div>");
        let div = body(&root).children[0].as_element().unwrap();
        assert_eq!(div.children, vec![CallNode::text("Hello world")]);
    }

    #[test]
    fn test_blank_text_and_comments_are_dropped() {
        let root = tree("<div>\n  <!-- note -->\n  <p><!-- deep --> </p>\n</div>");
        let div = body(&root).children[0].as_element().unwrap();
        assert_eq!(div.children.len(), 1);
        let p = div.children[0].as_element().unwrap();
        assert!(p.children.is_empty());
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let root = tree(r##"<a href="#" class="x" data-toggle="y" tabindex="-1">A</a>"##);
        let a = body(&root).children[0].as_element().unwrap();
        let keys: Vec<&str> = a.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["href", "class", "data-toggle", "tabindex"]);
        assert_eq!(a.attributes[3].value, "-1");
    }

    #[test]
    fn test_directive_attributes_are_kept_verbatim() {
        let root = tree(r#"<img :src="url" @click="go()">"#);
        let img = body(&root).children[0].as_element().unwrap();
        assert_eq!(img.attributes[0], Attribute::new(":src", "url"));
        assert_eq!(img.attributes[1], Attribute::new("@click", "go()"));
    }

    #[test]
    fn test_presence_attribute_has_empty_value() {
        let root = tree("<input readonly>");
        let input = body(&root).children[0].as_element().unwrap();
        assert_eq!(input.attributes, vec![Attribute::new("readonly", "")]);
        assert!(input.takes_inline_text());
    }

    #[test]
    fn test_template_contents_are_walked() {
        let root = tree("<div><template><span>Hi</span></template></div>");
        let div = body(&root).children[0].as_element().unwrap();
        let template = div.children[0].as_element().unwrap();
        assert_eq!(template.name(), "Template");
        assert_eq!(template.children[0].as_element().unwrap().inline_text(), Some("Hi"));
    }

    #[test]
    fn test_children_only_single_root() {
        let root = fragment("\n<nav class=\"x\"><a>Home</a></nav>\n").unwrap();
        let nav = root.as_element().unwrap();
        assert_eq!(nav.name(), "Nav");
        assert_eq!(nav.attributes, vec![Attribute::new("class", "x")]);
    }

    #[test]
    fn test_children_only_text_root() {
        let root = fragment("  Hello  ").unwrap();
        assert_eq!(root, CallNode::text("Hello"));
    }

    #[test]
    fn test_children_only_empty() {
        assert!(matches!(fragment("  <!-- x -->  "), Err(BuildError::EmptyFragment)));
    }

    #[test]
    fn test_children_only_multiple_roots() {
        assert!(matches!(
            fragment("<p>a</p><p>b</p>"),
            Err(BuildError::MultipleRoots(2))
        ));
    }

    #[test]
    fn test_frameset_has_no_body() {
        let result = build_from_markup("<frameset></frameset>", &BuildOptions::default());
        assert!(matches!(result, Err(BuildError::MissingBody)));
    }
}
