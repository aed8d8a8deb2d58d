//! Builder source generation.
//!
//! Renders a call tree as one JavaScript expression:
//!
//! ```text
//! Div(
//!   Span("Hello"),
//!   Button("")
//!     .Children(
//!       Text("Save"),
//!       B("now"),
//!     ),
//! ).Class("row")
//!   .Id("main")
//! ```
//!
//! Every node ends with a `,` so it can sit in its parent's argument list; the
//! root's separator is trimmed. The layout is cosmetic, the formatter in
//! `esquisse_glyph` re-prints it anyway.

mod context;

pub use context::CodegenContext;

use esquisse_relief::{Attribute, CallNode, ElementCall};

use crate::coerce::{coerce, quote, string_literal};
use crate::directive::expand_directive_key;
use crate::error::CodegenError;
use crate::options::CodegenOptions;
use crate::registry::SetterRegistry;

/// Generate the builder expression for a call tree
pub fn generate(
    root: &CallNode,
    registry: &SetterRegistry,
    options: &CodegenOptions,
) -> Result<String, CodegenError> {
    let mut ctx = CodegenContext::new(registry, options);
    generate_node(&mut ctx, root)?;

    tracing::debug!(
        bytes = ctx.code.len(),
        fallback_attributes = ctx.fallback_count,
        "generated builder expression"
    );

    let mut code = ctx.into_code();
    let trimmed_len = code.trim_end_matches([',', '\n']).len();
    code.truncate(trimmed_len);
    Ok(code)
}

/// Generate a node followed by its `,` separator
pub fn generate_node(ctx: &mut CodegenContext<'_>, node: &CallNode) -> Result<(), CodegenError> {
    match node {
        CallNode::Text(text) => {
            ctx.push_call_head("Text");
            ctx.push(&string_literal(text));
            ctx.push(")");
        }
        CallNode::Element(element) => generate_element(ctx, element)?,
    }
    ctx.push(",");
    Ok(())
}

fn generate_element(ctx: &mut CodegenContext<'_>, element: &ElementCall) -> Result<(), CodegenError> {
    ctx.push_call_head(element.name());

    let mut deferred_children = false;
    if element.takes_inline_text() {
        match element.inline_text() {
            Some(text) => ctx.push(&string_literal(text)),
            None => {
                ctx.push("\"\"");
                deferred_children = true;
            }
        }
    } else if !element.children.is_empty() {
        generate_argument_list(ctx, &element.children)?;
    }
    ctx.push(")");

    generate_attributes(ctx, &element.attributes)?;

    if deferred_children && !element.children.is_empty() {
        ctx.indent();
        ctx.newline();
        ctx.push(".Children(");
        generate_argument_list(ctx, &element.children)?;
        ctx.push(")");
        ctx.deindent();
    }

    Ok(())
}

/// Children as call arguments, one per indented line
fn generate_argument_list(
    ctx: &mut CodegenContext<'_>,
    children: &[CallNode],
) -> Result<(), CodegenError> {
    ctx.indent();
    for child in children {
        ctx.newline();
        generate_node(ctx, child)?;
    }
    ctx.deindent();
    ctx.newline();
    Ok(())
}

/// The setter chain: first call inline, the rest on their own lines
fn generate_attributes(
    ctx: &mut CodegenContext<'_>,
    attributes: &[Attribute],
) -> Result<(), CodegenError> {
    ctx.indent();
    for (i, attribute) in attributes.iter().enumerate() {
        if i > 0 {
            ctx.newline();
        }
        ctx.push(".");
        generate_setter_call(ctx, attribute)?;
    }
    ctx.deindent();
    Ok(())
}

fn generate_setter_call(
    ctx: &mut CodegenContext<'_>,
    attribute: &Attribute,
) -> Result<(), CodegenError> {
    let registry = ctx.registry;
    match registry.resolve(&attribute.key) {
        Some(setter) => {
            let literal = coerce(setter, &attribute.value)?;
            ctx.push(setter);
            ctx.push("(");
            ctx.push(&literal);
            ctx.push(")");
        }
        None => {
            tracing::trace!(key = %attribute.key, "no setter, using Attr");
            ctx.fallback_count += 1;
            ctx.push("Attr(");
            ctx.push(&string_literal(&expand_directive_key(&attribute.key)));
            ctx.push(", ");
            ctx.push(&quote(&attribute.value));
            ctx.push(")");
        }
    }
    Ok(())
}
