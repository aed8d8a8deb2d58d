//! Round-trip validation of candidate builder source using oxc.
//!
//! The candidate is wrapped in a `const` declaration, parsed as an ES module and
//! printed back through `oxc_codegen`. Malformed candidates never leave this
//! module: they come back as a [`SyntaxError`] carrying an annotated listing.

use oxc_allocator::Allocator as OxcAllocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::SyntaxError;
use crate::options::FormatOptions;

/// Validate a candidate expression and return the formatted declaration
pub fn format_declaration(candidate: &str, options: &FormatOptions) -> Result<String, SyntaxError> {
    // Pasted verbatim below, so anything but a bare name could add declarators.
    if !is_identifier(&options.binding) {
        return Err(SyntaxError {
            message: format!("Invalid binding name {:?}: not an identifier", options.binding),
            line: None,
            annotated: annotate_lines(candidate, None),
        });
    }

    // The prefix holds no newline, so line numbers in `source` are candidate lines.
    let source = format!("const {} = {};", options.binding, candidate);

    let allocator = OxcAllocator::default();
    let parsed = Parser::new(&allocator, &source, SourceType::mjs()).parse();

    if !parsed.errors.is_empty() {
        let message = parsed
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        let line = parsed
            .errors
            .iter()
            .find_map(|e| e.labels.as_ref().and_then(|l| l.first()).map(|l| l.offset()))
            .map(|offset| line_of_offset(&source, offset));

        tracing::debug!(errors = parsed.errors.len(), ?line, "candidate failed to parse");
        return Err(SyntaxError {
            message,
            line,
            annotated: annotate_lines(candidate, line),
        });
    }

    let statements = parsed.program.body.len();
    if statements != 1 {
        return Err(SyntaxError {
            message: format!("Expected a single declaration, found {statements} statements"),
            line: None,
            annotated: annotate_lines(candidate, None),
        });
    }

    let codegen_options = CodegenOptions {
        single_quote: options.single_quote,
        ..Default::default()
    };
    let code = Codegen::new()
        .with_options(codegen_options)
        .build(&parsed.program)
        .code;

    tracing::debug!(bytes = code.len(), "formatted declaration");
    Ok(code)
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`, with Unicode letters and digits allowed
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// 1-based line containing byte `offset`
fn line_of_offset(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Number each line of `code`, marking `line` with `>> `
pub fn annotate_lines(code: &str, line: Option<usize>) -> String {
    code.split('\n')
        .enumerate()
        .map(|(i, text)| {
            let number = i + 1;
            let marker = if Some(number) == line { ">> " } else { "   " };
            format!("{marker}{number}: {text}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
