//! Attribute value coercion and string literal quoting.

use esquisse_carton::{is_boolean_setter, is_integer_setter};

use crate::error::CodegenError;

/// Convert a raw attribute value into the literal passed to `setter`.
///
/// Boolean setters always get `true`: attribute presence is what counts, so
/// even `readonly="false"` is `true`. Integer setters parse the value as a
/// base-10 signed integer and fail the whole run otherwise.
pub fn coerce(setter: &str, raw: &str) -> Result<String, CodegenError> {
    if is_boolean_setter(setter) {
        return Ok("true".to_string());
    }

    if is_integer_setter(setter) {
        let value: i64 = raw.parse().map_err(|source| CodegenError::InvalidInteger {
            setter: setter.to_string(),
            value: raw.to_string(),
            source,
        })?;
        return Ok(value.to_string());
    }

    Ok(quote(raw))
}

/// Quote an attribute value as a string literal.
///
/// Single quotes are normalized to double quotes first. A value that then holds
/// a newline, tab or double quote is emitted as a template literal when the raw
/// form keeps it byte-for-byte; everything else is an escaped `"..."` literal.
pub fn quote(raw: &str) -> String {
    let value = raw.replace('\'', "\"");

    if value.contains(['\n', '\t', '"']) && is_raw_safe(&value) {
        return format!("`{value}`");
    }

    string_literal(&value)
}

/// A template literal reproduces `value` verbatim only if nothing in it is
/// interpreted: no backtick, no escape, no substitution and no carriage return
/// (line terminators are normalized to `\n`).
#[inline]
fn is_raw_safe(value: &str) -> bool {
    !value.contains(['`', '\\', '\r']) && !value.contains("${")
}

/// Escaped double-quoted string literal
#[inline]
pub fn string_literal(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    result.push_str(&escape_js_string(value));
    result.push('"');
    result
}

/// Escape a string for use in JavaScript string literals
pub fn escape_js_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\u{2028}' | '\u{2029}' => push_unicode_escape(&mut result, c),
            c if c.is_control() => push_unicode_escape(&mut result, c),
            c => result.push(c),
        }
    }
    result
}

fn push_unicode_escape(out: &mut String, c: char) {
    out.push_str(&format!("\\u{:04x}", c as u32));
}
