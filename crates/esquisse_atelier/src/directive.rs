//! Directive shorthand expansion.
//!
//! Reactive-framework shorthands (`:attr`, `@event`) become explicit long-form
//! keys on the generic `Attr` path. Keys with a registered setter never get here.

use std::borrow::Cow;

/// Expand a `:` / `@` shorthand key, returning `Cow::Borrowed` if unchanged.
///
/// The long-form prefix is prepended to the whole key, shorthand included.
#[inline]
pub fn expand_directive_key(key: &str) -> Cow<'_, str> {
    if key.starts_with(':') {
        Cow::Owned(format!("x-bind{key}"))
    } else if key.starts_with('@') {
        Cow::Owned(format!("x-on{key}"))
    } else {
        Cow::Borrowed(key)
    }
}
