//! Code generation context.

use crate::options::CodegenOptions;
use crate::registry::SetterRegistry;

/// Code generation context holding the single output buffer
pub struct CodegenContext<'r> {
    /// Generated code buffer
    pub(super) code: String,
    /// Current indentation level
    pub(super) indent_level: u32,
    /// `<package>.` prefix for constructor and `Text` calls
    pub(super) qualifier: String,
    /// Setter lookup for attribute keys
    pub(super) registry: &'r SetterRegistry,
    /// Attributes that went through the generic `Attr` path
    pub(super) fallback_count: usize,
}

impl<'r> CodegenContext<'r> {
    /// Create a new codegen context
    pub fn new(registry: &'r SetterRegistry, options: &CodegenOptions) -> Self {
        Self {
            code: String::with_capacity(4096),
            indent_level: 0,
            qualifier: options.qualifier(),
            registry,
            fallback_count: 0,
        }
    }

    /// Push string to buffer
    #[inline]
    pub fn push(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Push a qualified call head, e.g. `h.Div(`
    #[inline]
    pub fn push_call_head(&mut self, name: &str) {
        self.code.push_str(&self.qualifier);
        self.code.push_str(name);
        self.code.push('(');
    }

    /// Add newline with proper indentation
    #[inline]
    pub fn newline(&mut self) {
        self.code.push('\n');
        for _ in 0..self.indent_level {
            self.code.push_str("  ");
        }
    }

    /// Increase indentation
    #[inline]
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation
    #[inline]
    pub fn deindent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Get the generated code
    pub fn into_code(self) -> String {
        self.code
    }
}
