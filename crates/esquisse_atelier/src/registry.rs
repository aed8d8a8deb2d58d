//! Setter registry.
//!
//! Maps markup attribute keys to the setter methods of the builder's generic tag
//! type. Lookup is case-insensitive; the registry never changes once built.

use esquisse_carton::{FxHashMap, BUILTIN_SETTERS};

/// Case-insensitive lookup from attribute key to setter name
#[derive(Debug, Clone)]
pub struct SetterRegistry {
    /// Lowercase attribute key -> canonical setter name
    setters: FxHashMap<String, String>,
}

impl Default for SetterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SetterRegistry {
    /// Registry with the builtin setter table
    pub fn builtin() -> Self {
        let setters = BUILTIN_SETTERS
            .entries()
            .map(|(key, setter)| ((*key).to_string(), (*setter).to_string()))
            .collect();
        Self { setters }
    }

    /// Registry with no setters: every attribute falls back to `Attr`
    pub fn empty() -> Self {
        Self {
            setters: FxHashMap::default(),
        }
    }

    /// Add extra setter names, e.g. from a builder library with a wider API
    pub fn with_setters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            self.setters.insert(name.to_lowercase(), name.to_string());
        }
        self
    }

    /// Resolve an attribute key to its setter name
    #[inline]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.setters.get(&key.to_lowercase()).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}
