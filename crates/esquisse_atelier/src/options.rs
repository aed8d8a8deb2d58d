//! Codegen options.

use serde::{Deserialize, Serialize};

/// Options for code generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenOptions {
    /// Namespace that constructor and `Text` calls are qualified with
    #[serde(default)]
    pub package: Option<String>,
}

impl CodegenOptions {
    /// Options qualifying calls with `package`
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
        }
    }

    /// The `<package>.` prefix, empty when no package is set
    #[inline]
    pub fn qualifier(&self) -> String {
        match self.package.as_deref() {
            Some(package) if !package.is_empty() => format!("{package}."),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifier() {
        assert_eq!(CodegenOptions::default().qualifier(), "");
        assert_eq!(CodegenOptions::with_package("").qualifier(), "");
        assert_eq!(CodegenOptions::with_package("h").qualifier(), "h.");
    }
}
