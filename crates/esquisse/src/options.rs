//! Pipeline options.

use serde::{Deserialize, Serialize};

use esquisse_armature::BuildOptions;
use esquisse_atelier::{CodegenOptions, SetterRegistry};
use esquisse_glyph::FormatOptions;

/// Options for a full transpile run, split per stage by the accessors below
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspileOptions {
    /// Qualify constructor and `Text` calls with `<package>.`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Root the output at the single node inside the body
    #[serde(default)]
    pub children_only: bool,

    /// Declared variable name (default: `n`)
    #[serde(default = "default_binding")]
    pub binding: String,

    /// Print string literals with single quotes
    #[serde(default)]
    pub single_quote: bool,

    /// Extra setter names on top of the builtin table
    #[serde(default)]
    pub setters: Vec<String>,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            package: None,
            children_only: false,
            binding: default_binding(),
            single_quote: false,
            setters: Vec::new(),
        }
    }
}

fn default_binding() -> String {
    "n".to_string()
}

impl TranspileOptions {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            children_only: self.children_only,
        }
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            package: self.package.clone().filter(|p| !p.is_empty()),
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            binding: self.binding.clone(),
            single_quote: self.single_quote,
        }
    }

    /// Builtin setters plus [`Self::setters`]
    pub fn registry(&self) -> SetterRegistry {
        SetterRegistry::builtin().with_setters(&self.setters)
    }
}
