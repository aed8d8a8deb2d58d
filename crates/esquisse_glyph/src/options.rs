//! Output options for esquisse_glyph.

use serde::{Deserialize, Serialize};

/// Options for the emitted declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Name of the declared variable (default: `n`)
    #[serde(default = "default_binding")]
    pub binding: String,

    /// Print string literals with single quotes (default: false)
    #[serde(default)]
    pub single_quote: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            binding: default_binding(),
            single_quote: false,
        }
    }
}

fn default_binding() -> String {
    "n".to_string()
}
