//! Tree builder options.

use serde::{Deserialize, Serialize};

/// Options for building the call tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Skip the `Body` wrapper and root the tree at the single node inside it
    #[serde(default)]
    pub children_only: bool,
}
