//! Editor Configuration

use serde::{Deserialize, Serialize};

/// Editor configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Prefix for generated node ids
    pub id_prefix: String,

    /// Maximum nodes per document (`None` = unbounded)
    pub max_nodes: Option<usize>,

    /// Emit a warning for every refused drop
    pub log_rejections: bool,
}

impl Config {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: "node".to_string(),
            max_nodes: Some(5000),
            log_rejections: true,
        }
    }
}
