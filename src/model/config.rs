use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from an optional `gantry.toml` next to the tasks file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Width of the task-name column in terminal cells.
    #[serde(default = "default_name_width")]
    pub name_width: u16,
    /// Color overrides as hex strings, e.g. `bar = "#4488FF"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            name_width: default_name_width(),
            colors: HashMap::new(),
        }
    }
}

fn default_name_width() -> u16 {
    26
}
