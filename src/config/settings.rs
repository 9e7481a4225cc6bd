use serde::{Deserialize, Serialize};

/// User preferences kept outside the script file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
}
