use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Preferred Linux terminal emulator, `"default"` for the search order.
    #[serde(default = "default_terminal")]
    pub terminal: String,

    #[serde(default)]
    pub keep_open: bool,

    /// Extra variables for the terminal's environment.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Directories to put on `PATH`.
    #[serde(default)]
    pub path: Vec<String>,
}

fn default_terminal() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            terminal: default_terminal(),
            keep_open: false,
            env: BTreeMap::new(),
            path: Vec::new(),
        }
    }
}
