use serde::{Deserialize, Serialize};

/// Fixed application settings shown by the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    pub debug: bool,
    pub max_connections: u32,
    pub timeout: u64,
    pub app_name: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            debug: true,
            max_connections: 100,
            timeout: 30,
            app_name: "Tooling Demo".to_string(),
        }
    }
}

/// Application settings used by the demo sequence.
pub fn get_config() -> DemoSettings {
    DemoSettings::default()
}
