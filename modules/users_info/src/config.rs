use serde::{Deserialize, Serialize};

/// How strictly user input is checked on creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Enforce field constraints and fail fast on violation.
    #[default]
    Strict,
    /// Store fields verbatim; creation never fails.
    Off,
}

/// Configuration for the users_info module
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UsersInfoConfig {
    #[serde(default)]
    pub validation: ValidationMode,
    #[serde(default = "default_normalize_email")]
    pub normalize_email: bool,
}

impl Default for UsersInfoConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::default(),
            normalize_email: default_normalize_email(),
        }
    }
}

fn default_normalize_email() -> bool {
    true
}
