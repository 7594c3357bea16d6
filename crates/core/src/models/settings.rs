use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::guarantee::DEFAULT_POLICY_TERM_DAYS;

/// Host-supplied configuration. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The currency all values are displayed in (e.g., "BRL", "USD").
    pub display_currency: String,

    /// Baseline term for the guarantee progress percentage.
    pub policy_term_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "BRL".to_string(),
            policy_term_days: DEFAULT_POLICY_TERM_DAYS,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON object; absent keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
