//! Calculator configuration
//!
//! Configuration can be built in code or loaded from JSON:
//!
//! ```
//! use profit_math::{CalculatorConfig, EmptyInputPolicy};
//!
//! let config = CalculatorConfig::from_json(r#"{ "empty_input": "return_zero" }"#).unwrap();
//! assert_eq!(config.empty_input, EmptyInputPolicy::ReturnZero);
//! ```

use crate::{ProfitError, Result};
use serde::{Deserialize, Serialize};

/// What to do when asked for the profit of an empty price sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyInputPolicy {
    /// Fail with `ProfitError::EmptyInput`
    #[default]
    Reject,
    /// Treat the empty sequence as having no profitable transaction
    ReturnZero,
}

/// Settings for a `MaxProfitCalculator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Empty input handling
    pub empty_input: EmptyInputPolicy,
}

impl CalculatorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ProfitError::InvalidConfig(e.to_string()))
    }

    /// Set the empty input policy
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }
}
