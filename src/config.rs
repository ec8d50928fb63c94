use serde::{Deserialize, Serialize};

/// Starting values of the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub width: i64,
    pub height: i64,
    pub ratio: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            width: 1920,
            height: 1080,
            ratio: "16:9".to_string(),
        }
    }
}
