//! Calculator configuration

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// What a division by zero produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionByZeroPolicy {
    /// The result is `0`
    #[default]
    Zero,
    /// The calculation fails and the calculator shows an error until the next input
    Error,
}

/// Configuration for a [`Calculator`](crate::core::Calculator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Division by zero behaviour
    pub division_by_zero: DivisionByZeroPolicy,
    /// Number of completed calculations kept in history
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_by_zero: DivisionByZeroPolicy::default(),
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Default history size
    pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the division by zero policy
    #[must_use]
    pub fn with_division_by_zero(mut self, policy: DivisionByZeroPolicy) -> Self {
        self.division_by_zero = policy;
        self
    }

    /// Sets the history capacity
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::Config(e.to_string()))
    }

    /// Serializes the configuration to JSON
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string(self).map_err(|e| CalcError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.division_by_zero, DivisionByZeroPolicy::Zero);
        assert_eq!(
            config.history_capacity,
            CalculatorConfig::DEFAULT_HISTORY_CAPACITY
        );
    }

    #[test]
    fn test_builder() {
        let config = CalculatorConfig::new()
            .with_division_by_zero(DivisionByZeroPolicy::Error)
            .with_history_capacity(3);
        assert_eq!(config.division_by_zero, DivisionByZeroPolicy::Error);
        assert_eq!(config.history_capacity, 3);
    }

    #[test]
    fn test_from_json_partial() {
        let config = CalculatorConfig::from_json(r#"{"division_by_zero":"error"}"#).unwrap();
        assert_eq!(config.division_by_zero, DivisionByZeroPolicy::Error);
        assert_eq!(
            config.history_capacity,
            CalculatorConfig::DEFAULT_HISTORY_CAPACITY
        );
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let result = CalculatorConfig::from_json(r#"{"division_by_zero":"nan"}"#);
        assert!(matches!(result, Err(CalcError::Config(_))));
    }

    #[test]
    fn test_to_json() {
        let json = CalculatorConfig::default().to_json().unwrap();
        assert!(json.contains("\"division_by_zero\":\"zero\""));
        assert!(json.contains("\"history_capacity\":50"));
    }
}
