//! Brain configuration

use crate::core::{BrainError, BrainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Adjustments applied on top of the standard operation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrainConfig {
    /// Extra constants, keyed by symbol
    pub constants: BTreeMap<String, f64>,
    /// Standard symbols to remove
    pub disabled: Vec<String>,
    /// Maximum number of steps kept on a session tape
    pub tape_capacity: usize,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            constants: BTreeMap::new(),
            disabled: Vec::new(),
            tape_capacity: Self::DEFAULT_TAPE_CAPACITY,
        }
    }
}

impl BrainConfig {
    /// Default tape bound
    pub const DEFAULT_TAPE_CAPACITY: usize = 100;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document
    pub fn from_yaml_str(input: &str) -> BrainResult<Self> {
        serde_yaml_ng::from_str(input).map_err(|e| BrainError::Config(e.to_string()))
    }

    /// Parses a JSON document
    pub fn from_json_str(input: &str) -> BrainResult<Self> {
        serde_json::from_str(input).map_err(|e| BrainError::Config(e.to_string()))
    }

    /// Add a constant
    #[must_use]
    pub fn with_constant(mut self, symbol: impl Into<String>, value: f64) -> Self {
        self.constants.insert(symbol.into(), value);
        self
    }

    /// Disable a standard symbol
    #[must_use]
    pub fn with_disabled(mut self, symbol: impl Into<String>) -> Self {
        self.disabled.push(symbol.into());
        self
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrainConfig::default();
        assert!(config.constants.is_empty());
        assert!(config.disabled.is_empty());
        assert_eq!(config.tape_capacity, BrainConfig::DEFAULT_TAPE_CAPACITY);
        assert_eq!(config, BrainConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = BrainConfig::new()
            .with_constant("φ", 1.618)
            .with_disabled("mod")
            .with_tape_capacity(8);
        assert_eq!(config.constants.get("φ"), Some(&1.618));
        assert_eq!(config.disabled, vec!["mod".to_string()]);
        assert_eq!(config.tape_capacity, 8);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "constants:\n  φ: 1.618\n  c: 299792458\ndisabled:\n  - cos\ntape_capacity: 10\n";
        let config = BrainConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.constants.len(), 2);
        assert_eq!(config.constants.get("c"), Some(&299_792_458.0));
        assert_eq!(config.disabled, vec!["cos".to_string()]);
        assert_eq!(config.tape_capacity, 10);
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = BrainConfig::from_yaml_str("disabled: [sin]").unwrap();
        assert!(config.constants.is_empty());
        assert_eq!(config.tape_capacity, BrainConfig::DEFAULT_TAPE_CAPACITY);
    }

    #[test]
    fn test_from_json() {
        let config =
            BrainConfig::from_json_str(r#"{"constants": {"g": 9.81}, "tape_capacity": 3}"#)
                .unwrap();
        assert_eq!(config.constants.get("g"), Some(&9.81));
        assert_eq!(config.tape_capacity, 3);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(BrainConfig::from_json_str("{}").unwrap(), BrainConfig::new());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = BrainConfig::from_json_str(r#"{"precision": 4}"#).unwrap_err();
        assert!(matches!(err, BrainError::Config(_)));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = BrainConfig::from_yaml_str("constants: [1, 2").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_serde_roundtrip_json() {
        let config = BrainConfig::new().with_constant("k", 2.5).with_disabled("e");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BrainConfig::from_json_str(&json).unwrap(), config);
    }
}
