//! Engine configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::{EngineError, EngineResult};

/// Options controlling how an iterator tree is prepared and driven.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run the optimizer before evaluation.
    pub optimize: bool,
    /// Upper bound on optimizer passes over the root.
    pub max_optimize_passes: usize,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Stop after this many result bindings.
    pub result_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            optimize: true,
            max_optimize_passes: 10,
            log_filter: "info".into(),
            result_limit: None,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_optimize_passes == 0 {
            return Err(EngineError::InvalidConfig(
                "max_optimize_passes must be at least 1".into(),
            ));
        }
        if self.result_limit == Some(0) {
            return Err(EngineError::InvalidConfig(
                "result_limit must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }

    /// Set the optimize flag.
    pub fn optimize(mut self, value: bool) -> Self {
        self.optimize = value;
        self
    }

    /// Set the optimizer pass cap.
    pub fn max_optimize_passes(mut self, value: usize) -> Self {
        self.max_optimize_passes = value;
        self
    }

    /// Set the default log filter.
    pub fn log_filter(mut self, value: impl Into<String>) -> Self {
        self.log_filter = value.into();
        self
    }

    /// Set the result limit.
    pub fn result_limit(mut self, value: usize) -> Self {
        self.result_limit = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert!(config.optimize);
        assert_eq!(config.max_optimize_passes, 10);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.result_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"optimize": false, "result_limit": 5}"#).unwrap();
        assert!(!config.optimize);
        assert_eq!(config.result_limit, Some(5));
        assert_eq!(config.max_optimize_passes, 10);
    }

    #[test]
    fn test_from_json_rejects_zero_passes() {
        let err = EngineConfig::from_json(r#"{"max_optimize_passes": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = EngineConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_filter": "graphiter=debug"}}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter, "graphiter=debug");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = EngineConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .optimize(false)
            .max_optimize_passes(3)
            .log_filter("warn")
            .result_limit(7);
        assert_eq!(
            config,
            EngineConfig {
                optimize: false,
                max_optimize_passes: 3,
                log_filter: "warn".into(),
                result_limit: Some(7),
            }
        );
    }
}
