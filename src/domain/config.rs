// ============================================================================
// History Configuration
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Number of entries a history keeps when no capacity is given
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Configuration for a calculation history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of entries kept; the oldest is evicted beyond this
    pub max_entries: usize,
}

impl HistoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the capacity
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_entries == 0 {
            return Err(CalcError::InvalidArgument(
                "History capacity must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::new();
        assert_eq!(config.max_entries, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HistoryConfig::new().with_max_entries(5);
        assert_eq!(config.max_entries, 5);
    }

    #[test]
    fn test_validation() {
        let config = HistoryConfig::new().with_max_entries(0);
        assert_eq!(
            config.validate(),
            Err(CalcError::InvalidArgument(
                "History capacity must be positive"
            ))
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: HistoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HistoryConfig::default());

        let config: HistoryConfig = serde_json::from_str(r#"{"max_entries": 7}"#).unwrap();
        assert_eq!(config.max_entries, 7);
    }
}
