// ============================================================================
// Calculation History
// Bounded FIFO log of calculation records with JSON export/import
// ============================================================================

use std::collections::VecDeque;

use serde_json::Value;

use super::config::{HistoryConfig, DEFAULT_MAX_ENTRIES};
use super::HistoryEntry;
use crate::numeric::{CalcError, CalcResult};

/// Capped, insertion-ordered log of calculations.
///
/// Holds at most `capacity` entries. Saving into a full log evicts the
/// single oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    /// Oldest entry at the front, newest at the back
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl History {
    /// Create a history with the default capacity (100 entries).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Create a history holding at most `max_entries` entries.
    ///
    /// A capacity of zero is accepted and keeps nothing; use
    /// [`History::from_config`] to reject it.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(DEFAULT_MAX_ENTRIES) + 1),
            max_entries,
        }
    }

    /// Create a history from a validated configuration.
    pub fn from_config(config: &HistoryConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.max_entries))
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Record a calculation stamped with the current time.
    pub fn save(&mut self, operation: impl Into<String>, inputs: Vec<f64>, result: f64) {
        let entry = HistoryEntry::new(operation, inputs, result);
        tracing::debug!(
            operation = %entry.operation,
            result = entry.result,
            "history entry saved"
        );
        self.entries.push_back(entry);

        if self.entries.len() > self.max_entries {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(
                    operation = %evicted.operation,
                    capacity = self.max_entries,
                    "oldest history entry evicted"
                );
            }
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        tracing::debug!(removed = self.entries.len(), "history cleared");
        self.entries.clear();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Copy of all entries, oldest first.
    pub fn get_all(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Most recently saved entry.
    pub fn get_last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries whose operation tag equals `operation` exactly, oldest first.
    pub fn get_by_operation(&self, operation: &str) -> Vec<HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.operation == operation)
            .cloned()
            .collect()
    }

    /// Borrowing iterator over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    #[inline]
    pub fn get_size(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    // ========================================================================
    // Export / Import
    // ========================================================================

    /// Serialize all entries as a pretty-printed JSON array.
    pub fn export(&self) -> String {
        // Serializing plain structs with string keys into a String cannot fail
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| String::from("[]"))
    }

    /// Replace the log with the entries of a JSON array produced by
    /// [`History::export`].
    ///
    /// If the payload holds more entries than the capacity, only the most
    /// recent ones are kept.
    ///
    /// # Errors
    /// Returns `ImportError` if the text is not valid JSON, the top level is
    /// not an array, or an element is not a valid entry. The current entries
    /// are left untouched on error.
    pub fn import(&mut self, json_data: &str) -> CalcResult<()> {
        let mut entries = Self::parse_entries(json_data).map_err(|reason| {
            tracing::warn!(%reason, "history import failed");
            CalcError::ImportError(reason)
        })?;

        if entries.len() > self.max_entries {
            let dropped = entries.len() - self.max_entries;
            tracing::warn!(
                dropped,
                capacity = self.max_entries,
                "imported history exceeds capacity, keeping most recent entries"
            );
            entries.drain(..dropped);
        }

        tracing::debug!(count = entries.len(), "history replaced by import");
        self.entries = entries.into();
        Ok(())
    }

    fn parse_entries(json_data: &str) -> Result<Vec<HistoryEntry>, String> {
        let data: Value = serde_json::from_str(json_data).map_err(|e| e.to_string())?;
        if !data.is_array() {
            return Err("Invalid data format".to_string());
        }
        serde_json::from_value(data).map_err(|e| e.to_string())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
