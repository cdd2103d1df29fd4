// ============================================================================
// Domain Models Module
// Calculation records, the bounded history and its configuration
// ============================================================================

pub mod config;
pub mod history;
pub mod history_entry;

pub use config::{HistoryConfig, DEFAULT_MAX_ENTRIES};
pub use history::History;
pub use history_entry::HistoryEntry;
