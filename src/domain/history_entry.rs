// ============================================================================
// History Entry Domain Model
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One recorded calculation.
///
/// Entries are immutable once created; the log only appends, evicts or
/// clears them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Operation tag chosen by the caller (e.g. "add", "calculate-ttc")
    pub operation: String,

    /// Operands, in the order they were supplied
    #[serde(deserialize_with = "deserialize_numbers")]
    pub inputs: Vec<f64>,

    /// Outcome of the calculation
    #[serde(deserialize_with = "deserialize_number")]
    pub result: f64,

    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(operation: impl Into<String>, inputs: Vec<f64>, result: f64) -> Self {
        Self::with_timestamp(operation, inputs, result, Utc::now())
    }

    /// Create an entry with a known timestamp.
    pub fn with_timestamp(
        operation: impl Into<String>,
        inputs: Vec<f64>,
        result: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            operation: operation.into(),
            inputs,
            result,
            timestamp,
        }
    }
}

// JSON has no NaN or infinities: serde_json writes them as `null`.
// Reading `null` back as NaN keeps such entries importable.

fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn deserialize_numbers<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let before = Utc::now();
        let entry = HistoryEntry::new("add", vec![2.0, 3.0], 5.0);
        let after = Utc::now();

        assert_eq!(entry.operation, "add");
        assert_eq!(entry.inputs, vec![2.0, 3.0]);
        assert_eq!(entry.result, 5.0);
        assert!(entry.timestamp >= before && entry.timestamp <= after);
    }

    #[test]
    fn test_serialized_field_names() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let entry = HistoryEntry::with_timestamp("multiply", vec![4.0, 2.5], 10.0, timestamp);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "operation": "multiply",
                "inputs": [4.0, 2.5],
                "result": 10.0,
                "timestamp": "2024-01-15T10:30:00Z"
            })
        );
    }

    #[test]
    fn test_null_numbers_read_as_nan() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "operation": "divide-error",
            "inputs": [10, null],
            "result": null,
            "timestamp": "2024-01-15T10:30:00.123Z"
        }))
        .unwrap();

        assert_eq!(entry.inputs[0], 10.0);
        assert!(entry.inputs[1].is_nan());
        assert!(entry.result.is_nan());
        assert_eq!(entry.timestamp.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let parsed: Result<HistoryEntry, _> = serde_json::from_value(json!({
            "operation": "add",
            "inputs": [1, 2],
            "timestamp": "2024-01-15T10:30:00Z"
        }));
        assert!(parsed.is_err());
    }
}
