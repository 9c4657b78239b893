//! Stateless data helpers and the list transformer.

use serde_json::{Map, Value};

use crate::config::AppConfig;

/// Keys a payload must carry to pass [`DataProcessor::validate`]
pub const REQUIRED_KEYS: [&str; 2] = ["id", "name"];

/// Add two integers. Widened so no pair of `i64` inputs can overflow.
pub fn calculate_sum(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Keep only the maps that contain `filter_key`.
///
/// `None` or an empty key disables filtering.
pub fn process_data(items: Vec<Map<String, Value>>, filter_key: Option<&str>) -> Vec<Map<String, Value>> {
    match filter_key {
        Some(key) if !key.is_empty() => items
            .into_iter()
            .filter(|item| item.contains_key(key))
            .collect(),
        _ => items,
    }
}

/// Uppercases text items and counts how many items it has seen.
#[derive(Debug, Clone)]
pub struct DataProcessor {
    config: AppConfig,
    processed_count: usize,
}

impl DataProcessor {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            processed_count: 0,
        }
    }

    /// The config this processor was built with. Transform and validate do
    /// not consult it; it is carried for callers that need its settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Total items passed through [`transform`](Self::transform)
    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    /// Uppercase string items; other values pass through unchanged.
    pub fn transform(&mut self, items: Vec<Value>) -> Vec<Value> {
        self.processed_count += items.len();
        items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Value::String(s.to_uppercase()),
                other => other,
            })
            .collect()
    }

    /// Presence check for [`REQUIRED_KEYS`]. Values are not inspected.
    pub fn validate(&self, data: &Map<String, Value>) -> bool {
        REQUIRED_KEYS.iter().all(|key| data.contains_key(*key))
    }
}
