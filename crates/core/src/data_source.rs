//! Data source trait and related types

use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Metadata about a data source
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Unique identifier for this source type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this source provides
    pub description: String,
    /// Available data keys this source provides
    pub available_keys: Vec<String>,
    /// Recommended update interval
    pub default_interval: Duration,
}

/// Trait for all data sources
///
/// Data sources read one piece of system state (a thermal zone, network
/// counters, a sensor) and expose it as a flat key/value map that the UI
/// or a terminal printer can format.
pub trait DataSource: Send {
    /// Get metadata about this source
    fn metadata(&self) -> &SourceMetadata;

    /// Update internal state
    ///
    /// This is called periodically based on the update interval.
    /// It runs on the caller's thread and should be quick.
    fn update(&mut self) -> Result<()>;

    /// Get current data values
    ///
    /// Returns a map of key -> value pairs. Keys should match
    /// those listed in metadata().available_keys.
    fn get_values(&self) -> HashMap<String, Value>;

    /// Get a reference to the internal values HashMap (if available)
    ///
    /// Sources that keep their output in a HashMap can return it here to
    /// avoid a clone per access.
    fn values_ref(&self) -> Option<&HashMap<String, Value>> {
        None
    }

    /// Get a specific value by key
    fn get_value(&self, key: &str) -> Option<Value> {
        if let Some(values) = self.values_ref() {
            values.get(key).cloned()
        } else {
            self.get_values().get(key).cloned()
        }
    }

    /// Check if this source is available on the current system
    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        metadata: SourceMetadata,
        ticks: u64,
    }

    impl DataSource for Fixed {
        fn metadata(&self) -> &SourceMetadata {
            &self.metadata
        }

        fn update(&mut self) -> Result<()> {
            self.ticks += 1;
            Ok(())
        }

        fn get_values(&self) -> HashMap<String, Value> {
            let mut values = HashMap::new();
            values.insert("ticks".to_string(), Value::from(self.ticks));
            values
        }
    }

    #[test]
    fn test_get_value_falls_back_to_get_values() {
        let mut source: Box<dyn DataSource> = Box::new(Fixed {
            metadata: SourceMetadata {
                id: "fixed".to_string(),
                name: "Fixed".to_string(),
                description: String::new(),
                available_keys: vec!["ticks".to_string()],
                default_interval: Duration::from_secs(1),
            },
            ticks: 0,
        });

        source.update().unwrap();
        source.update().unwrap();
        assert_eq!(source.get_value("ticks"), Some(Value::from(2u64)));
        assert_eq!(source.get_value("missing"), None);
        assert!(source.is_available());
    }
}
