//! Network interface data source implementation

use anyhow::Result;
use once_cell::sync::Lazy;
use pi_panels_core::{
    DataSource, SourceError, SourceMetadata, BYTES_PER_KB, DEFAULT_POLL_INTERVAL,
};
use pi_panels_types::NetMonitorConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use sysinfo::Networks;

/// Shared Networks instance for all NetworkSource instances.
static SHARED_NETWORKS: Lazy<Mutex<Networks>> = Lazy::new(|| {
    log::info!("Creating shared Networks sysinfo instance");
    Mutex::new(Networks::new_with_refreshed_list())
});

/// Cumulative counters for one interface since boot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceStats {
    pub name: String,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
    pub errors_in: u64,
    pub errors_out: u64,
}

/// Keep either every interface or only the requested one
///
/// `all` is sorted by name in the result. Asking for an interface that is not
/// present is an error listing what is available.
pub fn select_interfaces(
    mut all: Vec<InterfaceStats>,
    interface: Option<&str>,
) -> Result<Vec<InterfaceStats>, SourceError> {
    all.sort_by(|a, b| a.name.cmp(&b.name));

    let Some(wanted) = interface else {
        return Ok(all);
    };

    if let Some(stats) = all.iter().find(|s| s.name == wanted) {
        return Ok(vec![stats.clone()]);
    }

    Err(SourceError::InterfaceNotFound {
        name: wanted.to_string(),
        available: all.into_iter().map(|s| s.name).collect(),
    })
}

/// Human readable byte count, e.g. "1.50 KB"
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if value < BYTES_PER_KB {
            return format!("{:.2} {}", value, unit);
        }
        value /= BYTES_PER_KB;
    }
    format!("{:.2} PB", value)
}

/// Network interface data source
///
/// Provides cumulative traffic counters for one or all interfaces.
pub struct NetworkSource {
    metadata: SourceMetadata,
    config: NetMonitorConfig,
    stats: Vec<InterfaceStats>,

    /// Cached output values - updated in update(), returned by reference in values_ref()
    values: HashMap<String, Value>,
}

impl NetworkSource {
    pub fn new(config: NetMonitorConfig) -> Self {
        let metadata = SourceMetadata {
            id: "network".to_string(),
            name: "Network Interfaces".to_string(),
            description: "Per-interface traffic and error counters".to_string(),
            available_keys: vec!["interfaces".to_string(), "interface_count".to_string()],
            default_interval: Duration::try_from_secs_f64(config.interval_secs)
                .unwrap_or(DEFAULT_POLL_INTERVAL),
        };

        Self {
            metadata,
            config,
            stats: Vec::new(),
            values: HashMap::with_capacity(2),
        }
    }

    pub fn config(&self) -> &NetMonitorConfig {
        &self.config
    }

    /// Counters from the last successful update
    pub fn stats(&self) -> &[InterfaceStats] {
        &self.stats
    }

    fn read_all() -> Result<Vec<InterfaceStats>> {
        let mut networks = SHARED_NETWORKS
            .lock()
            .map_err(|e| anyhow::anyhow!("Networks mutex poisoned: {}", e))?;
        networks.refresh();

        Ok(networks
            .iter()
            .map(|(name, data)| InterfaceStats {
                name: name.clone(),
                bytes_sent: data.total_transmitted(),
                bytes_received: data.total_received(),
                packets_sent: data.total_packets_transmitted(),
                packets_received: data.total_packets_received(),
                errors_in: data.total_errors_on_received(),
                errors_out: data.total_errors_on_transmitted(),
            })
            .collect())
    }

    fn store(&mut self, stats: Vec<InterfaceStats>) {
        self.values.clear();
        self.values
            .insert("interface_count".to_string(), Value::from(stats.len()));
        self.values.insert(
            "interfaces".to_string(),
            serde_json::to_value(&stats).unwrap_or(Value::Null),
        );
        self.stats = stats;
    }
}

impl DataSource for NetworkSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn update(&mut self) -> Result<()> {
        let all = Self::read_all()?;
        match select_interfaces(all, self.config.interface.as_deref()) {
            Ok(stats) => {
                self.store(stats);
                Ok(())
            }
            Err(e) => {
                self.store(Vec::new());
                Err(e.into())
            }
        }
    }

    fn get_values(&self) -> HashMap<String, Value> {
        self.values.clone()
    }

    fn values_ref(&self) -> Option<&HashMap<String, Value>> {
        Some(&self.values)
    }
}
