//! Simulated environmental sensor
//!
//! Produces plausible temperature, humidity and pressure values so the
//! logging path can be exercised on boards without a real sensor attached.

use anyhow::Result;
use pi_panels_core::{DataSource, SourceMetadata};
use pi_panels_types::EnvReading;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::time::Duration;

const TEMPERATURE_RANGE: RangeInclusive<f64> = 15.0..=35.0;
const HUMIDITY_RANGE: RangeInclusive<f64> = 30.0..=90.0;
const PRESSURE_RANGE: RangeInclusive<f64> = 900.0..=1100.0;

pub struct SimulatedEnvSource {
    metadata: SourceMetadata,
    rng: StdRng,
    reading: Option<EnvReading>,
    values: HashMap<String, Value>,
}

impl SimulatedEnvSource {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence of readings
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            metadata: SourceMetadata {
                id: "simulated_env".to_string(),
                name: "Simulated Environment Sensor".to_string(),
                description: "Random temperature, humidity and pressure".to_string(),
                available_keys: vec![
                    "temperature".to_string(),
                    "humidity".to_string(),
                    "pressure".to_string(),
                ],
                default_interval: Duration::from_secs(5),
            },
            rng,
            reading: None,
            values: HashMap::with_capacity(3),
        }
    }

    /// Last generated reading
    pub fn reading(&self) -> Option<EnvReading> {
        self.reading
    }
}

impl Default for SimulatedEnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for SimulatedEnvSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn update(&mut self) -> Result<()> {
        let reading = EnvReading {
            temperature: self.rng.gen_range(TEMPERATURE_RANGE),
            humidity: self.rng.gen_range(HUMIDITY_RANGE),
            pressure: self.rng.gen_range(PRESSURE_RANGE),
        }
        .rounded();

        self.values.clear();
        self.values
            .insert("temperature".to_string(), Value::from(reading.temperature));
        self.values
            .insert("humidity".to_string(), Value::from(reading.humidity));
        self.values
            .insert("pressure".to_string(), Value::from(reading.pressure));
        self.reading = Some(reading);
        Ok(())
    }

    fn get_values(&self) -> HashMap<String, Value> {
        self.values.clone()
    }

    fn values_ref(&self) -> Option<&HashMap<String, Value>> {
        Some(&self.values)
    }
}
