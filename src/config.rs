use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::model::TemperatureSeries;

/// The temperature tables for one scenario.
///
/// The default scenario is the classroom one this model ships with: a 60°C
/// cup placed on a 20°C counter, both converging on 30°C over 15 simulated
/// seconds. Alternate materials or starting temperatures are substituted by
/// supplying different tables, not by changing code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default = "default_cup_series")]
    pub cup_series: Vec<(u32, f64)>,
    #[serde(default = "default_counter_series")]
    pub counter_series: Vec<(u32, f64)>,
}

fn default_cup_series() -> Vec<(u32, f64)> {
    vec![
        (0, 60.0),
        (1, 53.0),
        (2, 48.0),
        (3, 44.0),
        (4, 41.0),
        (5, 39.0),
        (6, 37.0),
        (7, 35.5),
        (8, 34.0),
        (9, 32.8),
        (10, 31.8),
        (11, 31.2),
        (12, 30.8),
        (13, 30.5),
        (14, 30.2),
        (15, 30.0),
    ]
}

fn default_counter_series() -> Vec<(u32, f64)> {
    vec![
        (0, 20.0),
        (1, 23.0),
        (2, 25.0),
        (3, 26.5),
        (4, 27.3),
        (5, 27.8),
        (6, 28.2),
        (7, 28.5),
        (8, 28.8),
        (9, 29.1),
        (10, 29.3),
        (11, 29.5),
        (12, 29.7),
        (13, 29.8),
        (14, 29.9),
        (15, 30.0),
    ]
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            cup_series: default_cup_series(),
            counter_series: default_counter_series(),
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from JSON, falling back to the default scenario if
    /// the document is malformed. The model should always be able to run,
    /// even when its configuration source is broken.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            warn!("failed to parse scenario config (using defaults): {e}");
            Self::default()
        })
    }

    /// Validate the tables into the cup and counter series, in that order.
    pub fn build_series(&self) -> Result<(TemperatureSeries, TemperatureSeries)> {
        let cup = TemperatureSeries::new(self.cup_series.clone())?;
        let counter = TemperatureSeries::new(self.counter_series.clone())?;
        Ok((cup, counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_valid_series() {
        let (cup, counter) = ScenarioConfig::default().build_series().unwrap();
        assert_eq!(cup.lookup(0).unwrap(), 60.0);
        assert_eq!(cup.lookup(15).unwrap(), 30.0);
        assert_eq!(counter.lookup(0).unwrap(), 20.0);
        assert_eq!(counter.lookup(15).unwrap(), 30.0);
    }

    #[test]
    fn test_malformed_json_falls_back_to_defaults() {
        let config = ScenarioConfig::from_json("{ not json");
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_partial_json_fills_in_missing_table() {
        let config = ScenarioConfig::from_json(
            r#"{"cup_series": [[0, 90.0], [1, 80.0], [2, 72.0], [3, 66.0],
                               [4, 61.0], [5, 57.0], [6, 54.0], [7, 51.0],
                               [8, 49.0], [9, 47.0], [10, 45.0], [11, 44.0],
                               [12, 43.0], [13, 42.0], [14, 41.0], [15, 40.0]]}"#,
        );
        assert_eq!(config.cup_series[0], (0, 90.0));
        assert_eq!(config.counter_series, default_counter_series());
        assert!(config.build_series().is_ok());
    }

    #[test]
    fn test_bad_table_is_rejected_at_build() {
        let config = ScenarioConfig {
            cup_series: vec![(0, 60.0), (2, 48.0)],
            ..Default::default()
        };
        assert!(config.build_series().is_err());
    }
}
