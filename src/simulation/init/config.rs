use serde::{Deserialize, Serialize};

use crate::core::random::DEFAULT_SEED;

/// Upper bound on rows * cols accepted from a config (64 MiB of kinds)
const MAX_CELLS: u64 = 1 << 26;

/// Row order of the per-tick scan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanOrder {
    /// Last row first, so falling particles clear the way for those above
    #[default]
    BottomUp,
    TopDown,
}

impl ScanOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bottomUp" => Some(ScanOrder::BottomUp),
            "topDown" => Some(ScanOrder::TopDown),
            _ => None,
        }
    }
}

/// World settings, loadable from JSON:
///
/// ```json
/// { "rows": 120, "cols": 160, "seed": 7, "scanOrder": "bottomUp",
///   "alternateDirection": true, "colorVariation": false }
/// ```
///
/// Only `rows` and `cols` are required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    pub rows: u32,
    pub cols: u32,
    #[serde(default = "default_seed")]
    pub seed: u32,
    #[serde(default)]
    pub scan_order: ScanOrder,
    /// Flip the column scan direction every frame
    #[serde(default = "default_true")]
    pub alternate_direction: bool,
    /// Jitter placed particles' colors slightly
    #[serde(default)]
    pub color_variation: bool,
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

fn default_true() -> bool {
    true
}

impl SimConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            seed: DEFAULT_SEED,
            scan_order: ScanOrder::default(),
            alternate_direction: true,
            color_variation: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        if config.seed == 0 {
            config.seed = DEFAULT_SEED;
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!("grid must be at least 1x1, got {}x{}", self.rows, self.cols));
        }
        let cells = self.rows as u64 * self.cols as u64;
        if cells > MAX_CELLS {
            return Err(format!("grid too large: {} cells (max {})", cells, MAX_CELLS));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = SimConfig::from_json(r#"{"rows": 10, "cols": 20}"#).unwrap();
        assert_eq!(config, SimConfig::new(10, 20));
    }

    #[test]
    fn full_config_parses() {
        let json = r#"{
            "rows": 4, "cols": 5, "seed": 99, "scanOrder": "topDown",
            "alternateDirection": false, "colorVariation": true
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.scan_order, ScanOrder::TopDown);
        assert!(!config.alternate_direction);
        assert!(config.color_variation);
    }

    #[test]
    fn zero_seed_becomes_default() {
        let config = SimConfig::from_json(r#"{"rows": 1, "cols": 1, "seed": 0}"#).unwrap();
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn rejects_empty_and_oversized_grids() {
        assert!(SimConfig::from_json(r#"{"rows": 0, "cols": 5}"#).is_err());
        assert!(SimConfig::from_json(r#"{"rows": 100000, "cols": 100000}"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(SimConfig::from_json(r#"{"rows": 3}"#).is_err());
        assert!(SimConfig::from_json(r#"{"rows": 3, "cols": 3, "scanOrder": "sideways"}"#).is_err());
        assert!(SimConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_round_trip_keeps_settings() {
        let mut config = SimConfig::new(8, 9);
        config.scan_order = ScanOrder::TopDown;
        let back = SimConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn scan_order_names_match_json() {
        assert_eq!(ScanOrder::from_name("bottomUp"), Some(ScanOrder::BottomUp));
        assert_eq!(ScanOrder::from_name("topDown"), Some(ScanOrder::TopDown));
        assert_eq!(ScanOrder::from_name("TopDown"), None);
    }
}
