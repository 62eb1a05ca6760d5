// config.rs - Simulation parameters

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Reference deployment: a 48x35 board advancing every 150 ms
pub const DEFAULT_GRID_WIDTH: usize = 48;
pub const DEFAULT_GRID_HEIGHT: usize = 35;
pub const DEFAULT_UPDATE_INTERVAL_MILLIS: u64 = 150;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Number of columns on the torus.
    pub grid_width: usize,
    /// Number of rows on the torus.
    pub grid_height: usize,
    /// Period between generations while running.
    pub update_interval_millis: u64,
    /// Stop the clock when a generation repeats one of the recent ones.
    pub stop_on_cycle: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            update_interval_millis: DEFAULT_UPDATE_INTERVAL_MILLIS,
            stop_on_cycle: false,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.grid_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.update_interval_millis == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.grid_width.checked_mul(self.grid_height).is_none() {
            return Err(ConfigError::TooManyCells {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_board() {
        let cfg = LifeConfig::default();
        assert_eq!(cfg.grid_width, 48);
        assert_eq!(cfg.grid_height, 35);
        assert_eq!(cfg.update_interval(), Duration::from_millis(150));
        assert!(!cfg.stop_on_cycle);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let cfg = LifeConfig { grid_width: 0, ..LifeConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWidth));

        let cfg = LifeConfig { grid_height: 0, ..LifeConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroHeight));

        let cfg = LifeConfig { update_interval_millis: 0, ..LifeConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroInterval));

        let cfg = LifeConfig { grid_width: usize::MAX, grid_height: 2, ..LifeConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::TooManyCells { .. })));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: LifeConfig = serde_json::from_str(r#"{ "grid_width": 20 }"#)
            .expect("partial config should parse");
        assert_eq!(cfg.grid_width, 20);
        assert_eq!(cfg.grid_height, DEFAULT_GRID_HEIGHT);
        assert_eq!(cfg.update_interval_millis, DEFAULT_UPDATE_INTERVAL_MILLIS);
    }
}
