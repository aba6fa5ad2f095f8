use serde::{Deserialize, Serialize};

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub columns: usize,
    /// Height of the game grid in cells
    pub rows: usize,
    /// Base speed in ticks per second
    pub base_speed: u32,
    /// Speed gained each time the ramp triggers
    pub speed_increment: u32,
    /// Points between speed increases
    pub speed_increment_every: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 20,
            base_speed: 8,
            speed_increment: 2,
            speed_increment_every: 5,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size and base speed
    pub fn new(columns: usize, rows: usize, base_speed: u32) -> Self {
        Self {
            columns,
            rows,
            base_speed,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10, 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 30);
        assert_eq!(config.rows, 20);
        assert_eq!(config.base_speed, 8);
        assert_eq!(config.speed_increment, 2);
        assert_eq!(config.speed_increment_every, 5);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15, 12);
        assert_eq!(config.columns, 15);
        assert_eq!(config.rows, 15);
        assert_eq!(config.base_speed, 12);
        // Ramp tunables keep their defaults
        assert_eq!(config.speed_increment_every, 5);
    }
}
