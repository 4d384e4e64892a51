use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Result, bail, ensure};

use super::action::Direction;
use super::state::Position;

/// Side length of the square board
pub const GRID_SIZE: usize = 12;

/// Milliseconds between simulation ticks
pub const TICK_INTERVAL_MS: u64 = 150;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width and height of the square game grid
    pub grid_size: usize,
    /// Starting body, head first
    pub initial_snake: Vec<Position>,
    /// Direction of travel at the start of every game
    pub initial_direction: Direction,
    /// Time between ticks while running
    pub tick_interval_ms: u64,
    /// Seed for food placement; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_snake: vec![
                Position::new(5, 6),
                Position::new(4, 6),
                Position::new(3, 6),
            ],
            initial_direction: Direction::Right,
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.grid_size)
    }

    /// Reject layouts the engine cannot start from.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size > 0, "grid size must be positive");
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");
        ensure!(
            self.initial_snake.len() >= 3,
            "initial snake needs at least 3 cells, got {}",
            self.initial_snake.len()
        );
        ensure!(
            self.initial_snake.len() < self.cell_count(),
            "initial snake leaves no room for food on a {0}x{0} grid",
            self.grid_size
        );

        let mut seen = HashSet::new();
        for &pos in &self.initial_snake {
            ensure!(self.contains(pos), "initial snake cell {pos} is off the grid");
            ensure!(seen.insert(pos), "initial snake visits {pos} twice");
        }

        for pair in self.initial_snake.windows(2) {
            if pair[0].manhattan_distance(pair[1]) != 1 {
                bail!("initial snake is broken between {} and {}", pair[0], pair[1]);
            }
        }

        let (dx, dy) = self.initial_direction.delta();
        let head = self.initial_snake[0];
        ensure!(
            self.initial_snake[1] != head.moved_by(dx, dy),
            "initial direction {:?} points back into the snake",
            self.initial_direction
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.initial_snake.len(), 3);
        assert_eq!(config.initial_snake[0], Position::new(5, 6));
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.tick_interval(), Duration::from_millis(150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_contains() {
        let config = GameConfig::default();
        assert!(config.contains(Position::new(0, 0)));
        assert!(config.contains(Position::new(11, 11)));
        assert!(!config.contains(Position::new(-1, 0)));
        assert!(!config.contains(Position::new(12, 0)));
        assert!(!config.contains(Position::new(0, 12)));
    }

    #[test]
    fn test_rejects_short_snake() {
        let config = GameConfig {
            initial_snake: vec![Position::new(5, 6), Position::new(4, 6)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_broken_snake() {
        let config = GameConfig {
            initial_snake: vec![Position::new(5, 6), Position::new(4, 6), Position::new(2, 6)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_snake_off_grid() {
        let config = GameConfig {
            grid_size: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_direction_into_neck() {
        let config = GameConfig {
            initial_direction: Direction::Left,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_full_board() {
        let config = GameConfig {
            grid_size: 2,
            initial_snake: vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(0, 1),
            ],
            initial_direction: Direction::Left,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
