use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{GameError, GameResult};

/// Distance of each wall of the ring from the matching board edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderOffset {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Default for BorderOffset {
    fn default() -> Self {
        Self {
            top: 4,
            bottom: 2,
            left: 2,
            right: 2,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in cells
    pub board_width: usize,
    /// Height of the board in cells
    pub board_height: usize,
    /// Position of the wall ring
    pub border_offset: BorderOffset,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Food items needed per level
    pub food_per_level: u32,
    /// Chance of a buggybug appearing next to new food
    pub buggy_bug_chance: f64,
    /// Buggybugs only appear once the level is above this value
    pub buggy_bug_min_level: u32,
    /// Level forced on the end screen to intensify the glitch effect
    pub end_glitch_level: u32,

    /// Frames per second outside of play
    pub idle_fps: u32,
    /// Added to the level to get the play frame rate
    pub base_play_fps: u32,
    /// Extra frames per second while in tron mode
    pub tron_fps_bonus: u32,

    /// Delay before the controls hint is shown, in milliseconds
    pub hint_delay_ms: u64,
    /// Input is ignored this long after a collision, in milliseconds
    pub input_pause_ms: u64,
    /// Delay between dismissing the end screen and the new game, in milliseconds
    pub restart_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 30,
            board_height: 30,
            border_offset: BorderOffset::default(),
            initial_snake_length: 5,
            food_per_level: 5,
            buggy_bug_chance: 0.3,
            buggy_bug_min_level: 2,
            end_glitch_level: 50,
            idle_fps: 20,
            base_play_fps: 4,
            tron_fps_bonus: 3,
            hint_delay_ms: 5000,
            input_pause_ms: 500,
            restart_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Column of the left wall
    pub fn left_wall_x(&self) -> usize {
        self.border_offset.left
    }

    /// Column of the right wall
    pub fn right_wall_x(&self) -> usize {
        self.board_width - self.border_offset.right - 1
    }

    /// Row of the top wall
    pub fn top_wall_y(&self) -> usize {
        self.border_offset.top
    }

    /// Row of the bottom wall
    pub fn bottom_wall_y(&self) -> usize {
        self.board_height - self.border_offset.bottom - 1
    }

    pub fn hint_delay(&self) -> Duration {
        Duration::from_millis(self.hint_delay_ms)
    }

    pub fn input_pause(&self) -> Duration {
        Duration::from_millis(self.input_pause_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// Check that the board can hold the wall ring, the snake and some food
    pub fn validate(&self) -> GameResult<()> {
        let border = self.border_offset;

        if border.left + border.right + 5 > self.board_width {
            return Err(GameError::InvalidConfig(format!(
                "board width {} leaves no room inside the walls",
                self.board_width
            )));
        }
        if border.top + border.bottom + 5 > self.board_height {
            return Err(GameError::InvalidConfig(format!(
                "board height {} leaves no room inside the walls",
                self.board_height
            )));
        }

        // The snake starts horizontally, ending one cell left of the centre
        let head_x = self.board_width / 2;
        let head_y = self.board_height / 2;
        if self.initial_snake_length == 0 || self.initial_snake_length > head_x {
            return Err(GameError::InvalidConfig(format!(
                "initial snake length {} does not fit on the board",
                self.initial_snake_length
            )));
        }
        let tail_x = head_x - self.initial_snake_length;
        if tail_x <= self.left_wall_x()
            || head_y <= self.top_wall_y()
            || head_y >= self.bottom_wall_y()
        {
            return Err(GameError::InvalidConfig(
                "initial snake would overlap the walls".to_string(),
            ));
        }

        if self.food_per_level == 0 {
            return Err(GameError::InvalidConfig(
                "food_per_level must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.buggy_bug_chance) {
            return Err(GameError::InvalidConfig(format!(
                "buggy_bug_chance {} must be between 0.0 and 1.0",
                self.buggy_bug_chance
            )));
        }
        if self.idle_fps == 0 {
            return Err(GameError::InvalidConfig(
                "idle_fps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 30);
        assert_eq!(config.board_height, 30);
        assert_eq!(config.initial_snake_length, 5);
        assert_eq!(config.border_offset.top, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wall_coordinates() {
        let config = GameConfig::default();
        assert_eq!(config.left_wall_x(), 2);
        assert_eq!(config.right_wall_x(), 27);
        assert_eq!(config.top_wall_y(), 4);
        assert_eq!(config.bottom_wall_y(), 27);
    }

    #[test]
    fn test_thin_border_config_is_valid() {
        let config = GameConfig {
            board_width: 12,
            board_height: 12,
            border_offset: BorderOffset {
                top: 1,
                bottom: 1,
                left: 1,
                right: 1,
            },
            initial_snake_length: 3,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_narrow_board_rejected() {
        let config = GameConfig {
            board_width: 6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_snake_too_long_rejected() {
        let config = GameConfig {
            initial_snake_length: 14,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"board_width": 40}"#).unwrap();
        assert_eq!(config.board_width, 40);
        assert_eq!(config.board_height, 30);
        assert_eq!(config.hint_delay(), Duration::from_millis(5000));
    }
}
