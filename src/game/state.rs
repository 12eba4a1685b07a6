use std::collections::VecDeque;

use super::action::Direction;
use super::board::Board;
use super::config::GameConfig;
use super::snake::Snake;
use super::timer::Timers;

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one step in a direction, wrapping around the board edges
    pub fn wrapped_step(&self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(width as i32),
            y: (self.y + dy).rem_euclid(height as i32),
        }
    }

    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// How the tail behaves while moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Tail follows the head
    Snake,
    /// Tail frozen while the bonus countdown runs
    Sticky,
    /// Tail never moves; every tick grows the snake
    Tron,
}

/// Top-level screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Play,
    Pause,
    End,
}

/// Complete game state
///
/// Exclusively owned by the driver, mutated in place by the engine and read
/// by the renderer between ticks.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub snake: Snake,
    pub direction: Direction,
    pub input_buffer: VecDeque<Direction>,
    pub board: Board,
    pub score: u32,
    pub hiscore: u32,
    pub level: u32,
    pub mode: Mode,
    /// Length the snake shrinks back to after sticky/tron growth
    pub prev_length: Option<usize>,
    /// Number of tail segments currently fading
    pub glitched_length: usize,
    pub food_eaten: u32,
    /// Bonus countdown; -1 when there is no buggybug and no sticky bonus
    pub buggy_bug_time_left: i32,
    /// Input is ignored while set
    pub pause_input: bool,
    pub show_hint: bool,
    pub timers: Timers,
}

impl GameState {
    /// Create a fresh game: empty walled board, snake in the middle, menu screen
    pub fn new(config: &GameConfig, hiscore: u32) -> Self {
        let head = Position::new(
            (config.board_width / 2) as i32 - 1,
            (config.board_height / 2) as i32,
        );

        Self {
            phase: Phase::Menu,
            snake: Snake::horizontal(head, config.initial_snake_length),
            direction: Direction::Right,
            input_buffer: VecDeque::new(),
            board: Board::new(config),
            score: 0,
            hiscore,
            level: 1,
            mode: Mode::Snake,
            prev_length: None,
            glitched_length: 0,
            food_eaten: 0,
            buggy_bug_time_left: -1,
            pause_input: false,
            show_hint: false,
            timers: Timers::default(),
        }
    }

    pub fn board_width(&self) -> usize {
        self.board.width()
    }

    pub fn board_height(&self) -> usize {
        self.board.height()
    }

    /// Target frame rate for the tick driver
    pub fn frames_per_second(&self, config: &GameConfig) -> u32 {
        if self.phase != Phase::Play {
            return config.idle_fps;
        }

        let mut fps = self.level + config.base_play_fps;
        if self.mode == Mode::Tron {
            fps += config.tron_fps_bonus;
        }
        fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_wrapping_uses_width_and_height() {
        let (w, h) = (30, 20);
        assert_eq!(
            Position::new(29, 3).wrapped_step(Direction::Right, w, h),
            Position::new(0, 3)
        );
        assert_eq!(
            Position::new(0, 3).wrapped_step(Direction::Left, w, h),
            Position::new(29, 3)
        );
        assert_eq!(
            Position::new(4, 19).wrapped_step(Direction::Down, w, h),
            Position::new(4, 0)
        );
        assert_eq!(
            Position::new(4, 0).wrapped_step(Direction::Up, w, h),
            Position::new(4, 19)
        );
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(2, 3);
        assert_eq!(a.manhattan_distance(Position::new(5, 1)), 5);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_new_state() {
        let config = GameConfig::default();
        let state = GameState::new(&config, 42);

        assert_eq!(state.phase, Phase::Menu);
        assert_eq!(state.hiscore, 42);
        assert_eq!(state.level, 1);
        assert_eq!(state.mode, Mode::Snake);
        assert_eq!(state.buggy_bug_time_left, -1);
        assert_eq!(state.snake.len(), 5);
        assert_eq!(state.snake.head(), Some(Position::new(14, 15)));
        assert_eq!(state.snake.tail(), Some(Position::new(10, 15)));
    }

    #[test]
    fn test_frames_per_second() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        assert_eq!(state.frames_per_second(&config), 20);

        state.phase = Phase::Play;
        state.level = 3;
        assert_eq!(state.frames_per_second(&config), 7);

        state.mode = Mode::Tron;
        assert_eq!(state.frames_per_second(&config), 10);
    }
}
