use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

use super::{
    action::InputAction,
    audio::AudioCue,
    board::{Cell, Tile},
    config::GameConfig,
    error::GameResult,
    placement::{EdibleKind, place_edible},
    scoring,
    state::{GameState, Mode, Phase, Position},
    timer::TimerPurpose,
};
use crate::persistence::HighScoreStore;

/// Tail segments that fade while the snake shrinks back after a bonus
const PLAY_GLITCH_LENGTH: usize = 10;

/// Tail segments that fade during the end screen dissolve
const END_GLITCH_LENGTH: usize = 20;

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall that was not glitched
    Wall,
    /// Snake hit a live segment of itself
    SelfCollision,
}

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// What the head ate this step
    pub ate: Option<EdibleKind>,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepResult {
    /// Sound cues raised during the step, in order
    pub cues: Vec<AudioCue>,
    /// Whether the game ended this step
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// What the driver should do after an input was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The action had no effect in the current state
    Ignored,
    /// The action changed the game state
    Handled,
    /// Audio should be muted or unmuted
    ToggleMute,
}

/// The game engine that handles all game logic
pub struct GameEngine<S: HighScoreStore> {
    config: GameConfig,
    rng: StdRng,
    store: S,
}

impl<S: HighScoreStore> GameEngine<S> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig, store: S) -> GameResult<Self> {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Create an engine whose random choices are reproducible
    pub fn with_seed(config: GameConfig, store: S, seed: u64) -> GameResult<Self> {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: S, rng: StdRng) -> GameResult<Self> {
        config.validate()?;
        Ok(Self { config, rng, store })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build a fresh game on the menu screen
    pub fn new_game(&mut self) -> GameResult<GameState> {
        let mut state = GameState::new(&self.config, self.store.read());
        state
            .timers
            .arm(TimerPurpose::Hint, self.config.hint_delay());
        place_edible(&mut state, EdibleKind::Food, &mut self.rng)?;

        debug!(hiscore = state.hiscore, "new game");
        Ok(state)
    }

    /// Advance the game by one frame
    pub fn tick(&mut self, state: &mut GameState) -> GameResult<StepResult> {
        match state.phase {
            Phase::Play => self.update(state),
            Phase::End => Ok(self.game_over_update(state)),
            Phase::Menu | Phase::Pause => Ok(StepResult::default()),
        }
    }

    /// Apply one action from the input source
    pub fn handle_input(&mut self, state: &mut GameState, action: InputAction) -> InputOutcome {
        if state.pause_input {
            return InputOutcome::Ignored;
        }

        match action {
            InputAction::Mute => InputOutcome::ToggleMute,
            InputAction::Pause => {
                if state.phase == Phase::Play {
                    state.phase = Phase::Pause;
                    InputOutcome::Handled
                } else {
                    InputOutcome::Ignored
                }
            }
            InputAction::Move(_) | InputAction::Start => match state.phase {
                Phase::End => {
                    // Crank up the glitch effect until the new game starts
                    state.level = self.config.end_glitch_level;
                    state
                        .timers
                        .arm(TimerPurpose::Restart, self.config.restart_delay());
                    InputOutcome::Handled
                }
                Phase::Menu | Phase::Pause => {
                    state.phase = Phase::Play;
                    state.show_hint = false;
                    state.timers.cancel(TimerPurpose::Hint);
                    if let InputAction::Move(direction) = action {
                        state.input_buffer.push_back(direction);
                    }
                    InputOutcome::Handled
                }
                Phase::Play => match action {
                    InputAction::Move(direction) => {
                        state.input_buffer.push_back(direction);
                        InputOutcome::Handled
                    }
                    _ => InputOutcome::Ignored,
                },
            },
        }
    }

    /// Move the deferred-action clock forward and run whatever fired
    ///
    /// Returns true when a restart replaced the state with a fresh game.
    pub fn advance_timers(&mut self, state: &mut GameState, elapsed: Duration) -> GameResult<bool> {
        for purpose in state.timers.advance(elapsed) {
            match purpose {
                TimerPurpose::Hint => state.show_hint = true,
                TimerPurpose::InputPause => state.pause_input = false,
                TimerPurpose::Restart => {
                    // The old game's remaining timers go with it
                    *state = self.new_game()?;
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn update(&mut self, state: &mut GameState) -> GameResult<StepResult> {
        let mut result = StepResult::default();
        let bug_at_start = state.board.bug().is_some();

        // Take the first buffered turn that is not a reversal
        while let Some(next) = state.input_buffer.pop_front() {
            if !state.direction.is_opposite(next) {
                state.direction = next;
                result.cues.push(AudioCue::Move(state.mode));
                break;
            }
        }

        let Some(head) = state.snake.head() else {
            return Ok(result);
        };
        let new_head = head.wrapped_step(
            state.direction,
            state.board_width(),
            state.board_height(),
        );

        match state.board.tile(new_head) {
            Tile::Food => {
                self.consume_food(state, new_head, &mut result)?;
            }
            Tile::BuggyBug { .. } => {
                self.consume_buggy_bug(state, &mut result);
            }
            Tile::Empty | Tile::Wall { .. } => match state.mode {
                Mode::Snake => {
                    state.snake.drop_tail();
                    shrink_toward_prev_length(state);
                }
                Mode::Tron => state.score += scoring::TRON_TICK_POINTS,
                Mode::Sticky => {}
            },
        }

        if state.mode == Mode::Sticky {
            state.buggy_bug_time_left -= 1;
            if state.buggy_bug_time_left < 0 {
                state.mode = Mode::Tron;
                result.cues.push(AudioCue::EnterTronMode);
                debug!(length = state.snake.len(), "entered tron mode");
            }
        }

        if let Some(collision) = check_collision(state, new_head) {
            result.terminated = true;
            result.info.collision_type = Some(collision);
            self.game_over(state, &mut result);
        }

        if state.board.consume_glitch(new_head) {
            result.cues.push(AudioCue::PassGlitchedWall);
        }

        state.snake.push_head(new_head);

        if bug_at_start && state.board.bug().is_some() {
            if state.buggy_bug_time_left == 1 {
                state.board.remove_bug();
                state.buggy_bug_time_left = -1;
                debug!("buggybug expired");
            } else {
                state.buggy_bug_time_left -= 1;
            }
        }

        Ok(result)
    }

    fn consume_food(
        &mut self,
        state: &mut GameState,
        pos: Position,
        result: &mut StepResult,
    ) -> GameResult<()> {
        result.cues.push(AudioCue::EatFood(state.mode));
        result.info.ate = Some(EdibleKind::Food);

        state.score += scoring::food_points(state.level);
        state.food_eaten += 1;
        if scoring::is_level_up(state.food_eaten, &self.config) {
            state.level += 1;
            debug!(level = state.level, "level up");
        }

        if state.mode != Mode::Snake {
            debug!(from = ?state.mode, "back to snake mode");
        }
        state.mode = Mode::Snake;

        // New edibles go down before the eaten cell clears, so they never reuse it
        self.add_edible(state)?;
        state.board.set_cell(pos, Cell::Empty);

        if let Some(target) = state.prev_length.as_mut() {
            *target += 1;
        }
        Ok(())
    }

    fn consume_buggy_bug(&mut self, state: &mut GameState, result: &mut StepResult) {
        result.cues.push(AudioCue::EatBuggyBug);
        result.info.ate = Some(EdibleKind::BuggyBug);

        state.mode = Mode::Sticky;
        state.score += scoring::buggy_bug_points(state.buggy_bug_time_left, state.level);
        if state.prev_length.is_none() {
            state.prev_length = Some(state.snake.len());
        }
        state.board.remove_bug();

        debug!(
            time_left = state.buggy_bug_time_left,
            "ate buggybug, sticky mode"
        );
    }

    /// Spawn the next food, sometimes with a buggybug alongside
    fn add_edible(&mut self, state: &mut GameState) -> GameResult<()> {
        if state.level > self.config.buggy_bug_min_level
            && self.rng.gen_bool(self.config.buggy_bug_chance)
            && state.board.bug().is_none()
        {
            place_edible(state, EdibleKind::BuggyBug, &mut self.rng)?;
        }
        place_edible(state, EdibleKind::Food, &mut self.rng)?;
        Ok(())
    }

    fn game_over(&mut self, state: &mut GameState, result: &mut StepResult) {
        result.cues.push(AudioCue::Die(state.mode));
        state.phase = Phase::End;

        // Keep stray key presses from skipping the end screen
        state.pause_input = true;
        state
            .timers
            .arm(TimerPurpose::InputPause, self.config.input_pause());

        state.show_hint = false;
        state
            .timers
            .arm(TimerPurpose::Hint, self.config.hint_delay());

        if state.score > state.hiscore {
            self.store.write(state.score);
        }

        info!(
            score = state.score,
            level = state.level,
            collision = ?result.info.collision_type,
            "game over"
        );
    }

    /// End screen animation: count the hiscore up and dissolve the snake
    fn game_over_update(&mut self, state: &mut GameState) -> StepResult {
        let mut result = StepResult {
            terminated: true,
            ..Default::default()
        };

        if state.score > state.hiscore {
            state.hiscore += 1;
            if scoring::is_hiscore_milestone(state.hiscore) {
                result.cues.push(AudioCue::NewHighScore);
            }
        }

        if !state.snake.is_empty() {
            state
                .snake
                .glitch_tail(&mut state.glitched_length, END_GLITCH_LENGTH, None);
        }

        result
    }
}

/// Shrink the snake back to its pre-bonus length, one faded segment at a time
fn shrink_toward_prev_length(state: &mut GameState) {
    let Some(target) = state.prev_length else {
        return;
    };

    let length = state.snake.len();
    if length > target {
        state.snake.glitch_tail(
            &mut state.glitched_length,
            PLAY_GLITCH_LENGTH,
            Some(length - target),
        );
    } else if length == target {
        state.prev_length = None;
        state.glitched_length = 0;
    }
}

/// Check if the new head position causes a collision
fn check_collision(state: &GameState, pos: Position) -> Option<CollisionType> {
    if state.snake.collides_with(pos) {
        return Some(CollisionType::SelfCollision);
    }

    if let Tile::Wall { glitched: false } = state.board.tile(pos) {
        return Some(CollisionType::Wall);
    }

    None
}
