use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{debug, info};

use super::audio::AudioPlayer;
use super::clock::FrameClock;
use crate::game::{GameConfig, GameEngine, GameState, InputOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::persistence::HighScoreStore;
use crate::render::Renderer;

/// How often the loop checks whether a frame or timer is due
const POLL_INTERVAL: Duration = Duration::from_millis(5);

pub struct HumanMode<S: HighScoreStore> {
    engine: GameEngine<S>,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: AudioPlayer<Stderr>,
    clock: FrameClock,
    should_quit: bool,
}

impl<S: HighScoreStore> HumanMode<S> {
    pub fn new(config: GameConfig, store: S, seed: Option<u64>) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, store, seed),
            None => GameEngine::new(config, store),
        }
        .context("Failed to create game engine")?;
        let state = engine.new_game().context("Failed to start a new game")?;

        Ok(Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio: AudioPlayer::new(stderr()),
            clock: FrameClock::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut poll_timer = interval(POLL_INTERVAL);
        let mut last = Instant::now();

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Timers and frame pacing
                _ = poll_timer.tick() => {
                    let now = Instant::now();
                    let delta = now - last;
                    last = now;

                    if self.advance(delta)? {
                        self.draw(terminal)?;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!(
                    score = self.state.score,
                    hiscore = self.engine.store().read(),
                    "quitting"
                );
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, &self.state))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Run timers and, if a frame is due, one game tick; true when the screen needs a redraw
    fn advance(&mut self, delta: Duration) -> Result<bool> {
        let restarted = self
            .engine
            .advance_timers(&mut self.state, delta)
            .context("Failed to restart the game")?;
        if restarted {
            // A fresh game waits a full frame before its first tick
            self.clock.reset();
            return Ok(true);
        }

        let fps = self.state.frames_per_second(self.engine.config());
        if !self.clock.advance(delta, fps) {
            return Ok(false);
        }

        self.update_game()?;
        Ok(true)
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::GameAction(action) => {
                match self.engine.handle_input(&mut self.state, action) {
                    InputOutcome::ToggleMute => self.audio.toggle_mute(),
                    InputOutcome::Handled => debug!(?action, phase = ?self.state.phase, "input"),
                    InputOutcome::Ignored => {}
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let result = self
            .engine
            .tick(&mut self.state)
            .context("Game tick failed")?;

        for cue in result.cues {
            self.audio.play(cue);
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
