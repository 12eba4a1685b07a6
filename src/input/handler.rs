use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(InputAction),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(InputAction::Move(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(InputAction::Move(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(InputAction::Move(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(InputAction::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::GameAction(InputAction::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::GameAction(InputAction::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::GameAction(InputAction::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::GameAction(InputAction::Move(Direction::Right))
            }

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                KeyAction::GameAction(InputAction::Pause)
            }
            KeyCode::Char('m') | KeyCode::Char('M') => KeyAction::GameAction(InputAction::Mute),
            KeyCode::Enter => KeyAction::GameAction(InputAction::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
