//! Keyboard input handling

use game_core::{InputState, PaddleInput};
use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

/// Keys for both paddles and the restart prompt
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    pub left_up: KeyCode,
    pub left_down: KeyCode,
    pub right_up: KeyCode,
    pub right_down: KeyCode,
    pub restart: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: KeyCode::W,
            left_down: KeyCode::S,
            right_up: KeyCode::Up,
            right_down: KeyCode::Down,
            restart: KeyCode::Space,
        }
    }
}

impl KeyBindings {
    /// Sample held paddle keys and the restart key press for this frame
    pub fn sample(&self) -> InputState {
        InputState {
            left: PaddleInput::new(is_key_down(self.left_up), is_key_down(self.left_down)),
            right: PaddleInput::new(is_key_down(self.right_up), is_key_down(self.right_down)),
            restart: is_key_pressed(self.restart),
        }
    }
}
