//! Immediate-mode drawing of the match

mod draw;
pub mod layout;

pub use draw::*;

use game_core::{Game, Screen};
use macroquad::prelude::*;

/// Draw one frame for the given screen
pub fn draw_frame(game: &Game, screen: Screen) {
    clear_background(BLACK);

    let (width, height) = game.config().window_size();
    let (width, height) = (width as i32, height as i32);

    match screen {
        Screen::Playing => {
            draw_ball(&game.ball(), game.config().ball_radius);
            for side in [game_core::Side::Left, game_core::Side::Right] {
                draw_paddle(&game.paddle(side), game.config().paddle_thickness);
            }
            for block in layout::score_blocks(width, game.score(), measure) {
                draw_text_block(&block);
            }
        }
        Screen::GameOver { winner, p1, p2 } => {
            for block in layout::game_over_blocks(width, height, winner, p1, p2, measure) {
                draw_text_block(&block);
            }
        }
    }
}
