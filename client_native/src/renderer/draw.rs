use game_core::{Ball, Paddle};
use macroquad::prelude::*;

use super::layout::TextBlock;

pub fn draw_ball(ball: &Ball, radius: f32) {
    draw_circle(ball.pos.x, ball.pos.y, radius, WHITE);
}

/// Paddle as a thick line centred on its segment
pub fn draw_paddle(paddle: &Paddle, thickness: f32) {
    let line = paddle.line;
    draw_line(
        line.starting.x,
        line.starting.y,
        line.ending.x,
        line.ending.y,
        thickness,
        WHITE,
    );
}

/// Width of `text` in whole pixels with the default font
pub fn measure(text: &str, font_size: u16) -> i32 {
    measure_text(text, None, font_size, 1.0).width as i32
}

/// Draw text whose position is the top-left of its box
pub fn draw_text_block(block: &TextBlock) {
    let dims = measure_text(&block.text, None, block.font_size, 1.0);
    draw_text(
        &block.text,
        block.x as f32,
        block.y as f32 + dims.offset_y,
        f32::from(block.font_size),
        WHITE,
    );
}
