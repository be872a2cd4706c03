//! Text placement in whole pixels.
//!
//! Positions are the top-left corner of each text box, in integer pixels.
//! Quarter lines and font sizes use integer division.

use game_core::{Score, Side};

pub const SCORE_FONT_SIZE: u16 = 120;
pub const SCORE_TOP: i32 = 80;
pub const RESTART_PROMPT: &str = "Press SPACE to play again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: u16,
}

/// Live scores, centred on the quarter lines of the arena
pub fn score_blocks<M>(width: i32, score: Score, measure: M) -> [TextBlock; 2]
where
    M: Fn(&str, u16) -> i32,
{
    let block = |value: u32, center: i32| {
        let text = value.to_string();
        let x = center - measure(&text, SCORE_FONT_SIZE) / 2;
        TextBlock {
            text,
            x,
            y: SCORE_TOP,
            font_size: SCORE_FONT_SIZE,
        }
    };
    [
        block(score.p1, width / 2 - width / 4),
        block(score.p2, width / 2 + width / 4),
    ]
}

pub fn banner_text(winner: Side, p1: u32, p2: u32) -> String {
    format!("Player {} won {}-{}", winner.player_number(), p1, p2)
}

/// Win banner and restart prompt, horizontally centred
pub fn game_over_blocks<M>(
    width: i32,
    height: i32,
    winner: Side,
    p1: u32,
    p2: u32,
    measure: M,
) -> [TextBlock; 2]
where
    M: Fn(&str, u16) -> i32,
{
    let centered = |text: String, font_size: u16, y: i32| {
        let size = measure(&text, font_size);
        let x = (width as f32 / 2.0 - size as f32 / 2.0) as i32;
        TextBlock {
            text,
            x,
            y,
            font_size,
        }
    };

    [
        centered(
            banner_text(winner, p1, p2),
            font_size_for(width, 16),
            height / 2 - 100 / 2,
        ),
        centered(
            RESTART_PROMPT.to_string(),
            font_size_for(width, 23),
            height / 2 + 100,
        ),
    ]
}

fn font_size_for(width: i32, divisor: i32) -> u16 {
    u16::try_from(width / divisor).unwrap_or(u16::MAX)
}
