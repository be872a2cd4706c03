use glam::Vec2;
use hecs::World;

use crate::{Line, Paddle, Side};

/// Overlap test between the ball's bounding box and a paddle.
///
/// The paddle is treated as a `thickness`-wide rectangle centred on its
/// vertical line, spanning `starting.y..=ending.y`. All edges are inclusive.
pub fn ball_collides_with_paddle(line: &Line, ball: Vec2, radius: f32, thickness: f32) -> bool {
    let paddle_left = line.x() - thickness / 2.0;
    let paddle_right = line.x() + thickness / 2.0;

    let overlaps_x = ball.x - radius <= paddle_right && ball.x + radius >= paddle_left;
    let overlaps_y = ball.y + radius >= line.starting.y && ball.y - radius <= line.ending.y;

    overlaps_x && overlaps_y
}

/// Current segment of the paddle defending `side`, if one exists
pub fn paddle_line(world: &World, side: Side) -> Option<Line> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, paddle)| paddle.side == side)
        .map(|(_e, paddle)| paddle.line)
}
