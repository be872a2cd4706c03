use hecs::World;

use crate::systems::collision::{ball_collides_with_paddle, paddle_line};
use crate::systems::scoring::award_point;
use crate::{Ball, Config, Events, Line, Score, Side};

/// Outcome of horizontal resolution for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalContact {
    LeftGoal,    // player 2 scores
    RightGoal,   // player 1 scores
    LeftPaddle,  // bounce rightward
    RightPaddle, // bounce leftward
    Free,
}

/// Outcome of vertical resolution for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    TopWall,
    BottomWall,
    Free,
}

/// First matching rule wins, in this order:
/// left goal, right goal, left paddle, right paddle, free flight.
///
/// Goals are tested against the projected x; paddles against the ball's
/// position before this step.
pub fn classify_horizontal(
    ball: &Ball,
    next_x: f32,
    left: Option<&Line>,
    right: Option<&Line>,
    config: &Config,
) -> HorizontalContact {
    let r = config.ball_radius;
    let hits = |line: Option<&Line>| {
        line.is_some_and(|line| {
            ball_collides_with_paddle(line, ball.pos, r, config.paddle_thickness)
        })
    };

    if next_x - r <= 0.0 {
        HorizontalContact::LeftGoal
    } else if next_x + r >= config.arena_width {
        HorizontalContact::RightGoal
    } else if hits(left) {
        HorizontalContact::LeftPaddle
    } else if hits(right) {
        HorizontalContact::RightPaddle
    } else {
        HorizontalContact::Free
    }
}

/// Top wall first, then bottom wall, both against the projected y
pub fn classify_vertical(next_y: f32, config: &Config) -> VerticalContact {
    let r = config.ball_radius;
    if next_y - r <= 0.0 {
        VerticalContact::TopWall
    } else if next_y + r >= config.arena_height {
        VerticalContact::BottomWall
    } else {
        VerticalContact::Free
    }
}

/// Advance the ball one fixed step, resolving walls, paddles and goals.
///
/// Both axes are classified from the state at the start of the step. The
/// vertical axis is applied first so that a goal always leaves the ball
/// exactly at the arena center.
pub fn advance_ball(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let left = paddle_line(world, Side::Left);
    let right = paddle_line(world, Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let next = ball.pos + ball.vel * config.dt;

        let horizontal = classify_horizontal(ball, next.x, left.as_ref(), right.as_ref(), config);
        let vertical = classify_vertical(next.y, config);

        let r = config.ball_radius;
        match vertical {
            VerticalContact::TopWall => {
                ball.pos.y = r;
                ball.vel.y = config.ball_velocity;
                events.ball_hit_wall = true;
            }
            VerticalContact::BottomWall => {
                ball.pos.y = config.arena_height - r;
                ball.vel.y = -config.ball_velocity;
                events.ball_hit_wall = true;
            }
            VerticalContact::Free => ball.pos.y = next.y,
        }

        let half_thickness = config.paddle_thickness / 2.0;
        match horizontal {
            HorizontalContact::LeftGoal => award_point(Side::Right, ball, score, events, config),
            HorizontalContact::RightGoal => award_point(Side::Left, ball, score, events, config),
            HorizontalContact::LeftPaddle => {
                let x = left.map_or(0.0, |line| line.x());
                ball.pos.x = x + r + half_thickness + 1.0;
                ball.vel.x = config.ball_velocity;
                events.ball_hit_paddle = true;
            }
            HorizontalContact::RightPaddle => {
                let x = right.map_or(config.arena_width, |line| line.x());
                ball.pos.x = x - r - half_thickness - 1.0;
                ball.vel.x = -config.ball_velocity;
                events.ball_hit_paddle = true;
            }
            HorizontalContact::Free => ball.pos.x = next.x,
        }
    }
}
