use glam::Vec2;

use crate::components::Side;
use crate::geometry::Line;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub game_ends_at: u32,
    pub paddle_distance_from_wall: f32,
    pub paddle_length: f32,
    pub paddle_thickness: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub ball_velocity: f32,
    pub dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self::classic(Params::DEFAULT_WIDTH, Params::GAME_ENDS_AT)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window-derived arena: height follows the 1.6 aspect ratio
    pub fn classic(width: u32, game_ends_at: u32) -> Self {
        let height = (width as f32 / Params::ASPECT_RATIO) as u32;
        Self::with_arena(width, height, game_ends_at)
    }

    /// Fixed 1600x900 arena, first point wins
    pub fn arcade() -> Self {
        Self::with_arena(
            Params::ARCADE_WIDTH,
            Params::ARCADE_HEIGHT,
            Params::ARCADE_GAME_ENDS_AT,
        )
    }

    fn with_arena(width: u32, height: u32, game_ends_at: u32) -> Self {
        Self {
            arena_width: width as f32,
            arena_height: height as f32,
            game_ends_at,
            paddle_distance_from_wall: Params::PADDLE_DISTANCE_FROM_WALL,
            paddle_length: Params::PADDLE_LENGTH,
            paddle_thickness: Params::PADDLE_THICKNESS,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Params::BALL_VELOCITY,
            dt: Params::FIXED_DT,
        }
    }

    /// Window size in whole pixels
    pub fn window_size(&self) -> (u32, u32) {
        (self.arena_width as u32, self.arena_height as u32)
    }

    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Get X position of a paddle's line
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_distance_from_wall,
            Side::Right => self.arena_width - self.paddle_distance_from_wall,
        }
    }

    /// Starting segment for a paddle: left near the top, right near the bottom
    pub fn initial_paddle_line(&self, side: Side) -> Line {
        let x = self.paddle_x(side);
        let top = match side {
            Side::Left => self.paddle_distance_from_wall,
            Side::Right => {
                self.arena_height - (self.paddle_distance_from_wall + self.paddle_length)
            }
        };
        Line::new(Vec2::new(x, top), Vec2::new(x, top + self.paddle_length))
    }

    /// Serve velocity at the start of a session
    pub fn initial_ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_velocity, self.ball_velocity)
    }
}
