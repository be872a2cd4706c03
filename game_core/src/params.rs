/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Frame
    pub const TARGET_FPS: u32 = 60;
    pub const FIXED_DT: f32 = 1.0 / Self::TARGET_FPS as f32;

    // Arena
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const MIN_WIDTH: u32 = 500;
    pub const MAX_WIDTH: u32 = i32::MAX as u32; // window sizes are i32
    pub const ASPECT_RATIO: f32 = 1.6; // width / height
    pub const ARCADE_WIDTH: u32 = 1600;
    pub const ARCADE_HEIGHT: u32 = 900;

    // Paddle
    pub const PADDLE_DISTANCE_FROM_WALL: f32 = 120.0;
    pub const PADDLE_LENGTH: f32 = 100.0;
    pub const PADDLE_THICKNESS: f32 = 20.0;
    pub const PADDLE_STEP: f32 = 20.0; // pixels per frame

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_VELOCITY: f32 = 300.0; // pixels per second, per axis

    // Score
    pub const GAME_ENDS_AT: u32 = 5;
    pub const ARCADE_GAME_ENDS_AT: u32 = 1;
}
