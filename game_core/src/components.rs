use glam::Vec2;

use crate::geometry::Line;

/// Which side of the arena a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // player 1
    Right, // player 2
}

impl Side {
    /// 1-based player number as shown on screen
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Paddle component - a player's vertical segment
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub line: Line,
}

impl Paddle {
    pub fn new(side: Side, line: Line) -> Self {
        Self { side, line }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back at the arena center; velocity is left to the caller
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center;
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
