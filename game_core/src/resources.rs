use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub p1: u32, // Left player score
    pub p2: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.p1 += 1,
            Side::Right => self.p2 += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Exact match against the threshold; overshooting never ends a match
    pub fn reached(&self, game_ends_at: u32) -> bool {
        self.p1 == game_ends_at || self.p2 == game_ends_at
    }

    /// Player 2 leads only when strictly ahead; ties go to player 1
    pub fn leader(&self) -> Side {
        if self.p1 < self.p2 {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn total(&self) -> u32 {
        self.p1 + self.p2
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub p1_scored: bool,
    pub p2_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Held keys for one paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// Up is checked first, down is the fallback
    pub fn dir(&self) -> i8 {
        if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        }
    }
}

/// Keyboard state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: PaddleInput,
    pub right: PaddleInput,
    pub restart: bool, // edge-triggered: true only on the frame the key went down
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
