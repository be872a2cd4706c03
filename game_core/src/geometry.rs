use glam::Vec2;

/// Vertical paddle segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub starting: Vec2, // top endpoint
    pub ending: Vec2,   // bottom endpoint
}

impl Line {
    pub fn new(starting: Vec2, ending: Vec2) -> Self {
        Self { starting, ending }
    }

    pub fn x(&self) -> f32 {
        self.starting.x
    }

    pub fn length(&self) -> f32 {
        self.ending.y - self.starting.y
    }

    /// Rigid vertical translation of both endpoints
    pub fn translate_y(&mut self, offset: f32) {
        self.starting.y += offset;
        self.ending.y += offset;
    }

    /// Clamp each endpoint independently into the arena.
    ///
    /// `starting` is kept within `[(0, 0), (width, height - length)]` and
    /// `ending` within `[(0, length), (width, height)]`.
    pub fn clamp_to_arena(&mut self, width: f32, height: f32, length: f32) {
        self.starting = self
            .starting
            .clamp(Vec2::ZERO, Vec2::new(width, height - length));
        self.ending = self
            .ending
            .clamp(Vec2::new(0.0, length), Vec2::new(width, height));
    }
}
