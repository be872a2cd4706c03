use hecs::{Entity, World};

use crate::fsm::{MatchAction, MatchFsm, MatchState};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, InputState, Paddle, Score, Side,
};

/// What the presentation layer should draw for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    GameOver { winner: Side, p1: u32, p2: u32 },
}

/// One local match: world, score and match state, advanced once per frame
pub struct Game {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    fsm: MatchFsm,
    ball: Entity,
    left: Entity,
    right: Entity,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let ball = create_ball(
            &mut world,
            config.arena_center(),
            config.initial_ball_velocity(),
        );
        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            fsm: MatchFsm::new(),
            ball,
            left,
            right,
        }
    }

    /// Run one frame and return the screen to present.
    ///
    /// The threshold check happens before this frame's movement, and the
    /// frame that detects it is still simulated and shown as play. On the
    /// win screen only the restart key is honoured; a restart resets the
    /// score but leaves ball and paddles where they are.
    pub fn frame(&mut self, input: &InputState) -> Screen {
        match self.fsm.state() {
            MatchState::InProgress => {
                if self.score.reached(self.config.game_ends_at) {
                    let result = self.fsm.transition(MatchAction::ThresholdReached);
                    log::info!(
                        "{:?} -> {:?}: player {} won {}-{}",
                        result.from_state,
                        result.to_state,
                        self.score.leader().player_number(),
                        self.score.p1,
                        self.score.p2
                    );
                }

                step(
                    &mut self.world,
                    &self.config,
                    &mut self.score,
                    &mut self.events,
                    input,
                );
                Screen::Playing
            }
            MatchState::GameOver => {
                self.events.clear();
                if input.restart {
                    self.score.reset();
                    let result = self.fsm.transition(MatchAction::Restart);
                    log::info!(
                        "{:?} -> {:?}: match restarted",
                        result.from_state,
                        result.to_state
                    );
                }
                Screen::GameOver {
                    winner: self.score.leader(),
                    p1: self.score.p1,
                    p2: self.score.p2,
                }
            }
        }
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| {
                Ball::new(
                    self.config.arena_center(),
                    self.config.initial_ball_velocity(),
                )
            })
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world
            .get::<&Paddle>(entity)
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, self.config.initial_paddle_line(side)))
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
}
