use game_core::*;
use glam::Vec2;
use hecs::World;

fn idle() -> InputState {
    InputState::new()
}

fn hold(left: PaddleInput, right: PaddleInput) -> InputState {
    InputState {
        left,
        right,
        restart: false,
    }
}

struct Arena {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    ball: hecs::Entity,
}

impl Arena {
    fn with_ball(pos: Vec2, vel: Vec2) -> Self {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(&mut world, pos, vel);
        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            ball,
        }
    }

    fn step(&mut self, input: &InputState) {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
        );
    }

    fn ball(&self) -> Ball {
        *self.world.get::<&Ball>(self.ball).unwrap()
    }
}

#[test]
fn test_step_runs_input_movement_and_ball() {
    let mut world = World::new();
    let config = Config::new();
    let mut score = Score::new();
    let mut events = Events::new();

    let left = create_paddle(&mut world, &config, Side::Left);
    let ball = create_ball(&mut world, Vec2::new(400.0, 250.0), Vec2::new(-300.0, 0.0));

    let input = hold(PaddleInput::new(false, true), PaddleInput::default());
    step(&mut world, &config, &mut score, &mut events, &input);

    let line = world.get::<&Paddle>(left).unwrap().line;
    assert_eq!(line.starting.y, 140.0);
    let ball = world.get::<&Ball>(ball).unwrap();
    assert!((ball.pos.x - 395.0).abs() < 1e-3);
}

#[test]
fn test_paddles_never_leave_arena() {
    let mut game = Game::new(Config::new());
    let inputs = [
        hold(PaddleInput::new(true, false), PaddleInput::new(false, true)),
        hold(PaddleInput::new(false, true), PaddleInput::new(true, false)),
        hold(PaddleInput::new(true, true), PaddleInput::new(false, false)),
    ];

    for input in inputs {
        for _ in 0..40 {
            game.frame(&input);
            for side in [Side::Left, Side::Right] {
                let line = game.paddle(side).line;
                assert!(line.starting.y >= 0.0);
                assert!(line.ending.y <= game.config().arena_height);
                assert_eq!(line.length(), game.config().paddle_length);
                assert_eq!(line.starting.x, line.ending.x);
            }
        }
    }
}

#[test]
fn test_miss_scores_and_serves_from_center() {
    let mut arena = Arena::with_ball(Vec2::new(10.0, 250.0), Vec2::new(-300.0, 0.0));

    arena.step(&idle());

    assert_eq!(arena.score, Score { p1: 0, p2: 1 });
    assert!(arena.events.p2_scored);
    assert_eq!(arena.ball().pos, Vec2::new(400.0, 250.0));
    assert_eq!(arena.ball().vel, Vec2::new(300.0, 0.0));
}

#[test]
fn test_left_paddle_returns_ball() {
    // Left paddle starts at (120, 120)-(120, 220)
    let mut arena = Arena::with_ball(Vec2::new(140.0, 170.0), Vec2::new(-300.0, 0.0));

    arena.step(&idle());

    assert!(arena.events.ball_hit_paddle);
    assert_eq!(arena.score, Score::new());
    assert_eq!(arena.ball().pos.x, 146.0);
    assert_eq!(arena.ball().vel.x, 300.0);
}

#[test]
fn test_unattended_match_runs_to_completion() {
    let mut game = Game::new(Config::arcade());
    let mut frames = 0;
    while game.state() == MatchState::InProgress {
        game.frame(&idle());
        frames += 1;
        assert!(frames < 60 * 60, "match should end within a minute");
    }
    assert_eq!(game.score().total(), 1);
}

#[test]
fn test_full_match_and_restart() {
    let mut game = Game::new(Config::classic(800, 2));

    let mut frames = 0;
    let screen = loop {
        let screen = game.frame(&idle());
        if screen != Screen::Playing {
            break screen;
        }
        frames += 1;
        assert!(frames < 60 * 60, "match should end within a minute");
    };

    let score = game.score();
    assert!(score.reached(2));
    assert_eq!(game.state(), MatchState::GameOver);
    assert_eq!(
        screen,
        Screen::GameOver {
            winner: score.leader(),
            p1: score.p1,
            p2: score.p2
        }
    );

    // Paddle input is ignored once the match is over
    let frozen = game.ball().pos;
    game.frame(&hold(PaddleInput::new(true, false), PaddleInput::new(false, true)));
    assert_eq!(game.ball().pos, frozen);
    assert_eq!(game.score(), score);

    let restart = InputState {
        restart: true,
        ..idle()
    };
    game.frame(&restart);
    assert_eq!(game.state(), MatchState::InProgress);
    assert_eq!(game.score(), Score::new());
    assert_eq!(game.frame(&idle()), Screen::Playing);
}

#[test]
fn test_zero_threshold_ends_immediately_with_tie() {
    let mut game = Game::new(Config::classic(800, 0));
    game.frame(&idle());
    assert_eq!(
        game.frame(&idle()),
        Screen::GameOver {
            winner: Side::Left,
            p1: 0,
            p2: 0
        }
    );
}
