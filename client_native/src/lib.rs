//! Native desktop client
//!
//! Window, keyboard and drawing for a local two-player match, built on
//! macroquad. The simulation itself lives in `game_core`.

pub mod cli;
pub mod input;
pub mod pacer;
pub mod renderer;

use game_core::{Config, Events, Game, Params};
use input::KeyBindings;
use macroquad::prelude::*;
use pacer::FramePacer;

/// Window settings for a configuration; the window is not resizable so
/// the arena always matches it.
pub fn window_conf(config: &Config) -> Conf {
    let (width, height) = config.window_size();
    Conf {
        window_title: cli::GAME_NAME.to_owned(),
        window_width: i32::try_from(width).unwrap_or(i32::MAX),
        window_height: i32::try_from(height).unwrap_or(i32::MAX),
        window_resizable: false,
        ..Default::default()
    }
}

/// Frame loop: sample input, advance one fixed step, draw, pace.
///
/// Runs until the window is closed or Escape is pressed.
pub async fn run(config: Config) {
    let (width, height) = config.window_size();
    log::info!(
        "starting {}x{} match, first to {} points",
        width,
        height,
        config.game_ends_at
    );

    prevent_quit();
    let bindings = KeyBindings::default();
    let mut pacer = FramePacer::new(Params::TARGET_FPS);
    let mut game = Game::new(config);

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        let input = bindings.sample();
        let screen = game.frame(&input);
        log_events(game.events());
        renderer::draw_frame(&game, screen);

        pacer.wait();
        next_frame().await;
    }

    let score = game.score();
    log::info!("window closed at {}-{}", score.p1, score.p2);
}

fn log_events(events: &Events) {
    if events.ball_hit_paddle {
        log::trace!("ball hit paddle");
    }
    if events.ball_hit_wall {
        log::trace!("ball hit wall");
    }
}

/// Open the window and block on the frame loop
pub fn launch(config: Config) {
    macroquad::Window::from_config(window_conf(&config), run(config));
}
