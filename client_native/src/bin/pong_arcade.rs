//! Fixed 1600x900 window, first point wins. Takes no options.

use game_core::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    client_native::launch(Config::arcade());
}
