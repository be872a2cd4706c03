use std::env;
use std::process;

use client_native::cli::{self, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pong");
    let options: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    let result = cli::parse_args(&options);
    let code = cli::exit_code(&result);

    match result {
        Ok(Command::Run(config)) => client_native::launch(config),
        Ok(command) => {
            if let Some(text) = cli::command_text(&command, program) {
                println!("{}", text);
            }
        }
        Err(err) => {
            log::error!("{}", err);
            if err.shows_usage() {
                log::info!("{}", cli::usage_line(program));
            }
        }
    }

    if code != 0 {
        process::exit(code);
    }
}
