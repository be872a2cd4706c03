//! Command-line options for the windowed game
//!
//! getopt-style: short options may be grouped (`-vh`) and take their
//! value attached or as the next argument (`-p3`, `-p 3`); long options
//! accept `--points=3` or `--points 3` and any unambiguous prefix.

use game_core::{Config, Params};
use thiserror::Error;

pub const GAME_NAME: &str = "Pong";
pub const GAME_VERSION: &str = "1.0.0";
pub const AUTHOR: &str = "KDesp73";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Width too small. Should be above {min}", min = Params::MIN_WIDTH)]
    WidthTooSmall(u32),
    #[error("Width too large. Should be at most {max}", max = Params::MAX_WIDTH)]
    WidthTooLarge(u32),
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires an argument")]
    MissingValue(String),
    #[error("option '{0}' doesn't allow an argument")]
    UnexpectedValue(String),
}

impl CliError {
    /// Width errors are reported on their own; the rest are followed by
    /// the usage line
    pub fn shows_usage(&self) -> bool {
        !matches!(self, CliError::WidthTooSmall(_) | CliError::WidthTooLarge(_))
    }
}

/// What the process should do after parsing
#[derive(Debug, Clone)]
pub enum Command {
    Run(Config),
    Version,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Points,
    Width,
    Version,
    Help,
}

impl Opt {
    const LONG: [(&'static str, Opt); 4] = [
        ("points", Opt::Points),
        ("width", Opt::Width),
        ("version", Opt::Version),
        ("help", Opt::Help),
    ];

    fn from_short(c: char) -> Option<Opt> {
        match c {
            'p' => Some(Opt::Points),
            'w' => Some(Opt::Width),
            'v' => Some(Opt::Version),
            'h' => Some(Opt::Help),
            _ => None,
        }
    }

    fn from_long(name: &str) -> Option<Opt> {
        if let Some((_, opt)) = Self::LONG.iter().find(|(long, _)| *long == name) {
            return Some(*opt);
        }
        let mut candidates = Self::LONG.iter().filter(|(long, _)| long.starts_with(name));
        match (candidates.next(), candidates.next()) {
            (Some((_, opt)), None) if !name.is_empty() => Some(*opt),
            _ => None,
        }
    }

    fn takes_value(self) -> bool {
        matches!(self, Opt::Points | Opt::Width)
    }
}

/// Options collected so far
#[derive(Debug, Clone, Copy)]
struct Options {
    points: u32,
    width: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            points: Params::GAME_ENDS_AT,
            width: Params::DEFAULT_WIDTH,
        }
    }
}

impl Options {
    /// Apply one option; `Some` ends parsing early
    fn apply(&mut self, opt: Opt, value: Option<&str>) -> Result<Option<Command>, CliError> {
        match opt {
            Opt::Version => return Ok(Some(Command::Version)),
            Opt::Help => return Ok(Some(Command::Help)),
            Opt::Points => self.points = parse_number_lenient(value.unwrap_or_default()),
            Opt::Width => {
                let width = parse_number_lenient(value.unwrap_or_default());
                if width < Params::MIN_WIDTH {
                    return Err(CliError::WidthTooSmall(width));
                }
                if width > Params::MAX_WIDTH {
                    return Err(CliError::WidthTooLarge(width));
                }
                self.width = width;
            }
        }
        Ok(None)
    }
}

/// Parse the arguments that follow the program name
pub fn parse_args(args: &[&str]) -> Result<Command, CliError> {
    let mut options = Options::default();
    let mut rest = args.iter().copied();

    while let Some(arg) = rest.next() {
        if arg == "--" {
            break;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            let opt =
                Opt::from_long(name).ok_or_else(|| CliError::UnknownOption(arg.to_string()))?;
            let value = match (opt.takes_value(), inline) {
                (true, Some(value)) => Some(value),
                (true, None) => Some(
                    rest.next()
                        .ok_or_else(|| CliError::MissingValue(format!("--{}", name)))?,
                ),
                (false, Some(_)) => return Err(CliError::UnexpectedValue(format!("--{}", name))),
                (false, None) => None,
            };
            if let Some(command) = options.apply(opt, value)? {
                return Ok(command);
            }
        } else if let Some(shorts) = arg.strip_prefix('-').filter(|s| !s.is_empty()) {
            for (i, c) in shorts.char_indices() {
                let opt = Opt::from_short(c)
                    .ok_or_else(|| CliError::UnknownOption(format!("-{}", c)))?;
                if !opt.takes_value() {
                    if let Some(command) = options.apply(opt, None)? {
                        return Ok(command);
                    }
                    continue;
                }

                let attached = &shorts[i + c.len_utf8()..];
                let value = if attached.is_empty() {
                    rest.next()
                        .ok_or_else(|| CliError::MissingValue(format!("-{}", c)))?
                } else {
                    attached
                };
                if let Some(command) = options.apply(opt, Some(value))? {
                    return Ok(command);
                }
                break;
            }
        }
        // Positional arguments are ignored
    }

    Ok(Command::Run(Config::classic(options.width, options.points)))
}

/// Best-effort integer conversion: leading whitespace, optional sign,
/// then as many digits as are present. Anything unparsable is 0 and
/// negative values saturate to 0.
pub fn parse_number_lenient(text: &str) -> u32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, d| {
            acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
        });
    if negative {
        0
    } else {
        value
    }
}

/// Process exit status for a parse outcome
pub fn exit_code(result: &Result<Command, CliError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Text printed on stdout for commands that do not open a window
pub fn command_text(command: &Command, program: &str) -> Option<String> {
    match command {
        Command::Run(_) => None,
        Command::Version => Some(version_text()),
        Command::Help => Some(help_text(program)),
    }
}

pub fn version_text() -> String {
    format!("{} v{} by {}", GAME_NAME, GAME_VERSION, AUTHOR)
}

pub fn usage_line(program: &str) -> String {
    format!("Usage: {} [-p <points>] [-w <width>] [-v | -h]", program)
}

pub fn help_text(program: &str) -> String {
    format!(
        "{}\n\n\
         -h, --help\t\t\tPrints this message\n\
         -v, --version\t\t\tPrints the version of this program\n\
         -p, --points\t\t\tSets the number of points that end the game\n\
         -w, --width\t\t\tSets the width of the window (>={})\n\n\
         Made by {}",
        usage_line(program),
        Params::MIN_WIDTH,
        AUTHOR
    )
}
