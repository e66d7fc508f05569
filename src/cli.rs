use crate::config::{DEFAULT_DIGIT_COUNT, DEFAULT_MAX_DIGIT, GameConfig, MAX_MAX_DIGIT, MIN_MAX_DIGIT};
use crate::error::UsageError;
use crate::game_state::{Feedback, GameInterface};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};

pub const USAGE_ARGS: &str = "[numberOfDigits [maximumDigitSize (2-9)]]";

/// Mastermind: guess the secret code, scored by correctly placed digits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of digits in the code (default 4)
    #[arg(value_name = "numberOfDigits")]
    pub number_of_digits: Option<String>,

    /// Largest digit that can appear in the code, 2-9 (default 4)
    #[arg(value_name = "maximumDigitSize")]
    pub maximum_digit_size: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated startup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupOptions {
    pub config: GameConfig,
    pub verbose: bool,
}

/// Parses the process arguments (program name first) without printing or
/// exiting. clap's own errors carry the same usage line as `usage`.
pub fn parse_args<I, T>(args: I) -> Result<StartupOptions, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map_or_else(|| "mastermind".to_string(), |arg| arg.to_string_lossy().into_owned());

    let matches = Cli::command()
        .override_usage(format!("{program} {USAGE_ARGS}"))
        .try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let config = config_from_cli(&cli)?;
    Ok(StartupOptions {
        config,
        verbose: cli.verbose,
    })
}

pub fn config_from_cli(cli: &Cli) -> Result<GameConfig, UsageError> {
    if !cli.extra.is_empty() {
        return Err(UsageError::WrongArgumentCount);
    }

    let positionals = [&cli.number_of_digits, &cli.maximum_digit_size];
    if positionals.iter().copied().flatten().any(|arg| !is_digits(arg)) {
        return Err(UsageError::NotDigits);
    }

    let digit_count = match &cli.number_of_digits {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| UsageError::DigitCountTooLarge(arg.clone()))?,
        None => DEFAULT_DIGIT_COUNT,
    };

    let max_digit = match &cli.maximum_digit_size {
        Some(arg) => match arg.parse::<u32>() {
            Ok(value) if (MIN_MAX_DIGIT..=MAX_MAX_DIGIT).contains(&value) => value,
            _ => return Err(UsageError::MaxDigitOutOfRange(arg.clone())),
        },
        None => DEFAULT_MAX_DIGIT,
    };

    GameConfig::new(digit_count, max_digit)
}

fn is_digits(arg: &str) -> bool {
    !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit())
}

#[must_use]
pub fn usage(program: &str) -> String {
    format!("Usage : {program} {USAGE_ARGS}")
}

#[must_use]
pub fn welcome_text(config: &GameConfig) -> String {
    format!(
        "\n --- Let's play MASTERMIND! ---\nGuess the code: {} digits between 1 and {}",
        config.digit_count(),
        config.max_digit()
    )
}

/// Pads the feedback so it lines up under the guess typed after `prompt`.
#[must_use]
pub fn feedback_line(prompt: &str, feedback: &Feedback) -> String {
    let indent = prompt.chars().count().saturating_sub(1);
    format!("{}{feedback}", " ".repeat(indent))
}

#[must_use]
pub fn win_message(guesses: u32, combinations: Option<u128>, config: &GameConfig) -> String {
    let combinations = combinations.map_or_else(
        || format!("{}^{}", config.max_digit(), config.digit_count()),
        |count| count.to_string(),
    );
    format!("Well done! That took you {guesses} attempts, out of {combinations} possible combinations.")
}

/// Console implementation of `GameInterface` over any line reader and
/// writer. The binary wires it to stdin and stdout.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self, config: &GameConfig) -> io::Result<()> {
        writeln!(self.writer, "{}", welcome_text(config))
    }

    fn read_guess(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            // Keep the farewell off the prompt line.
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(input))
    }

    fn display_invalid_guess(&mut self, config: &GameConfig) -> io::Result<()> {
        writeln!(
            self.writer,
            "Please enter {} digits between 1 and {}",
            config.digit_count(),
            config.max_digit()
        )
    }

    fn display_feedback(&mut self, prompt: &str, feedback: &Feedback) -> io::Result<()> {
        writeln!(self.writer, "{}", feedback_line(prompt, feedback))
    }

    fn display_win(&mut self, guesses: u32, combinations: Option<u128>, config: &GameConfig) -> io::Result<()> {
        writeln!(self.writer, "{}", win_message(guesses, combinations, config))
    }

    fn display_farewell(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Thanks for playing!")
    }
}
