use crate::config::GameConfig;
use crate::engine::{CodeEngine, ScoreResult};
use crate::info_log;
use rand::Rng;
use std::fmt;
use std::io;

pub const CORRECT_MARKER: char = '*';
pub const INCORRECT_MARKER: char = '-';

const QUIT_KEYWORDS: [&str; 2] = ["quit", "exit"];

/// Where the session loop stands after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Quitting,
}

/// What one line of player input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Quit,
    Blank,
    Guess(String),
}

/// Scoring feedback for one structurally valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub correct: usize,
    pub total: usize,
}

impl Feedback {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct == self.total
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let correct = CORRECT_MARKER.to_string().repeat(self.correct);
        let incorrect = INCORRECT_MARKER
            .to_string()
            .repeat(self.total.saturating_sub(self.correct));
        write!(f, "[{correct}{incorrect}]")
    }
}

/// Totals for a whole session, returned when the player quits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_won: u32,
    pub total_guesses: u32,
}

/// Console side of the session loop. The loop decides what happens; the
/// interface decides how it looks.
pub trait GameInterface {
    fn display_welcome(&mut self, config: &GameConfig) -> io::Result<()>;
    /// Shows `prompt` and reads one line. `None` means input is exhausted.
    fn read_guess(&mut self, prompt: &str) -> io::Result<Option<String>>;
    fn display_invalid_guess(&mut self, config: &GameConfig) -> io::Result<()>;
    fn display_feedback(&mut self, prompt: &str, feedback: &Feedback) -> io::Result<()>;
    fn display_win(&mut self, guesses: u32, combinations: Option<u128>, config: &GameConfig) -> io::Result<()>;
    fn display_farewell(&mut self) -> io::Result<()>;
}

/// Prefix match on the trimmed, lower-cased line: "Quitting" quits,
/// "i quit" does not.
#[must_use]
pub fn is_quit(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    QUIT_KEYWORDS.iter().any(|keyword| lowered.starts_with(keyword))
}

#[must_use]
pub fn classify_input(line: &str) -> UserAction {
    if is_quit(line) {
        UserAction::Quit
    } else if line.trim().is_empty() {
        UserAction::Blank
    } else {
        UserAction::Guess(line.to_string())
    }
}

#[must_use]
pub fn prompt_for(guess_count: u32) -> String {
    format!(" {} > ", guess_count + 1)
}

/// Handles one line of input and reports the resulting state. A win resets
/// the engine before returning `Won`.
pub fn step<R: Rng, I: GameInterface>(
    engine: &mut CodeEngine<R>,
    interface: &mut I,
    prompt: &str,
    line: Option<&str>,
    summary: &mut SessionSummary,
) -> io::Result<GameState> {
    let action = line.map_or(UserAction::Quit, classify_input);
    let guess = match action {
        UserAction::Quit => {
            interface.display_farewell()?;
            return Ok(GameState::Quitting);
        }
        UserAction::Blank => return Ok(GameState::AwaitingGuess),
        UserAction::Guess(guess) => guess,
    };

    let config = *engine.config();
    let correct = match engine.score(&guess) {
        ScoreResult::Invalid => {
            interface.display_invalid_guess(&config)?;
            return Ok(GameState::AwaitingGuess);
        }
        ScoreResult::Correct(correct) => correct,
    };
    summary.total_guesses += 1;

    let feedback = Feedback {
        correct,
        total: config.digit_count(),
    };
    interface.display_feedback(prompt, &feedback)?;
    if !feedback.is_solved() {
        return Ok(GameState::AwaitingGuess);
    }

    let guesses = engine.guess_count();
    info_log!("Code solved in {} guesses", guesses);
    interface.display_win(guesses, config.combinations(), &config)?;
    summary.games_won += 1;
    engine.reset(config);
    interface.display_welcome(&config)?;
    Ok(GameState::Won)
}

/// Runs the interactive session until the player quits or input runs out.
pub fn game_loop<R: Rng, I: GameInterface>(
    engine: &mut CodeEngine<R>,
    interface: &mut I,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    interface.display_welcome(engine.config())?;

    loop {
        let prompt = prompt_for(engine.guess_count());
        let line = interface.read_guess(&prompt)?;
        match step(engine, interface, &prompt, line.as_deref(), &mut summary)? {
            GameState::Quitting => break,
            GameState::AwaitingGuess | GameState::Won => {}
        }
    }

    info_log!(
        "Session over: {} games won, {} guesses",
        summary.games_won,
        summary.total_guesses
    );
    Ok(summary)
}
