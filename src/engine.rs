//! The code engine: owns one secret code at a time and scores guesses
//! against it.
//!
//! Scoring only counts exact positional matches. A digit that appears in the
//! code at a different position earns nothing.

use crate::config::GameConfig;
use crate::debug_log;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Outcome of scoring one line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreResult {
    /// The line did not parse into exactly `digit_count` in-range digits.
    Invalid,
    /// Number of positions where the guess matches the code.
    Correct(usize),
}

/// The hidden digit sequence. Its digits never leave this module; `Debug`
/// only reveals the length.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretCode(Vec<u32>);

impl SecretCode {
    fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let digits = (0..config.digit_count())
            .map(|_| rng.random_range(1..=config.max_digit()))
            .collect();
        Self(digits)
    }

    fn positional_matches(&self, guess: &[u32]) -> usize {
        self.0
            .iter()
            .zip(guess)
            .filter(|(code, guessed)| code == guessed)
            .count()
    }
}

impl fmt::Debug for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretCode([hidden; {}])", self.0.len())
    }
}

/// Splits a raw guess into digits in `1..=max_digit`.
///
/// Input containing interior whitespace is split on whitespace runs;
/// otherwise every character is its own token. Tokens that are not plain
/// decimal numbers (including ones with a leading zero) or that fall outside
/// the range are dropped, not replaced, so the result may be shorter than the
/// input.
#[must_use]
pub fn parse_digits(text: &str, max_digit: u32) -> Vec<u32> {
    let trimmed = text.trim();
    let tokens: Vec<&str> = if trimmed.contains(char::is_whitespace) {
        trimmed.split_whitespace().collect()
    } else {
        trimmed
            .char_indices()
            .map(|(i, c)| &trimmed[i..i + c.len_utf8()])
            .collect()
    };

    tokens
        .into_iter()
        .filter_map(|token| parse_token(token, max_digit))
        .collect()
}

fn parse_token(token: &str, max_digit: u32) -> Option<u32> {
    if token.is_empty() || token.starts_with('0') || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token
        .parse::<u32>()
        .ok()
        .filter(|&value| value > 0 && value <= max_digit)
}

pub struct CodeEngine<R = StdRng> {
    config: GameConfig,
    code: SecretCode,
    guess_count: u32,
    rng: R,
}

impl CodeEngine<StdRng> {
    /// Creates an engine seeded from the operating system.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> CodeEngine<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let code = SecretCode::generate(&config, &mut rng);
        debug_log!("Generated a {}-digit code", config.digit_count());
        Self {
            config,
            code,
            guess_count: 0,
            rng,
        }
    }

    /// Starts a new game: fresh code, guess counter back to zero.
    pub fn reset(&mut self, config: GameConfig) {
        self.code = SecretCode::generate(&config, &mut self.rng);
        self.config = config;
        self.guess_count = 0;
        debug_log!("Reset with a new {}-digit code", config.digit_count());
    }

    /// Scores a raw guess. Invalid guesses do not count against the player.
    pub fn score(&mut self, raw_guess: &str) -> ScoreResult {
        let guess = parse_digits(raw_guess, self.config.max_digit());
        if guess.len() != self.config.digit_count() {
            debug_log!(
                "Rejected guess: parsed {} of {} digits",
                guess.len(),
                self.config.digit_count()
            );
            return ScoreResult::Invalid;
        }

        self.guess_count += 1;
        ScoreResult::Correct(self.code.positional_matches(&guess))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.config.digit_count()
    }

    #[must_use]
    pub fn max_digit(&self) -> u32 {
        self.config.max_digit()
    }

    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }
}

#[cfg(test)]
impl CodeEngine<StdRng> {
    /// Engine with a fixed code, for exercising scoring and the session loop.
    pub(crate) fn with_code(config: GameConfig, digits: Vec<u32>) -> Self {
        let mut engine = Self::with_rng(config, StdRng::seed_from_u64(0));
        engine.code = SecretCode(digits);
        engine
    }
}
