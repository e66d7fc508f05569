use crate::error::UsageError;

pub const DEFAULT_DIGIT_COUNT: usize = 4;
pub const DEFAULT_MAX_DIGIT: u32 = 4;
pub const MAX_DIGIT_COUNT: usize = 1000;
pub const MIN_MAX_DIGIT: u32 = 2;
pub const MAX_MAX_DIGIT: u32 = 9;

/// Difficulty settings for a session. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    digit_count: usize,
    max_digit: u32,
}

impl GameConfig {
    pub fn new(digit_count: usize, max_digit: u32) -> Result<Self, UsageError> {
        if digit_count == 0 {
            return Err(UsageError::NoDigits);
        }
        if digit_count > MAX_DIGIT_COUNT {
            return Err(UsageError::DigitCountTooLarge(digit_count.to_string()));
        }
        if !(MIN_MAX_DIGIT..=MAX_MAX_DIGIT).contains(&max_digit) {
            return Err(UsageError::MaxDigitOutOfRange(max_digit.to_string()));
        }
        Ok(Self {
            digit_count,
            max_digit,
        })
    }

    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digit_count
    }

    #[must_use]
    pub fn max_digit(&self) -> u32 {
        self.max_digit
    }

    /// Number of distinct codes, `max_digit ^ digit_count`. `None` if it
    /// does not fit in a `u128`.
    #[must_use]
    pub fn combinations(&self) -> Option<u128> {
        let exponent = u32::try_from(self.digit_count).ok()?;
        u128::from(self.max_digit).checked_pow(exponent)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digit_count: DEFAULT_DIGIT_COUNT,
            max_digit: DEFAULT_MAX_DIGIT,
        }
    }
}
