/// Fatal startup errors. Every variant terminates the process before any game
/// state exists.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Wrong number of arguments.")]
    WrongArgumentCount,

    #[error("Arguments must be digits.")]
    NotDigits,

    #[error("Number of digits must be at least 1.")]
    NoDigits,

    #[error("Number of digits is too large: {0}.")]
    DigitCountTooLarge(String),

    #[error("Maximum digit argument out of range: {0}.")]
    MaxDigitOutOfRange(String),

    #[error("{0}")]
    Cli(#[from] clap::Error),
}

impl UsageError {
    pub const EXIT_CODE: i32 = 2;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cli(err) => err.exit_code(),
            _ => Self::EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(UsageError::WrongArgumentCount.to_string(), "Wrong number of arguments.");
        assert_eq!(UsageError::NotDigits.to_string(), "Arguments must be digits.");
        assert_eq!(
            UsageError::MaxDigitOutOfRange("10".to_string()).to_string(),
            "Maximum digit argument out of range: 10."
        );
    }

    #[test]
    fn test_exit_code_is_two() {
        assert_eq!(UsageError::NotDigits.exit_code(), 2);
        assert_eq!(UsageError::NoDigits.exit_code(), 2);
    }
}
