use thiserror::Error;

/// Error returned when a source line cannot be recorded on a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InvalidLineError {
    /// The line was zero or negative.
    #[error("source line must be positive, got {0}")]
    NotPositive(i64),
    /// The line does not fit the 32-bit range used for provenance.
    #[error("source line {0} exceeds the supported range")]
    OutOfRange(i64),
}

impl InvalidLineError {
    /// Returns the rejected line value.
    #[must_use]
    pub const fn line(self) -> i64 {
        match self {
            Self::NotPositive(line) | Self::OutOfRange(line) => line,
        }
    }
}

pub(crate) fn validate_line(line: i64) -> Result<u32, InvalidLineError> {
    if line <= 0 {
        return Err(InvalidLineError::NotPositive(line));
    }

    u32::try_from(line).map_err(|_| InvalidLineError::OutOfRange(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_first_line() {
        assert_eq!(validate_line(1), Ok(1));
    }

    #[test]
    fn rejects_zero_and_negative_lines() {
        assert_eq!(validate_line(0), Err(InvalidLineError::NotPositive(0)));
        assert_eq!(validate_line(-5), Err(InvalidLineError::NotPositive(-5)));
    }

    #[test]
    fn rejects_lines_beyond_u32() {
        let too_large = i64::from(u32::MAX) + 1;
        assert_eq!(
            validate_line(too_large),
            Err(InvalidLineError::OutOfRange(too_large))
        );
        assert_eq!(validate_line(i64::from(u32::MAX)), Ok(u32::MAX));
    }

    #[test]
    fn error_reports_rejected_value() {
        assert_eq!(InvalidLineError::NotPositive(-3).line(), -3);
        assert_eq!(
            InvalidLineError::NotPositive(0).to_string(),
            "source line must be positive, got 0"
        );
    }
}
