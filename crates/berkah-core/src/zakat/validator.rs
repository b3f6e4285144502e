//! Headcount validation for the zakat form.

use thiserror::Error;

/// Why a headcount string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("no headcount was entered")]
    Empty,

    #[error("headcount must be non-zero")]
    Zero,

    #[error("headcount is not a number: {0}")]
    NotANumber(String),
}

/// Parse the headcount field.
///
/// Three conditions are screened: an empty field, text that does not parse
/// as a decimal, and a parsed value of exactly zero. Anything else passes
/// through untouched.
pub fn parse_count(text: &str) -> Result<f64, CountError> {
    if text.is_empty() {
        return Err(CountError::Empty);
    }

    let count: f64 = text
        .parse()
        .map_err(|_| CountError::NotANumber(text.to_string()))?;

    if count == 0.0 {
        return Err(CountError::Zero);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(parse_count(""), Err(CountError::Empty));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(parse_count("0"), Err(CountError::Zero));
        assert_eq!(parse_count("0.0"), Err(CountError::Zero));
        assert_eq!(parse_count("-0"), Err(CountError::Zero));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        assert_eq!(
            parse_count("abc"),
            Err(CountError::NotANumber("abc".into()))
        );
        assert_eq!(
            parse_count("3 people"),
            Err(CountError::NotANumber("3 people".into()))
        );
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        // Only the truly empty field maps to Empty; stray whitespace falls
        // through to the numeric parse.
        assert_eq!(parse_count(" "), Err(CountError::NotANumber(" ".into())));
    }

    #[test]
    fn test_valid_counts_parse() {
        assert_eq!(parse_count("5"), Ok(5.0));
        assert_eq!(parse_count("2.5"), Ok(2.5));
        assert_eq!(parse_count("1000"), Ok(1000.0));
    }

    #[test]
    fn test_negative_counts_pass_through() {
        // The screen only guards empty, zero and non-numeric input.
        assert_eq!(parse_count("-3"), Ok(-3.0));
    }
}
