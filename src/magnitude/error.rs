//! Errors surfaced by the one recoverable conversion boundary,
//! `from_decimal_str`/`FromStr`. Every other error condition in this crate
//! (underflow, division by zero, an out-of-range packed word) is a kernel
//! contract violation and panics instead — see those operations' own docs.

use std::fmt::{self, Display, Formatter};

/// Why a string failed to parse as a [`crate::BigDecimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalParseError {
    /// The input was the empty string.
    Empty,

    /// The input contained a byte that isn't an ASCII decimal digit.
    InvalidDigit(char),

    /// The input had a leading zero and was not the single digit `"0"`.
    LeadingZero,
}

impl Display for DecimalParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::InvalidDigit(c) => write!(f, "invalid digit {c:?}"),
            Self::LeadingZero => write!(f, "leading zero"),
        }
    }
}

impl std::error::Error for DecimalParseError {}
