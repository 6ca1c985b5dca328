use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Money is represented as an exact decimal to avoid floating-point drift.
pub type Amount = Decimal;

/// Format an amount with exactly two fractional digits.
/// Example: 200 -> "200.00", -12.345 -> "-12.35"
pub fn format_amount(amount: Amount) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Parse user input into an amount. Either `.` or `,` is accepted as the
/// fractional separator, and an exponent suffix is allowed.
/// Example: "50.00" -> 50.00, "50,5" -> 50.5, "100" -> 100, "1.5e2" -> 150
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    // Digit group separators are not part of the accepted syntax
    if input.contains('_') {
        return Err(ParseAmountError::InvalidFormat(input.to_string()));
    }

    let normalized = input.replace(',', ".");
    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        Decimal::from_str(&normalized)
    };
    parsed.map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "no amount given"),
            ParseAmountError::InvalidFormat(input) => {
                write!(f, "invalid money format '{}'", input)
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}
