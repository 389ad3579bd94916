use std::{
    io::{self, BufRead},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

const HOURS_SCALE: u32 = 2;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0} is not a valid number.")]
    InvalidNumber(String),

    #[error("{0} is not a valid decimal number.")]
    InvalidDecimal(String),

    #[error("A project ID is required.")]
    MissingProjectId,
}

/// Reads one line, trimmed. A blank line and end of input both mean "no value".
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

pub fn parse_integer<T: FromStr>(value: Option<String>) -> Result<Option<T>, InputError> {
    value
        .map(|text| text.parse().map_err(|_| InputError::InvalidNumber(text)))
        .transpose()
}

pub fn parse_hours(value: Option<String>) -> Result<Option<Decimal>, InputError> {
    value
        .map(|text| {
            // Decimal::from_str would otherwise read "1_0.5" as 10.5
            if text.contains('_') {
                return Err(InputError::InvalidDecimal(text));
            }
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
                .and_then(round_hours)
                .ok_or(InputError::InvalidDecimal(text))
        })
        .transpose()
}

/// Two decimal places, half away from zero, always carrying the full scale (10.5 -> 10.50).
///
/// `None` when the value is too large to hold two decimal places.
pub fn round_hours(hours: Decimal) -> Option<Decimal> {
    let mut rounded = hours.round_dp_with_strategy(HOURS_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(HOURS_SCALE);
    (rounded.scale() == HOURS_SCALE).then_some(rounded)
}
