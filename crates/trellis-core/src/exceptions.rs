use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, PartialEq)]
pub enum TrellisError {
    InvalidDate(String),
    InvalidBounds { min: NaiveDate, max: NaiveDate },
    InvalidLocale(String),
    ParseError(String),
}

impl fmt::Display for TrellisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "Invalid date: {s}"),
            Self::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: min date {min} is after max date {max}")
            }
            Self::InvalidLocale(s) => write!(f, "Invalid locale: {s}"),
            Self::ParseError(s) => write!(f, "ParseError: {s}"),
        }
    }
}

impl std::error::Error for TrellisError {}

impl From<serde_json::Error> for TrellisError {
    fn from(e: serde_json::Error) -> Self {
        Self::ParseError(e.to_string())
    }
}
