use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::dates::month_key;
use crate::exceptions::TrellisError;

/// Inclusive date limits. Days are compared whole, so a min date behaves as its
/// start of day and a max date as its end of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self, TrellisError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(TrellisError::InvalidBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        !(self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max))
    }

    /// True when no earlier month can be shown: the cursor's month is at or before the min's month
    pub fn blocks_previous(&self, cursor: NaiveDate) -> bool {
        self.min
            .is_some_and(|min| month_key(cursor) <= month_key(min))
    }

    /// True when no later month can be shown: the cursor's month is at or after the max's month
    pub fn blocks_next(&self, cursor: NaiveDate) -> bool {
        self.max
            .is_some_and(|max| month_key(cursor) >= month_key(max))
    }
}
