/// Locale definitions: month and weekday names plus the first day of the week
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::exceptions::TrellisError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthName {
    pub name: String,
    pub short: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDayName {
    pub name: String,
    pub short: String,
}

/// Month names (January first), weekday names (Sunday first) and the
/// weekday the calendar grid starts on (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub months: Vec<MonthName>,
    pub week_days: Vec<WeekDayName>,
    pub start_week_day: u32,
}

fn names<T>(pairs: &[(&str, &str)], make: fn(String, String) -> T) -> Vec<T> {
    pairs
        .iter()
        .map(|(name, short)| make(name.to_string(), short.to_string()))
        .collect()
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            months: names(
                &[
                    ("January", "Jan"),
                    ("February", "Feb"),
                    ("March", "Mar"),
                    ("April", "Apr"),
                    ("May", "May"),
                    ("June", "Jun"),
                    ("July", "Jul"),
                    ("August", "Aug"),
                    ("September", "Sep"),
                    ("October", "Oct"),
                    ("November", "Nov"),
                    ("December", "Dec"),
                ],
                |name, short| MonthName { name, short },
            ),
            week_days: names(
                &[
                    ("Sunday", "Sun"),
                    ("Monday", "Mon"),
                    ("Tuesday", "Tue"),
                    ("Wednesday", "Wed"),
                    ("Thursday", "Thu"),
                    ("Friday", "Fri"),
                    ("Saturday", "Sat"),
                ],
                |name, short| WeekDayName { name, short },
            ),
            start_week_day: 1,
        }
    }
}

impl Locale {
    /// Parse and validate a locale from its JSON representation
    pub fn from_json(s: &str) -> Result<Self, TrellisError> {
        let locale: Locale = serde_json::from_str(s)?;
        locale.validate()?;
        Ok(locale)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrellisError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrellisError::InvalidLocale(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    pub fn with_start_week_day(mut self, start_week_day: u32) -> Result<Self, TrellisError> {
        self.start_week_day = start_week_day;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), TrellisError> {
        if self.months.len() != 12 {
            return Err(TrellisError::InvalidLocale(format!(
                "expected 12 months, got {}",
                self.months.len()
            )));
        }
        if self.week_days.len() != 7 {
            return Err(TrellisError::InvalidLocale(format!(
                "expected 7 week days, got {}",
                self.week_days.len()
            )));
        }
        if self.start_week_day > 6 {
            return Err(TrellisError::InvalidLocale(format!(
                "startWeekDay must be between 0 and 6, got {}",
                self.start_week_day
            )));
        }
        Ok(())
    }

    /// Month name for a 1-based month number
    pub fn month(&self, month: u32) -> &MonthName {
        &self.months[(month as usize - 1) % 12]
    }

    /// Weekday names in display order, starting at `start_week_day`
    pub fn ordered_week_days(&self) -> Vec<&WeekDayName> {
        let start = self.start_week_day as usize % 7;
        self.week_days[start..]
            .iter()
            .chain(self.week_days[..start].iter())
            .collect()
    }
}
