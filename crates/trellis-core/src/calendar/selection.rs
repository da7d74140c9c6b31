use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    #[default]
    Normal,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    StartSelected,
    RangeSelected,
}

/// Selected dates. Normal selection only ever fills `start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: None,
        }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (Some(_), Some(_)) => SelectionPhase::RangeSelected,
            (Some(_), None) => SelectionPhase::StartSelected,
            _ => SelectionPhase::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phase() == SelectionPhase::Empty
    }

    /// A range whose end equals its start; rendered like a single selection
    pub fn is_degenerate(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s == e)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.into_iter().chain(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_phases() {
        assert_eq!(Selection::empty().phase(), SelectionPhase::Empty);
        assert_eq!(
            Selection::single(ymd(2024, 1, 1)).phase(),
            SelectionPhase::StartSelected
        );
        assert_eq!(
            Selection::range(ymd(2024, 1, 1), ymd(2024, 1, 3)).phase(),
            SelectionPhase::RangeSelected
        );
    }

    #[test]
    fn test_degenerate() {
        assert!(Selection::range(ymd(2024, 1, 1), ymd(2024, 1, 1)).is_degenerate());
        assert!(!Selection::range(ymd(2024, 1, 1), ymd(2024, 1, 2)).is_degenerate());
        assert!(!Selection::single(ymd(2024, 1, 1)).is_degenerate());
    }

    #[test]
    fn test_selection_type_serde() {
        let t: SelectionType = serde_json::from_str("\"range\"").unwrap();
        assert_eq!(t, SelectionType::Range);
    }
}
