/// 42-cell month grid generation
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::dates::{first_of_month, month_key};
use crate::calendar::selection::{Selection, SelectionType};
use crate::calendar::state::CalendarState;

/// Six weeks of seven days, enough for any month at any week start
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthPosition {
    Previous,
    Current,
    Next,
}

impl MonthPosition {
    pub fn class_mod(&self) -> Option<&'static str> {
        match self {
            Self::Previous => Some("previous-month"),
            Self::Current => None,
            Self::Next => Some("next-month"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    Selected,
    SelectedStart,
    SelectedEnd,
    SelectedBetween,
}

impl Highlight {
    pub fn class_mod(&self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::SelectedStart => "selected-start",
            Self::SelectedEnd => "selected-end",
            Self::SelectedBetween => "selected-between",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub position: MonthPosition,
    pub enabled: bool,
    pub highlight: Option<Highlight>,
}

impl DayCell {
    /// Class modifiers for this cell, month position first
    pub fn mods(&self) -> Vec<&'static str> {
        self.position
            .class_mod()
            .into_iter()
            .chain(self.highlight.map(|h| h.class_mod()))
            .collect()
    }
}

/// Number of trailing days of the previous month shown before day 1.
/// Weekdays are numbered from Sunday = 0.
pub fn leading_days(first_weekday: u32, start_weekday: u32) -> u32 {
    (first_weekday % 7 + 7 - start_weekday % 7) % 7
}

pub fn highlight_for(
    date: NaiveDate,
    selection: &Selection,
    selection_type: SelectionType,
) -> Option<Highlight> {
    let as_single = selection_type == SelectionType::Normal || selection.is_degenerate();
    match (selection.start, selection.end) {
        (Some(start), _) if start == date && as_single => Some(Highlight::Selected),
        (Some(start), _) if start == date => Some(Highlight::SelectedStart),
        (_, Some(end)) if end == date && !as_single => Some(Highlight::SelectedEnd),
        (Some(start), Some(end)) if !as_single && start < date && date < end => {
            Some(Highlight::SelectedBetween)
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGrid {
    /// First day of the rendered month
    pub month: NaiveDate,
    pub cells: Vec<DayCell>,
}

impl DayGrid {
    pub fn build(state: &CalendarState, start_week_day: u32) -> Self {
        Self::build_with(
            state.cursor(),
            start_week_day,
            state.selection_type(),
            &state.selection(),
            |d| state.is_enabled(d),
        )
    }

    pub fn build_with(
        cursor: NaiveDate,
        start_week_day: u32,
        selection_type: SelectionType,
        selection: &Selection,
        is_enabled: impl Fn(NaiveDate) -> bool,
    ) -> Self {
        let month = first_of_month(cursor);
        let leading = leading_days(month.weekday().num_days_from_sunday(), start_week_day);
        let first = month
            .checked_sub_days(Days::new(leading as u64))
            .unwrap_or(month);

        let cells = first
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| DayCell {
                date,
                position: match month_key(date).cmp(&month_key(month)) {
                    std::cmp::Ordering::Less => MonthPosition::Previous,
                    std::cmp::Ordering::Equal => MonthPosition::Current,
                    std::cmp::Ordering::Greater => MonthPosition::Next,
                },
                enabled: is_enabled(date),
                highlight: highlight_for(date, selection, selection_type),
            })
            .collect();

        Self { month, cells }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn first(&self) -> Option<&DayCell> {
        self.cells.first()
    }

    pub fn last(&self) -> Option<&DayCell> {
        self.cells.last()
    }

    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells.iter().position(|c| c.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dates::shift_month;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain(cursor: NaiveDate, start: u32) -> DayGrid {
        DayGrid::build_with(
            cursor,
            start,
            SelectionType::Normal,
            &Selection::empty(),
            |_| true,
        )
    }

    #[test]
    fn test_february_2024_monday_start() {
        let grid = plain(ymd(2024, 2, 1), 1);
        let first = grid.first().unwrap();
        let last = grid.last().unwrap();
        assert_eq!(first.date, ymd(2024, 1, 29));
        assert_eq!(first.date.weekday(), Weekday::Mon);
        assert_eq!(first.position, MonthPosition::Previous);
        assert_eq!(last.date, ymd(2024, 3, 10));
        assert_eq!(last.date.weekday(), Weekday::Sun);
        assert_eq!(last.position, MonthPosition::Next);
    }

    #[test]
    fn test_always_42_cells_starting_on_week_start() {
        let mut cursor = ymd(1999, 1, 1);
        for _ in 0..60 {
            for start in 0..7 {
                let grid = plain(cursor, start);
                assert_eq!(grid.cells.len(), GRID_CELLS);
                assert_eq!(
                    grid.first().unwrap().date.weekday().num_days_from_sunday(),
                    start
                );
                assert_eq!(grid.weeks().count(), 6);
                let current = grid
                    .cells
                    .iter()
                    .filter(|c| c.position == MonthPosition::Current)
                    .count();
                assert_eq!(
                    current as u32,
                    crate::calendar::dates::days_in_month(cursor.year(), cursor.month())
                );
            }
            cursor = shift_month(cursor, 1);
        }
    }

    #[test]
    fn test_no_leading_days_when_month_starts_on_week_start() {
        // 1 September 2024 is a Sunday
        let grid = plain(ymd(2024, 9, 1), 0);
        assert_eq!(grid.first().unwrap().date, ymd(2024, 9, 1));
        assert_eq!(leading_days(0, 0), 0);
        assert_eq!(leading_days(0, 1), 6);
        assert_eq!(leading_days(4, 1), 3);
        assert_eq!(leading_days(2, 5), 4);
    }

    #[test]
    fn test_month_tags_across_year_boundary() {
        let grid = plain(ymd(2023, 12, 1), 1);
        let jan = grid.position_of(ymd(2024, 1, 1)).unwrap();
        assert_eq!(grid.cells[jan].position, MonthPosition::Next);
        let grid = plain(ymd(2024, 1, 1), 0);
        let dec = grid.position_of(ymd(2023, 12, 31)).unwrap();
        assert_eq!(grid.cells[dec].position, MonthPosition::Previous);
    }

    #[test]
    fn test_range_highlights() {
        let selection = Selection::range(ymd(2024, 2, 10), ymd(2024, 2, 13));
        assert_eq!(
            highlight_for(ymd(2024, 2, 10), &selection, SelectionType::Range),
            Some(Highlight::SelectedStart)
        );
        assert_eq!(
            highlight_for(ymd(2024, 2, 11), &selection, SelectionType::Range),
            Some(Highlight::SelectedBetween)
        );
        assert_eq!(
            highlight_for(ymd(2024, 2, 13), &selection, SelectionType::Range),
            Some(Highlight::SelectedEnd)
        );
        assert_eq!(
            highlight_for(ymd(2024, 2, 14), &selection, SelectionType::Range),
            None
        );
    }

    #[test]
    fn test_open_range_marks_start_only() {
        let selection = Selection::single(ymd(2024, 2, 10));
        assert_eq!(
            highlight_for(ymd(2024, 2, 10), &selection, SelectionType::Range),
            Some(Highlight::SelectedStart)
        );
        assert_eq!(
            highlight_for(ymd(2024, 2, 10), &selection, SelectionType::Normal),
            Some(Highlight::Selected)
        );
    }

    #[test]
    fn test_equal_range_collapses_to_selected() {
        let selection = Selection::range(ymd(2024, 2, 10), ymd(2024, 2, 10));
        let grid = DayGrid::build_with(
            ymd(2024, 2, 1),
            1,
            SelectionType::Range,
            &selection,
            |_| true,
        );
        let highlighted: Vec<_> = grid.cells.iter().filter_map(|c| c.highlight).collect();
        assert_eq!(highlighted, vec![Highlight::Selected]);
    }

    #[test]
    fn test_cell_mods() {
        let grid = DayGrid::build_with(
            ymd(2024, 2, 1),
            1,
            SelectionType::Range,
            &Selection::range(ymd(2024, 1, 30), ymd(2024, 2, 2)),
            |_| true,
        );
        assert_eq!(grid.cells[0].mods(), vec!["previous-month"]);
        assert_eq!(grid.cells[1].mods(), vec!["previous-month", "selected-start"]);
        assert_eq!(grid.cells[2].mods(), vec!["previous-month", "selected-between"]);
        assert_eq!(grid.cells[4].mods(), vec!["selected-end"]);
    }
}
