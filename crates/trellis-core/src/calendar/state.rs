/// Calendar controller state and its reducer.
/// The state is immutable from the outside: every change goes through
/// `CalendarState::reduce`, which returns the next state plus the event the
/// host should dispatch once that state has been committed.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::calendar::bounds::Bounds;
use crate::calendar::dates::{first_of_month, parse_date, same_month, shift_month};
use crate::calendar::selection::{Selection, SelectionPhase, SelectionType};
use crate::exceptions::TrellisError;

/// Custom rule deciding whether a day may be picked
pub type DayPredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// Everything the user can do to a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarAction {
    SelectDay(NaiveDate),
    NavigatePrevious,
    NavigateNext,
}

/// Emitted after a state change has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEvent {
    DaySelected(Selection),
    NavigatedPrevious(NaiveDate),
    NavigatedNext(NaiveDate),
}

/// Initial configuration of a calendar instance
#[derive(Debug, Clone)]
pub struct CalendarProps {
    /// Up to two ISO dates: the selected date, or range start and end
    pub initial_dates: Vec<String>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub selection_type: SelectionType,
    /// Month shown when there is no initial date
    pub today: NaiveDate,
}

impl CalendarProps {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            initial_dates: Vec::new(),
            min_date: None,
            max_date: None,
            selection_type: SelectionType::Normal,
            today,
        }
    }
}

/// Result of reducing one action
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: CalendarState,
    pub event: Option<CalendarEvent>,
}

#[derive(Clone)]
pub struct CalendarState {
    selection_type: SelectionType,
    selection: Selection,
    /// Bounds as configured by the props
    configured: Bounds,
    /// Bounds currently applied; the min moves to the range start while a range is open
    bounds: Bounds,
    cursor: NaiveDate,
    predicate: Option<DayPredicate>,
}

impl fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("selection_type", &self.selection_type)
            .field("selection", &self.selection)
            .field("bounds", &self.bounds)
            .field("cursor", &self.cursor)
            .field("has_predicate", &self.predicate.is_some())
            .finish()
    }
}

fn parse_optional(s: &Option<String>) -> Result<Option<NaiveDate>, TrellisError> {
    s.as_deref().map(parse_date).transpose()
}

impl CalendarState {
    pub fn new(props: &CalendarProps) -> Result<Self, TrellisError> {
        if props.initial_dates.len() > 2 {
            return Err(TrellisError::ParseError(format!(
                "a calendar takes at most two initial dates, got {}",
                props.initial_dates.len()
            )));
        }
        let configured = Bounds::new(
            parse_optional(&props.min_date)?,
            parse_optional(&props.max_date)?,
        )?;
        let dates = props
            .initial_dates
            .iter()
            .map(|s| parse_date(s))
            .collect::<Result<Vec<_>, _>>()?;

        let cursor = first_of_month(dates.first().copied().unwrap_or(props.today));

        let mut selection = match (props.selection_type, dates.as_slice()) {
            (_, []) => Selection::empty(),
            (SelectionType::Normal, [start, rest @ ..]) => {
                if !rest.is_empty() {
                    log::warn!("A normal calendar ignores every initial date but the first");
                }
                Selection::single(*start)
            }
            (SelectionType::Range, [start]) => Selection::single(*start),
            (SelectionType::Range, [start, end, ..]) => Selection::range(*start, *end),
        };

        if selection.dates().any(|d| !configured.contains(d)) {
            log::warn!(
                "A calendar instance contains a selected date outside of the min date and max date boundaries"
            );
            selection = Selection::empty();
        }
        if let (Some(start), Some(end)) = (selection.start, selection.end) {
            if end < start {
                log::warn!("A calendar instance has a range ending ({end}) before it starts ({start})");
                selection = Selection::empty();
            }
        }

        let mut bounds = configured;
        if props.selection_type == SelectionType::Range && !selection.is_degenerate() {
            if let Some(start) = selection.start {
                bounds.min = Some(start);
            }
        }

        Ok(Self {
            selection_type: props.selection_type,
            selection,
            configured,
            bounds,
            cursor,
            predicate: None,
        })
    }

    pub fn with_day_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn selection_type(&self) -> SelectionType {
        self.selection_type
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// First day of the month currently displayed
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn is_enabled(&self, date: NaiveDate) -> bool {
        self.bounds.contains(date) && self.predicate.as_ref().map_or(true, |p| p(date))
    }

    pub fn can_navigate_previous(&self) -> bool {
        !self.bounds.blocks_previous(self.cursor)
    }

    pub fn can_navigate_next(&self) -> bool {
        !self.bounds.blocks_next(self.cursor)
    }

    /// Reducer: compute the next state for `action`
    pub fn reduce(&self, action: &CalendarAction) -> Transition {
        match action {
            CalendarAction::SelectDay(date) => self.select(*date),
            CalendarAction::NavigatePrevious => {
                if !self.can_navigate_previous() {
                    log::debug!("Previous month navigation is disabled at {}", self.cursor);
                    return self.unchanged();
                }
                let next = Self {
                    cursor: shift_month(self.cursor, -1),
                    ..self.clone()
                };
                let event = CalendarEvent::NavigatedPrevious(next.cursor);
                Transition {
                    state: next,
                    event: Some(event),
                }
            }
            CalendarAction::NavigateNext => {
                if !self.can_navigate_next() {
                    log::debug!("Next month navigation is disabled at {}", self.cursor);
                    return self.unchanged();
                }
                let next = Self {
                    cursor: shift_month(self.cursor, 1),
                    ..self.clone()
                };
                let event = CalendarEvent::NavigatedNext(next.cursor);
                Transition {
                    state: next,
                    event: Some(event),
                }
            }
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: self.clone(),
            event: None,
        }
    }

    fn select(&self, date: NaiveDate) -> Transition {
        if !self.is_enabled(date) {
            log::debug!("Ignoring selection of disabled day {date}");
            return self.unchanged();
        }

        // a range never ends before it starts; an equal initial range leaves earlier days enabled
        if self.selection_type == SelectionType::Range
            && self.selection.start.is_some_and(|start| date < start)
        {
            log::debug!("Ignoring {date}, it is before the range start");
            return self.unchanged();
        }

        let mut next = self.clone();
        match self.selection_type {
            SelectionType::Normal => next.selection = Selection::single(date),
            SelectionType::Range => match (self.selection.start, self.selection.end) {
                (None, _) => {
                    next.selection = Selection::single(date);
                    next.bounds.min = Some(date);
                }
                (Some(start), _) if start == date => {
                    next.selection = Selection::empty();
                    next.bounds = self.configured;
                }
                // an open range gets its end; a closed range has its end replaced
                (Some(start), _) => next.selection = Selection::range(start, date),
            },
        }

        if !same_month(date, self.cursor) {
            next.cursor = first_of_month(date);
        }

        let event = CalendarEvent::DaySelected(next.selection);
        Transition {
            state: next,
            event: Some(event),
        }
    }
}
