/// CalendarStore owns the calendar controller state and the keyboard focus in its grid
use crate::actions::Action;
use chrono::{Days, NaiveDate};
use std::sync::{Arc, RwLock};
use trellis_core::calendar::dates::{first_of_month, month_key};
use trellis_core::calendar::{CalendarAction, CalendarEvent, CalendarState};
use trellis_core::components::CalendarViewProps;

/// Internal state for the calendar panel
#[derive(Debug, Clone)]
pub struct CalendarStoreState {
    /// Committed calendar state
    pub calendar: CalendarState,

    /// Day highlighted by keyboard navigation
    pub focused: NaiveDate,

    /// Presentation options (locale, mods)
    pub view: CalendarViewProps,
}

/// Store that holds the calendar state
#[derive(Clone)]
pub struct CalendarStore {
    state: Arc<RwLock<CalendarStoreState>>,
}

impl CalendarStore {
    pub fn new(calendar: CalendarState, view: CalendarViewProps) -> Self {
        let focused = calendar.selection().start.unwrap_or(calendar.cursor());
        Self {
            state: Arc::new(RwLock::new(CalendarStoreState {
                calendar,
                focused,
                view,
            })),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> CalendarStoreState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: apply the action and return the event to dispatch once committed
    pub fn reduce(&self, action: &Action) -> Option<CalendarEvent> {
        let mut state = self.state.write().unwrap();

        match action {
            Action::Calendar(calendar_action) => apply(&mut state, calendar_action),
            Action::SelectFocusedDay => {
                let focused = state.focused;
                apply(&mut state, &CalendarAction::SelectDay(focused))
            }
            Action::MoveCalendarFocus(delta) => move_focus(&mut state, *delta),
            _ => None,
        }
    }
}

fn apply(state: &mut CalendarStoreState, action: &CalendarAction) -> Option<CalendarEvent> {
    let transition = state.calendar.reduce(action);
    state.calendar = transition.state;

    // keep the focus inside the displayed month after navigation
    match transition.event {
        Some(CalendarEvent::NavigatedPrevious(cursor)) | Some(CalendarEvent::NavigatedNext(cursor)) => {
            state.focused = cursor;
        }
        Some(CalendarEvent::DaySelected(_)) => {
            if let CalendarAction::SelectDay(date) = action {
                state.focused = *date;
            }
        }
        None => {}
    }
    transition.event
}

fn move_focus(state: &mut CalendarStoreState, delta: i64) -> Option<CalendarEvent> {
    let days = Days::new(delta.unsigned_abs());
    let target = if delta >= 0 {
        state.focused.checked_add_days(days)
    } else {
        state.focused.checked_sub_days(days)
    }?;

    let cursor = state.calendar.cursor();
    if month_key(target) == month_key(cursor) {
        state.focused = target;
        return None;
    }

    // leaving the displayed month pages the calendar, unless the bounds forbid it
    let navigation = if month_key(target) < month_key(cursor) {
        CalendarAction::NavigatePrevious
    } else {
        CalendarAction::NavigateNext
    };
    let transition = state.calendar.reduce(&navigation);
    match transition.event {
        Some(event) if first_of_month(target) == transition.state.cursor() => {
            state.calendar = transition.state;
            state.focused = target;
            Some(event)
        }
        _ => None,
    }
}
