/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use trellis_core::calendar::{CalendarAction, CalendarEvent};
use trellis_core::components::{ModalAction, ModalEvent};

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// Forwarded to the calendar reducer
    Calendar(CalendarAction),

    /// Move the keyboard focus inside the calendar grid by a number of days
    MoveCalendarFocus(i64),

    /// Select the day under the keyboard focus
    SelectFocusedDay,

    /// Forwarded to the modal reducer
    Modal(ModalAction),

    /// User picked a room type in the radio group
    SelectRoom(String),

    /// User pressed the book button
    Book,

    /// User changed focus to a different panel
    FocusPanel(PanelId),

    /// User toggled the help overlay
    ToggleHelp,

    // ===== System/Effect Actions =====
    /// The calendar committed a new state
    CalendarChanged(CalendarEvent),

    /// The modal committed a new state
    ModalChanged(ModalEvent),

    /// Spinner animation frame
    Tick,

    /// Application should exit
    Quit,
}

/// Identifies different panels in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Calendar,
    Widgets,
}

impl PanelId {
    pub fn next(self) -> Self {
        match self {
            Self::Calendar => Self::Widgets,
            Self::Widgets => Self::Calendar,
        }
    }
}
