/// Calendar date selection and month navigation
pub mod bounds;
pub mod dates;
pub mod grid;
pub mod locale;
pub mod selection;
pub mod state;

pub use bounds::Bounds;
pub use grid::{DayCell, DayGrid, GRID_CELLS, Highlight, MonthPosition};
pub use locale::{Locale, MonthName, WeekDayName};
pub use selection::{Selection, SelectionPhase, SelectionType};
pub use state::{CalendarAction, CalendarEvent, CalendarProps, CalendarState, DayPredicate, Transition};
