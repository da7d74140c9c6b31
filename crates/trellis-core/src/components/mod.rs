/// Presentational components. Each one is a render function from immutable
/// props to a `Node` tree.
pub mod button;
pub mod calendar;
pub mod days_panel;
pub mod days_view;
pub mod list;
pub mod modal;
pub mod price;
pub mod radio_button;
pub mod spinner;

pub use button::{ButtonProps, render_button};
pub use calendar::{CalendarViewProps, render_calendar};
pub use days_panel::{DaysPanelProps, render_days_panel};
pub use days_view::{DaysViewProps, render_days_view};
pub use list::{ListAlign, ListProps, render_list};
pub use modal::{
    ESCAPE_KEY_CODE, ModalAction, ModalEffect, ModalEvent, ModalState, ModalTransition,
    render_modal,
};
pub use price::{Currency, PriceProps, format_price, render_price};
pub use radio_button::{RadioButtonProps, RadioOption, render_radio_button};
pub use spinner::{SPINNER_FRAMES, SpinnerProps, render_spinner, spinner_frame};
