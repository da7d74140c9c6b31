/// UI module - panels and the painter that draws component trees
pub mod activity_panel;
pub mod booking_modal;
pub mod calendar_panel;
pub mod layout;
pub mod painter;
pub mod widgets_panel;

pub use activity_panel::ActivityPanel;
pub use booking_modal::BookingModal;
pub use calendar_panel::CalendarPanel;
pub use layout::render_layout;
pub use widgets_panel::WidgetsPanel;
