/// Store modules that hold application state
/// Each store is responsible for a slice of the application state
pub mod app_logs_store;
pub mod calendar_store;
pub mod modal_store;
pub mod ui_store;

pub use app_logs_store::AppLogsStore;
pub use calendar_store::CalendarStore;
pub use modal_store::ModalStore;
pub use ui_store::{HitRegion, UIStore};
