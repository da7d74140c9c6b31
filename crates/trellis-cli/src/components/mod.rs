pub mod calendar_args;
pub mod grid;
pub mod render;
pub mod tui;
