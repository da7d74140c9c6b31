mod exceptions;
mod macros;

// public api
pub mod calendar;
pub mod components;
pub mod config;
pub mod view;

pub use exceptions::TrellisError;
