/// This config file lists out all the default values for the main TRELLIS env configs
/// All can be overridden by an ENV var of the same name. Some can also be overridden
/// from the command line. These should only be primitive types
///

/// default first day of the week (0 = Sunday, 1 = Monday, ...)
pub static TRELLIS_START_WEEKDAY: usize = 1;

/// delay between a modal close request and the modal actually closing
pub static TRELLIS_MODAL_CLOSE_DELAY_MS: usize = 300;

/// how often the terminal host polls for input and redraws
pub static TRELLIS_TUI_TICK_MS: usize = 16;

/// how often the spinner advances a frame in the terminal host
pub static TRELLIS_SPINNER_FRAME_MS: usize = 120;

/// optional path to a JSON locale file. Empty means the built-in English locale
pub static TRELLIS_LOCALE_PATH: &'static str = "";
