/// Terminal host for the trellis calendar components, built on a flux
/// architecture: actions go through a dispatcher into stores, and effects
/// run timers and report back with new actions.
mod actions;
mod app;
mod booking;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod stores;
mod tui;
mod ui;

pub use app::{App, TuiOptions};

/// Main entry point for the TUI application
pub async fn tui_main(options: TuiOptions) -> color_eyre::Result<()> {
    // install before the terminal switches modes so reports print cleanly
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    // build the app first so configuration errors show on a normal terminal
    let (mut app, action_receiver) = App::new(options)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal, action_receiver).await;
    let _ = tui::restore();

    result?;
    Ok(())
}
