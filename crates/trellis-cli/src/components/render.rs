/// JSON dump of the rendered component tree
use super::calendar_args::CalendarArgs;
use crate::models::SelectionMode;
use trellis_core::TrellisError;
use trellis_core::components::render_calendar;

/// Print the calendar node tree as JSON
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub calendar: CalendarArgs,

    /// Pretty print the output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

pub fn render_json(args: &RenderArgs) -> Result<String, TrellisError> {
    let state = args.calendar.state(SelectionMode::Normal)?;
    let node = render_calendar(&state, &args.calendar.view()?);
    let json = if args.pretty {
        serde_json::to_string_pretty(&node)?
    } else {
        serde_json::to_string(&node)?
    };
    Ok(json)
}

pub fn handle_render(args: RenderArgs) -> Result<(), TrellisError> {
    println!("{}", render_json(&args)?);
    Ok(())
}
