/// Plain text rendering of a calendar month
use super::calendar_args::CalendarArgs;
use crate::models::SelectionMode;
use trellis_core::TrellisError;
use trellis_core::calendar::CalendarAction;
use trellis_core::components::render_calendar;
use trellis_core::view::Node;

const LEGEND: &str = "[d] selected  [d> start  <d] end  -d- between  (d) disabled  d' other month";

/// Print a month grid for the given calendar options
#[derive(clap::Args, Debug, Clone)]
pub struct GridArgs {
    #[command(flatten)]
    pub calendar: CalendarArgs,

    /// Leave out the legend line
    #[arg(long, default_value_t = false)]
    pub no_legend: bool,
}

fn day_cell(option: &Node<CalendarAction>) -> String {
    let has = |m: &str| option.has_class(&format!("ui-calendar-days-option--{m}"));
    let (left, right) = if has("selected") {
        ('[', ']')
    } else if has("selected-start") {
        ('[', '>')
    } else if has("selected-end") {
        ('<', ']')
    } else if has("selected-between") {
        ('-', '-')
    } else if option.disabled {
        ('(', ')')
    } else if has("previous-month") || has("next-month") {
        (' ', '\'')
    } else {
        (' ', ' ')
    };
    format!("{left}{:>2}{right}", option.text_content())
}

/// Text form of a rendered calendar: month label, weekday header and six weeks
pub fn grid_text(node: &Node<CalendarAction>) -> String {
    let mut lines = Vec::new();

    let label = node
        .find_by_class("ui-calendar-days__month")
        .first()
        .map(|n| n.text_content())
        .unwrap_or_default();
    lines.push(format!("{label:^28}").trim_end().to_string());

    let header: Vec<String> = node
        .find_by_class("ui-calendar-days__weekday")
        .iter()
        .map(|n| format!("{:>3} ", n.text_content().chars().take(3).collect::<String>()))
        .collect();
    lines.push(header.concat().trim_end().to_string());

    let days: Vec<String> = node
        .walk()
        .into_iter()
        .filter(|n| n.has_class("ui-calendar-days-option"))
        .map(day_cell)
        .collect();
    for week in days.chunks(7) {
        lines.push(week.concat().trim_end().to_string());
    }
    lines.join("\n")
}

pub fn handle_grid(args: GridArgs) -> Result<(), TrellisError> {
    let state = args.calendar.state(SelectionMode::Normal)?;
    let view = args.calendar.view()?;
    println!("{}", grid_text(&render_calendar(&state, &view)));
    if !args.no_legend {
        println!("\n{LEGEND}");
    }
    Ok(())
}
