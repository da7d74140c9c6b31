/// Interactive terminal demo
use super::calendar_args::CalendarArgs;
use crate::models::SelectionMode;
use log::LevelFilter;
use trellis_tui::TuiOptions;

/// Launch the booking demo in the terminal
#[derive(clap::Args, Debug, Clone)]
pub struct TuiArgs {
    #[command(flatten)]
    pub calendar: CalendarArgs,

    /// Lowest level shown in the activity panel
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl TuiArgs {
    pub fn options(&self) -> Result<TuiOptions, trellis_core::TrellisError> {
        Ok(TuiOptions {
            calendar: self.calendar.props(SelectionMode::Range)?,
            view: self.calendar.view()?,
            log_level: self.log_level,
        })
    }
}

pub async fn handle_tui(args: TuiArgs) -> Result<(), String> {
    let options = args.options().map_err(|e| e.to_string())?;
    trellis_tui::tui_main(options)
        .await
        .map_err(|e| format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::calendar::SelectionType;

    #[test]
    fn test_tui_defaults_to_range_selection() {
        let args = TuiArgs {
            calendar: CalendarArgs {
                month: Some("2024-02".to_string()),
                ..Default::default()
            },
            log_level: LevelFilter::Debug,
        };
        let options = args.options().unwrap();
        assert_eq!(options.calendar.selection_type, SelectionType::Range);
        assert_eq!(options.log_level, LevelFilter::Debug);
    }
}
