/// Calendar options shared by every subcommand
use crate::models::SelectionMode;
use chrono::{Local, NaiveDate};
use trellis_core::calendar::dates::{parse_date, parse_month};
use trellis_core::calendar::{CalendarAction, CalendarProps, CalendarState, Locale};
use trellis_core::components::CalendarViewProps;
use trellis_core::{TrellisError, get_trellis_setting};

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CalendarArgs {
    /// Month shown when nothing is selected, as YYYY-MM. Defaults to the current month
    #[arg(long)]
    pub month: Option<String>,

    /// Initially selected date; pass twice for a range start and end
    #[arg(long = "select", value_name = "DATE")]
    pub initial_dates: Vec<String>,

    /// Earliest selectable date
    #[arg(long)]
    pub min: Option<String>,

    /// Latest selectable date
    #[arg(long)]
    pub max: Option<String>,

    /// Selection behaviour
    #[arg(long, value_enum)]
    pub mode: Option<SelectionMode>,

    /// First day of the week, 0 = Sunday .. 6 = Saturday
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..7))]
    pub start_weekday: Option<u32>,

    /// JSON locale file with month and weekday names
    #[arg(long)]
    pub locale: Option<String>,

    /// Click these days in order before showing the calendar
    #[arg(long = "click", value_name = "DATE")]
    pub clicks: Vec<String>,
}

impl CalendarArgs {
    fn today(&self) -> Result<NaiveDate, TrellisError> {
        match &self.month {
            Some(month) => parse_month(month),
            None => Ok(Local::now().date_naive()),
        }
    }

    pub fn props(&self, default_mode: SelectionMode) -> Result<CalendarProps, TrellisError> {
        Ok(CalendarProps {
            initial_dates: self.initial_dates.clone(),
            min_date: self.min.clone(),
            max_date: self.max.clone(),
            selection_type: self.mode.unwrap_or(default_mode).into(),
            ..CalendarProps::new(self.today()?)
        })
    }

    /// Locale from `--locale` or `TRELLIS_LOCALE_PATH`. `--start-weekday` wins over
    /// the file, and the `TRELLIS_START_WEEKDAY` setting applies to the built-in locale.
    pub fn locale(&self) -> Result<Locale, TrellisError> {
        let path = self
            .locale
            .clone()
            .unwrap_or_else(|| get_trellis_setting!(TRELLIS_LOCALE_PATH));
        let (locale, fallback_start) = if path.is_empty() {
            let start = get_trellis_setting!(TRELLIS_START_WEEKDAY, usize) as u32;
            (Locale::default(), Some(start))
        } else {
            (Locale::from_file(&path)?, None)
        };
        match self.start_weekday.or(fallback_start) {
            Some(start) => locale.with_start_week_day(start),
            None => Ok(locale),
        }
    }

    pub fn view(&self) -> Result<CalendarViewProps, TrellisError> {
        Ok(CalendarViewProps {
            locale: self.locale()?,
            ..Default::default()
        })
    }

    /// Build the calendar and replay `--click` days through the reducer
    pub fn state(&self, default_mode: SelectionMode) -> Result<CalendarState, TrellisError> {
        let mut state = CalendarState::new(&self.props(default_mode)?)?;
        for click in &self.clicks {
            let date = parse_date(click)?;
            let transition = state.reduce(&CalendarAction::SelectDay(date));
            match transition.event {
                Some(event) => log::info!("{:?}", event),
                None => log::warn!("{} is not selectable, click ignored", date),
            }
            state = transition.state;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use trellis_core::calendar::Selection;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_sets_cursor() {
        let args = CalendarArgs {
            month: Some("2024-02".to_string()),
            ..Default::default()
        };
        let state = args.state(SelectionMode::Normal).unwrap();
        assert_eq!(state.cursor(), ymd(2024, 2, 1));
    }

    #[test]
    fn test_bad_month() {
        let args = CalendarArgs {
            month: Some("February".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            args.props(SelectionMode::Normal),
            Err(TrellisError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_clicks_replay_through_reducer() {
        let args = CalendarArgs {
            month: Some("2024-02".to_string()),
            mode: Some(SelectionMode::Range),
            clicks: vec!["2024-02-10".to_string(), "2024-02-12".to_string()],
            ..Default::default()
        };
        let state = args.state(SelectionMode::Normal).unwrap();
        assert_eq!(
            state.selection(),
            Selection::range(ymd(2024, 2, 10), ymd(2024, 2, 12))
        );
    }

    #[test]
    fn test_start_weekday_overrides_locale_file() {
        let mut locale = Locale::default();
        locale.start_week_day = 0;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&locale).unwrap()).unwrap();

        let mut args = CalendarArgs {
            locale: Some(file.path().to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(args.locale().unwrap().start_week_day, 0);

        args.start_weekday = Some(3);
        assert_eq!(args.locale().unwrap().start_week_day, 3);
    }
}
