/// End to end checks of the calendar: props -> state -> rendered tree -> click -> reducer.
use std::io::Write;

use chrono::{Datelike, NaiveDate, Weekday};
use trellis_core::TrellisError;
use trellis_core::calendar::{
    CalendarAction, CalendarEvent, CalendarProps, CalendarState, DayGrid, Locale, Selection,
    SelectionType,
};
use trellis_core::components::{CalendarViewProps, render_calendar};
use trellis_core::view::Node;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn click(node: &Node<CalendarAction>, date: &str) -> Option<CalendarAction> {
    node.walk()
        .into_iter()
        .find(|n| n.attr_value("data-date") == Some(date))
        .and_then(|n| n.on_click)
}

#[test]
fn test_range_booking_flow() {
    let _ = env_logger::builder().is_test(true).try_init();

    let props = CalendarProps {
        min_date: Some("2024-01-20".to_string()),
        max_date: Some("2024-03-31".to_string()),
        selection_type: SelectionType::Range,
        ..CalendarProps::new(ymd(2024, 1, 25))
    };
    let view = CalendarViewProps::default();
    let mut state = CalendarState::new(&props).unwrap();
    let mut events = Vec::new();

    // previous month is out of bounds
    assert!(state.reduce(&CalendarAction::NavigatePrevious).event.is_none());

    // pick the start in January, then the end from the leading days of the March view
    let start = click(&render_calendar(&state, &view), "2024-01-30").unwrap();
    let t = state.reduce(&start);
    state = t.state;
    events.extend(t.event);

    for _ in 0..2 {
        let t = state.reduce(&CalendarAction::NavigateNext);
        state = t.state;
        events.extend(t.event);
    }
    assert_eq!(state.cursor(), ymd(2024, 3, 1));

    let end = click(&render_calendar(&state, &view), "2024-02-27").unwrap();
    let t = state.reduce(&end);
    state = t.state;
    events.extend(t.event);

    // the selected date lives in February, so the cursor follows it
    assert_eq!(state.cursor(), ymd(2024, 2, 1));
    assert_eq!(
        events,
        vec![
            CalendarEvent::DaySelected(Selection::single(ymd(2024, 1, 30))),
            CalendarEvent::NavigatedNext(ymd(2024, 2, 1)),
            CalendarEvent::NavigatedNext(ymd(2024, 3, 1)),
            CalendarEvent::DaySelected(Selection::range(ymd(2024, 1, 30), ymd(2024, 2, 27))),
        ]
    );

    // every February day up to the 26th is between start and end
    let node = render_calendar(&state, &view);
    let between = node.find_by_class("ui-calendar-days-option--selected-between");
    assert_eq!(between.len(), 1 + 26);
}

#[test]
fn test_days_before_range_start_are_disabled() {
    let props = CalendarProps {
        selection_type: SelectionType::Range,
        ..CalendarProps::new(ymd(2024, 2, 1))
    };
    let state = CalendarState::new(&props).unwrap();
    let state = state
        .reduce(&CalendarAction::SelectDay(ymd(2024, 2, 14)))
        .state;
    let node = render_calendar(&state, &CalendarViewProps::default());
    assert!(click(&node, "2024-02-13").is_none());
    assert!(click(&node, "2024-02-14").is_some());
    // navigating back into the start month is blocked as well
    assert!(!state.can_navigate_previous());
}

#[test]
fn test_every_month_has_42_cells_for_every_locale_start() {
    let mut cursor = ymd(2023, 1, 1);
    while cursor.year() < 2026 {
        for start in 0..7 {
            let props = CalendarProps::new(cursor);
            let state = CalendarState::new(&props).unwrap();
            let grid = DayGrid::build(&state, start);
            assert_eq!(grid.cells.len(), 42);
            assert!(grid.cells.windows(2).all(|w| w[0].date.succ_opt() == Some(w[1].date)));
        }
        cursor = cursor.checked_add_months(chrono::Months::new(1)).unwrap();
    }
}

#[test]
fn test_locale_file_drives_header_and_grid() {
    let mut locale = Locale::default();
    locale.start_week_day = 0;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&locale).unwrap()).unwrap();

    let locale = Locale::from_file(file.path()).unwrap();
    let state = CalendarState::new(&CalendarProps::new(ymd(2024, 2, 1))).unwrap();
    let view = CalendarViewProps {
        locale,
        ..Default::default()
    };
    let node = render_calendar(&state, &view);
    let first_header = node.find_by_class("ui-calendar-days__weekday")[0].text_content();
    assert_eq!(first_header, "Sun");

    let grid = DayGrid::build(&state, 0);
    assert_eq!(grid.first().unwrap().date.weekday(), Weekday::Sun);
    assert_eq!(grid.first().unwrap().date, ymd(2024, 1, 28));
}

#[test]
fn test_missing_locale_file() {
    assert!(matches!(
        Locale::from_file("/definitely/not/here.json"),
        Err(TrellisError::InvalidLocale(_))
    ));
}
