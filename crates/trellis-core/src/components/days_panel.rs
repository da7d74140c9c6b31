use crate::calendar::{CalendarAction, CalendarState, Locale};
use crate::components::days_view::{DaysViewProps, render_days_view};
use crate::view::{Node, Tag, class_names_with_mods};

pub struct DaysPanelProps<'a> {
    pub state: &'a CalendarState,
    pub locale: &'a Locale,
    pub hide: bool,
}

/// Visibility wrapper around the days view
pub fn render_days_panel(props: &DaysPanelProps) -> Node<CalendarAction> {
    let mods: &[&str] = if props.hide { &["hidden"] } else { &[] };
    Node::new(Tag::Div)
        .class(class_names_with_mods("ui-calendar-days-panel", mods))
        .child(render_days_view(&DaysViewProps::new(props.state, props.locale)))
}
