use std::collections::BTreeMap;

use crate::calendar::{CalendarAction, CalendarState, Locale};
use crate::components::days_panel::{DaysPanelProps, render_days_panel};
use crate::view::{Node, Tag, class_names_with_mods, data_attributes};

/// Presentation options for a calendar; selection behaviour lives in `CalendarState`
#[derive(Debug, Clone, Default)]
pub struct CalendarViewProps {
    pub locale: Locale,
    pub mods: Vec<String>,
    pub data_attrs: BTreeMap<String, String>,
}

pub fn render_calendar(state: &CalendarState, props: &CalendarViewProps) -> Node<CalendarAction> {
    Node::new(Tag::Div)
        .class(class_names_with_mods("ui-calendar", &props.mods))
        .attrs(data_attributes(&props.data_attrs))
        .child(render_days_panel(&DaysPanelProps {
            state,
            locale: &props.locale,
            hide: false,
        }))
}
