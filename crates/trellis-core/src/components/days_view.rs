/// Month view of a calendar: navigation, weekday header and the 42 day options
use chrono::Datelike;
use std::collections::BTreeMap;

use crate::calendar::{CalendarAction, CalendarState, DayCell, DayGrid, Locale};
use crate::view::{Node, Tag, class_names_with_mods, data_attributes};

pub struct DaysViewProps<'a> {
    pub state: &'a CalendarState,
    pub locale: &'a Locale,
    pub mods: Vec<String>,
    pub data_attrs: BTreeMap<String, String>,
}

impl<'a> DaysViewProps<'a> {
    pub fn new(state: &'a CalendarState, locale: &'a Locale) -> Self {
        Self {
            state,
            locale,
            mods: Vec::new(),
            data_attrs: BTreeMap::new(),
        }
    }
}

pub fn render_days_view(props: &DaysViewProps) -> Node<CalendarAction> {
    Node::new(Tag::Div)
        .class(class_names_with_mods("ui-calendar-days", &props.mods))
        .attrs(data_attributes(&props.data_attrs))
        .child(render_nav(props))
        .child(render_week_days(props.locale))
        .child(render_days(props))
}

fn render_nav(props: &DaysViewProps) -> Node<CalendarAction> {
    let cursor = props.state.cursor();
    let label = format!("{} {}", props.locale.month(cursor.month()).short, cursor.year());

    let prev_disabled = !props.state.can_navigate_previous();
    let next_disabled = !props.state.can_navigate_next();

    Node::new(Tag::Nav)
        .child(
            Node::new(Tag::Button)
                .class("ui-calendar-days__nav-previous")
                .attr("type", "button")
                .disabled(prev_disabled)
                .on_click_opt((!prev_disabled).then_some(CalendarAction::NavigatePrevious))
                .text("<"),
        )
        .child(
            Node::new(Tag::Label)
                .class("ui-calendar-days__month")
                .text(label),
        )
        .child(
            Node::new(Tag::Button)
                .class("ui-calendar-days__nav-next")
                .attr("type", "button")
                .disabled(next_disabled)
                .on_click_opt((!next_disabled).then_some(CalendarAction::NavigateNext))
                .text(">"),
        )
}

fn render_week_days(locale: &Locale) -> Node<CalendarAction> {
    Node::new(Tag::Header).children(locale.ordered_week_days().into_iter().map(|day| {
        Node::new(Tag::Div)
            .class("ui-calendar-days__weekday")
            .text(day.short.clone())
    }))
}

fn render_day(cell: &DayCell) -> Node<CalendarAction> {
    Node::new(Tag::Button)
        .class(class_names_with_mods("ui-calendar-days-option", &cell.mods()))
        .attr("type", "button")
        .attr("data-date", cell.date.format("%Y-%m-%d").to_string())
        .disabled(!cell.enabled)
        .on_click_opt(cell.enabled.then_some(CalendarAction::SelectDay(cell.date)))
        .text(cell.date.day().to_string())
}

fn render_days(props: &DaysViewProps) -> Node<CalendarAction> {
    let grid = DayGrid::build(props.state, props.locale.start_week_day);
    Node::new(Tag::Div)
        .class("ui-calendar-days__options")
        .children(grid.cells.iter().map(render_day))
}
