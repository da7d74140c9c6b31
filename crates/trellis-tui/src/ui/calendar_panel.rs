/// Calendar panel: the month view with keyboard focus and clickable days
use crate::stores::HitRegion;
use crate::stores::calendar_store::CalendarStoreState;
use crate::ui::painter::paint_calendar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};
use trellis_core::calendar::SelectionType;
use trellis_core::components::render_calendar;

pub struct CalendarPanel<'a> {
    state: &'a CalendarStoreState,
    is_focused: bool,
}

impl<'a> CalendarPanel<'a> {
    pub fn new(state: &'a CalendarStoreState, is_focused: bool) -> Self {
        Self { state, is_focused }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, hits: &mut Vec<HitRegion>) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::White
        };
        let title = match self.state.calendar.selection_type() {
            SelectionType::Range => " Check-in / Check-out ",
            SelectionType::Normal => " Date ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let node = render_calendar(&self.state.calendar, &self.state.view);
        let focused = self.is_focused.then_some(self.state.focused);
        paint_calendar(&node, inner, buf, focused, hits);
    }
}
