/// Booking summary shown in a modal over the main layout
use crate::actions::Action;
use crate::booking::{find_room, stay_total};
use crate::stores::HitRegion;
use crate::ui::layout::centered_rect;
use crate::ui::painter::paint_list;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use trellis_core::calendar::Selection;
use trellis_core::components::{
    Currency, ListProps, ModalAction, ModalState, format_price, render_list, render_modal,
};
use trellis_core::view::Node;

pub struct BookingModal<'a> {
    state: ModalState,
    selection: Selection,
    room: &'a str,
}

impl<'a> BookingModal<'a> {
    pub fn new(state: ModalState, selection: Selection, room: &'a str) -> Self {
        Self {
            state,
            selection,
            room,
        }
    }

    fn summary(&self) -> Vec<String> {
        let fmt = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format("%a %d %b %Y").to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        let room = find_room(self.room).map_or(self.room, |r| r.label);
        let total = stay_total(&self.selection, self.room)
            .map(|amount| format_price(amount, &Currency::default()))
            .unwrap_or_else(|| "-".to_string());
        vec![
            format!("Room:      {room}"),
            format!("Check-in:  {}", fmt(self.selection.start)),
            format!("Check-out: {}", fmt(self.selection.end)),
            format!("Total:     {total}"),
            String::new(),
            "Esc to close".to_string(),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, hits: &mut Vec<HitRegion>) {
        if !self.state.is_open {
            return;
        }
        let content: Node<Action> = render_list(&ListProps {
            items: self.summary(),
            hide_bullets: true,
            ..Default::default()
        });
        let node = render_modal(
            &self.state,
            "Booking summary",
            content,
            Some(Action::Modal(ModalAction::RequestClose)),
        );

        let popup = centered_rect(50, 40, area);
        Clear.render(popup, buf);

        // the border fades while the close transition runs
        let border = if self.state.is_closing {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let title = node
            .find_by_class("ui-modal__title")
            .first()
            .map(|n| n.text_content())
            .unwrap_or_default();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(border);
        let inner = block.inner(popup);
        block.render(popup, buf);

        // close button sits on the top border
        if let Some(close) = node.find_by_class("ui-modal__close").first() {
            let x = popup.right().saturating_sub(4);
            buf.set_string(
                x,
                popup.y,
                format!("[{}]", close.text_content()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
            if let Some(action) = close.on_click.clone() {
                hits.push(HitRegion {
                    area: Rect::new(x, popup.y, 3, 1),
                    action,
                });
            }
        }

        if let Some(list) = node.find_by_class("ui-list").first() {
            let body = Rect {
                x: inner.x + 1,
                width: inner.width.saturating_sub(2),
                ..inner
            };
            paint_list(list, body, buf);
        }
    }
}
