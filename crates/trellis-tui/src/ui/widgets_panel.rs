/// Booking widgets: destination list, room radio group, price and book button
use crate::actions::Action;
use crate::booking::{room_options, stay_nights, stay_total};
use crate::stores::HitRegion;
use crate::stores::ui_store::UIState;
use crate::ui::painter::{paint_button, paint_list, paint_price, paint_radio, paint_spinner};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};
use trellis_core::calendar::Selection;
use trellis_core::components::{
    ButtonProps, ListAlign, ListProps, PriceProps, RadioButtonProps, SpinnerProps, render_button,
    render_list, render_price, render_radio_button, render_spinner,
};
use trellis_core::view::Node;

const DESTINATIONS: [&str; 3] = ["Lisbon", "Porto", "Faro"];

pub struct WidgetsPanel<'a> {
    ui_state: &'a UIState,
    selection: Selection,
    is_focused: bool,
}

impl<'a> WidgetsPanel<'a> {
    pub fn new(ui_state: &'a UIState, selection: Selection, is_focused: bool) -> Self {
        Self {
            ui_state,
            selection,
            is_focused,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, hits: &mut Vec<HitRegion>) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::White
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Booking ")
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // destinations
                Constraint::Length(1),
                Constraint::Length(4), // rooms
                Constraint::Length(1),
                Constraint::Length(1), // price or spinner
                Constraint::Length(1),
                Constraint::Length(1), // book
                Constraint::Min(0),
            ])
            .split(inner);

        let destinations: Node<()> = render_list(&ListProps {
            items: DESTINATIONS.iter().map(|d| d.to_string()).collect(),
            align: ListAlign::Horizontal,
            ..Default::default()
        });
        paint_list(&destinations, rows[0], buf);

        let rooms = render_radio_button(&RadioButtonProps {
            name: "room".to_string(),
            options: room_options(),
            checked: Some(self.ui_state.room.clone()),
            ..Default::default()
        });
        paint_radio(&rooms, rows[2], buf, hits, Action::SelectRoom);

        match stay_total(&self.selection, &self.ui_state.room) {
            Some(amount) => {
                let nights = stay_nights(&self.selection).unwrap_or_default();
                let price: Node<()> = render_price(&PriceProps {
                    amount,
                    ..Default::default()
                });
                let label = format!("{nights} night(s): ");
                buf.set_string(rows[4].x, rows[4].y, &label, Style::default());
                let offset = (label.chars().count() as u16).min(rows[4].width);
                let price_area = Rect {
                    x: rows[4].x + offset,
                    width: rows[4].width - offset,
                    ..rows[4]
                };
                paint_price(&price, price_area, buf);
            }
            None => {
                let spinner: Node<()> = render_spinner(&SpinnerProps {
                    label: Some(waiting_label(&self.selection).to_string()),
                    ..Default::default()
                });
                paint_spinner(&spinner, self.ui_state.tick, rows[4], buf);
            }
        }

        let book = render_button(
            &ButtonProps::new("Book")
                .mods(&["primary"])
                .disabled(stay_nights(&self.selection).is_none())
                .on_click(Action::Book),
        );
        paint_button(&book, rows[6], buf, hits, |action| action);
    }
}

fn waiting_label(selection: &Selection) -> &'static str {
    if selection.start.is_some() {
        "Pick a check-out date"
    } else {
        "Pick a check-in date"
    }
}
