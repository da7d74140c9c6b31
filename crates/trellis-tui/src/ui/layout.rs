/// Layout manager for the TUI application
use crate::stores::{AppLogsStore, CalendarStore, HitRegion, ModalStore, UIStore};
use crate::actions::PanelId;
use crate::ui::{ActivityPanel, BookingModal, CalendarPanel, WidgetsPanel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use trellis_core::calendar::CalendarEvent;

/// Render the complete application layout and record the clickable regions
pub fn render_layout(
    frame: &mut Frame,
    calendar_store: &CalendarStore,
    modal_store: &ModalStore,
    ui_store: &UIStore,
    app_logs_store: &AppLogsStore,
) {
    let area = frame.area();
    let ui_state = ui_store.get_state();
    let calendar_state = calendar_store.get_state();
    let selection = calendar_state.calendar.selection();
    let mut hits: Vec<HitRegion> = Vec::new();

    // Main layout: Header | Body | Activity | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(13), // Calendar + widgets
            Constraint::Min(3),     // Activity
            Constraint::Length(3),  // Footer
        ])
        .split(area);

    render_header(frame, vertical_chunks[0], ui_state.last_event);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(vertical_chunks[1]);

    CalendarPanel::new(
        &calendar_state,
        ui_state.focused_panel == PanelId::Calendar,
    )
    .render(body[0], frame.buffer_mut(), &mut hits);

    WidgetsPanel::new(
        &ui_state,
        selection,
        ui_state.focused_panel == PanelId::Widgets,
    )
    .render(body[1], frame.buffer_mut(), &mut hits);

    ActivityPanel::from_state(&app_logs_store.get_state())
        .render(vertical_chunks[2], frame.buffer_mut());

    render_footer(frame, vertical_chunks[3], ui_state.focused_panel);

    // overlays swallow clicks aimed at what they cover
    let modal_state = modal_store.get_state();
    if modal_state.is_open {
        hits.clear();
        BookingModal::new(modal_state, selection, &ui_state.room).render(
            area,
            frame.buffer_mut(),
            &mut hits,
        );
    } else if ui_state.show_help {
        hits.clear();
        render_help(frame, area);
    }

    ui_store.set_hit_regions(hits);
}

fn render_header(frame: &mut Frame, area: Rect, last_event: Option<CalendarEvent>) {
    let status = match last_event {
        Some(CalendarEvent::DaySelected(selection)) if selection.is_empty() => {
            "Selection cleared".to_string()
        }
        Some(CalendarEvent::DaySelected(selection)) => {
            let dates: Vec<String> = selection
                .dates()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect();
            format!("Selected {}", dates.join(" → "))
        }
        Some(CalendarEvent::NavigatedPrevious(cursor))
        | Some(CalendarEvent::NavigatedNext(cursor)) => {
            format!("Showing {}", cursor.format("%B %Y"))
        }
        None => "Pick your dates".to_string(),
    };

    let header_text = Line::from(vec![
        Span::styled(
            " TRELLIS ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(status, Style::default().fg(Color::Green)),
    ]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_footer(frame: &mut Frame, area: Rect, focused_panel: PanelId) {
    let help_text = match focused_panel {
        PanelId::Calendar => {
            "q:Quit | Tab:Panel | ←↑↓→:Move | Enter:Select | PgUp/PgDn:Month | ?:Help"
        }
        PanelId::Widgets => "q:Quit | Tab:Panel | ↑↓:Room | Enter:Book | ?:Help",
    };

    Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(help_text)]))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    let lines = vec![
        Line::from(Span::styled(
            "Calendar",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  arrows / hjkl   move the focused day"),
        Line::from("  Enter / Space   select the focused day"),
        Line::from("  PgUp / PgDn     previous / next month"),
        Line::from("  click           select a day or page the month"),
        Line::from(""),
        Line::from(Span::styled(
            "Booking",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  ↑ / ↓           change room"),
        Line::from("  Enter           open the booking summary"),
        Line::from("  Esc             close the summary"),
        Line::from(""),
        Line::from("  Tab switches panel, ? hides this help, q quits"),
    ];
    Clear.render(popup, frame.buffer_mut());
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(popup, frame.buffer_mut());
}

/// Rectangle of the given percentages centred inside `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(25, 10, 50, 20));
    }
}
