/// Activity panel showing the captured application logs, newest at the bottom
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ActivityPanel {
    pub logs: Vec<String>,
}

impl ActivityPanel {
    pub fn from_state(app_logs_state: &AppLogsState) -> Self {
        Self {
            logs: app_logs_state.logs.clone(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Activity ")
            .border_style(Style::default().fg(Color::Cyan));

        if self.logs.is_empty() {
            Paragraph::new("No activity yet...")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let start = self.logs.len().saturating_sub(inner_height);
        let visible: Vec<Line> = self.logs[start..]
            .iter()
            .map(|log| Line::from(log.clone()))
            .collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}
