/// Draws component node trees into a ratatui buffer and records the clickable
/// regions so mouse clicks can be turned back into actions.
use crate::actions::Action;
use crate::stores::HitRegion;
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use trellis_core::calendar::CalendarAction;
use trellis_core::components::spinner_frame;
use trellis_core::view::Node;
use unicode_width::UnicodeWidthStr;

/// Width of one day column: two digits plus padding
const DAY_WIDTH: u16 = 4;
pub const CALENDAR_WIDTH: u16 = DAY_WIDTH * 7;
/// nav + blank + weekday header + six weeks
pub const CALENDAR_HEIGHT: u16 = 9;

fn day_style(option: &Node<CalendarAction>, focused: bool) -> Style {
    let base = "ui-calendar-days-option";
    let has = |m: &str| option.has_class(&format!("{base}--{m}"));

    let mut style = if has("selected") || has("selected-start") || has("selected-end") {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if has("selected-between") {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else if has("previous-month") || has("next-month") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    if option.disabled {
        style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
    }
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn push_hit(hits: &mut Vec<HitRegion>, area: Rect, action: Option<Action>) {
    if let Some(action) = action {
        hits.push(HitRegion { area, action });
    }
}

/// Paint the tree produced by `render_calendar`
pub fn paint_calendar(
    node: &Node<CalendarAction>,
    area: Rect,
    buf: &mut Buffer,
    focused: Option<NaiveDate>,
    hits: &mut Vec<HitRegion>,
) {
    if area.width < CALENDAR_WIDTH || area.height < CALENDAR_HEIGHT {
        buf.set_string(
            area.x,
            area.y,
            "Terminal too small",
            Style::default().fg(Color::Red),
        );
        return;
    }
    let x = area.x + (area.width - CALENDAR_WIDTH) / 2;
    let y = area.y;

    // navigation row
    let nav_style = |n: &Node<CalendarAction>| {
        if n.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
    };
    if let Some(prev) = node.find_by_class("ui-calendar-days__nav-previous").first() {
        buf.set_string(x, y, " < ", nav_style(prev));
        push_hit(hits, Rect::new(x, y, 3, 1), prev.on_click.map(Action::Calendar));
    }
    if let Some(label) = node.find_by_class("ui-calendar-days__month").first() {
        let text = label.text_content();
        let width = text.width() as u16;
        buf.set_string(
            x + CALENDAR_WIDTH.saturating_sub(width) / 2,
            y,
            &text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
    }
    if let Some(next) = node.find_by_class("ui-calendar-days__nav-next").first() {
        let nx = x + CALENDAR_WIDTH - 3;
        buf.set_string(nx, y, " > ", nav_style(next));
        push_hit(hits, Rect::new(nx, y, 3, 1), next.on_click.map(Action::Calendar));
    }

    // weekday header
    for (i, weekday) in node
        .find_by_class("ui-calendar-days__weekday")
        .iter()
        .take(7)
        .enumerate()
    {
        let short: String = weekday.text_content().chars().take(3).collect();
        buf.set_string(
            x + i as u16 * DAY_WIDTH,
            y + 2,
            format!("{short:>3}"),
            Style::default().fg(Color::Yellow),
        );
    }

    // day options
    let options: Vec<&Node<CalendarAction>> = node
        .walk()
        .into_iter()
        .filter(|n| n.has_class("ui-calendar-days-option"))
        .collect();
    for (i, option) in options.iter().enumerate() {
        let col = (i % 7) as u16;
        let row = (i / 7) as u16;
        let is_focused = focused.is_some_and(|f| {
            option.attr_value("data-date") == Some(f.format("%Y-%m-%d").to_string().as_str())
        });
        let cell = Rect::new(x + col * DAY_WIDTH, y + 3 + row, 3, 1);
        buf.set_string(
            cell.x,
            cell.y,
            format!("{:>3}", option.text_content()),
            day_style(option, is_focused),
        );
        push_hit(hits, cell, option.on_click.map(Action::Calendar));
    }
}

/// Paint a `ui-list` tree, one item per line or all on one line when horizontal
pub fn paint_list<M>(node: &Node<M>, area: Rect, buf: &mut Buffer) {
    let bullets = !node.has_class("ui-list--hide-bullets");
    let items: Vec<String> = node
        .children
        .iter()
        .map(|li| {
            if bullets {
                format!("• {}", li.text_content())
            } else {
                li.text_content()
            }
        })
        .collect();

    if node.has_class("ui-list--horizontal") {
        buf.set_stringn(
            area.x,
            area.y,
            items.join("  "),
            area.width as usize,
            Style::default(),
        );
        return;
    }
    for (i, item) in items.iter().take(area.height as usize).enumerate() {
        buf.set_stringn(
            area.x,
            area.y + i as u16,
            item,
            area.width as usize,
            Style::default(),
        );
    }
}

/// Paint a `ui-radio-button` group, one option per line
pub fn paint_radio(
    node: &Node<String>,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut Vec<HitRegion>,
    to_action: impl Fn(String) -> Action,
) {
    for (i, option) in node.children.iter().take(area.height as usize).enumerate() {
        let checked = option.has_class("ui-radio-button__option--checked");
        let marker = if checked { "(•)" } else { "( )" };
        let style = if option.disabled {
            Style::default().fg(Color::DarkGray)
        } else if checked {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let line = format!("{marker} {}", option.text_content());
        let y = area.y + i as u16;
        buf.set_stringn(area.x, y, &line, area.width as usize, style);
        let width = (line.width() as u16).min(area.width);
        push_hit(
            hits,
            Rect::new(area.x, y, width, 1),
            option.on_click.clone().map(&to_action),
        );
    }
}

/// Paint a `ui-button` as `[ label ]`
pub fn paint_button<M: Clone>(
    node: &Node<M>,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut Vec<HitRegion>,
    to_action: impl Fn(M) -> Action,
) {
    let text = format!("[ {} ]", node.text_content());
    let style = if node.disabled {
        Style::default().fg(Color::DarkGray)
    } else if node.has_class("ui-button--primary") {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    buf.set_stringn(area.x, area.y, &text, area.width as usize, style);
    let width = (text.width() as u16).min(area.width);
    push_hit(
        hits,
        Rect::new(area.x, area.y, width, 1),
        node.on_click.clone().map(to_action),
    );
}

/// Paint a `ui-price` as its text, red when negative
pub fn paint_price<M>(node: &Node<M>, area: Rect, buf: &mut Buffer) {
    let style = if node.has_class("ui-price--negative") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    buf.set_stringn(
        area.x,
        area.y,
        node.text_content(),
        area.width as usize,
        style,
    );
}

/// Paint a `ui-spinner` with the frame for `tick`
pub fn paint_spinner<M>(node: &Node<M>, tick: usize, area: Rect, buf: &mut Buffer) {
    let text = format!("{} {}", spinner_frame(tick), node.text_content());
    buf.set_stringn(
        area.x,
        area.y,
        text,
        area.width as usize,
        Style::default().fg(Color::Magenta),
    );
}
