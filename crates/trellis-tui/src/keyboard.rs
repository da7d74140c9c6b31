/// Keyboard input handling and key mapping
use crate::actions::{Action, PanelId};
use crate::booking::cycle_room;
use crate::stores::{ModalStore, UIStore};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::crossterm;
use trellis_core::calendar::CalendarAction;
use trellis_core::components::{ESCAPE_KEY_CODE, ModalAction};

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    modal_store: &ModalStore,
) -> Option<Action> {
    // an open modal takes every key
    if modal_store.is_open() {
        return Some(Action::Modal(ModalAction::Keydown(dom_key_code(
            key_event.code,
        ))));
    }

    let ui_state = ui_store.get_state();
    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Tab => Some(Action::FocusPanel(ui_state.focused_panel.next())),

        _ if ui_state.show_help => None,

        _ => match ui_state.focused_panel {
            PanelId::Calendar => handle_calendar_keys(key_event),
            PanelId::Widgets => handle_widget_keys(key_event, &ui_state.room),
        },
    }
}

fn handle_calendar_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCalendarFocus(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCalendarFocus(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCalendarFocus(-7)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCalendarFocus(7)),
        KeyCode::PageUp | KeyCode::Char('p') => {
            Some(Action::Calendar(CalendarAction::NavigatePrevious))
        }
        KeyCode::PageDown | KeyCode::Char('n') => {
            Some(Action::Calendar(CalendarAction::NavigateNext))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectFocusedDay),
        _ => None,
    }
}

fn handle_widget_keys(key_event: KeyEvent, room: &str) -> Option<Action> {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectRoom(cycle_room(room, -1).into())),
        KeyCode::Down | KeyCode::Char('j') => {
            Some(Action::SelectRoom(cycle_room(room, 1).into()))
        }
        KeyCode::Enter | KeyCode::Char('b') => Some(Action::Book),
        _ => None,
    }
}

/// Left clicks resolve to whatever was drawn under the cursor
pub fn handle_mouse_event(mouse_event: MouseEvent, ui_store: &UIStore) -> Option<Action> {
    ui_store.hit_test(mouse_event.column, mouse_event.row)
}

/// Browser key code for a terminal key, 0 when there is no equivalent
fn dom_key_code(code: KeyCode) -> u32 {
    match code {
        KeyCode::Esc => ESCAPE_KEY_CODE,
        KeyCode::Enter => 13,
        KeyCode::Tab => 9,
        KeyCode::Backspace => 8,
        KeyCode::Left => 37,
        KeyCode::Up => 38,
        KeyCode::Right => 39,
        KeyCode::Down => 40,
        KeyCode::Char(c) if c.is_ascii() => c.to_ascii_uppercase() as u32,
        _ => 0,
    }
}
