/// UIStore manages UI-specific state (focused panels, help visibility, widgets, etc.)
use crate::actions::{Action, PanelId};
use ratatui::layout::{Position, Rect};
use std::sync::{Arc, RwLock};
use trellis_core::calendar::CalendarEvent;

/// A clickable area recorded while drawing
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub area: Rect,
    pub action: Action,
}

/// Internal state for UI
#[derive(Debug, Clone)]
pub struct UIState {
    /// Currently focused panel
    pub focused_panel: PanelId,

    /// Whether help overlay is visible
    pub show_help: bool,

    /// Room type checked in the radio group
    pub room: String,

    /// Spinner animation counter
    pub tick: usize,

    /// Last calendar event, shown in the header
    pub last_event: Option<CalendarEvent>,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            focused_panel: PanelId::Calendar,
            show_help: false,
            room: "double".to_string(),
            tick: 0,
            last_event: None,
            should_exit: false,
        }
    }
}

/// Store that holds UI-related state
#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
    hits: Arc<RwLock<Vec<HitRegion>>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
            hits: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::FocusPanel(panel_id) => {
                state.focused_panel = *panel_id;
            }

            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::SelectRoom(room) => {
                state.room = room.clone();
            }

            Action::CalendarChanged(event) => {
                state.last_event = Some(*event);
            }

            Action::Tick => {
                state.tick = state.tick.wrapping_add(1);
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state.read().unwrap().should_exit
    }

    /// Replace the clickable regions recorded during the last draw
    pub fn set_hit_regions(&self, regions: Vec<HitRegion>) {
        *self.hits.write().unwrap() = regions;
    }

    /// Action bound to the topmost region under the given cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        self.hits
            .read()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.area.contains(Position::new(column, row)))
            .map(|r| r.action.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = UIStore::new();
        let state = store.get_state();
        assert_eq!(state.focused_panel, PanelId::Calendar);
        assert_eq!(state.show_help, false);
        assert_eq!(state.should_exit, false);
    }

    #[test]
    fn test_focus_panel() {
        let store = UIStore::new();
        store.reduce(&Action::FocusPanel(PanelId::Widgets));
        assert_eq!(store.get_state().focused_panel, PanelId::Widgets);
    }

    #[test]
    fn test_toggle_help() {
        let store = UIStore::new();

        store.reduce(&Action::ToggleHelp);
        assert_eq!(store.get_state().show_help, true);

        store.reduce(&Action::ToggleHelp);
        assert_eq!(store.get_state().show_help, false);
    }

    #[test]
    fn test_select_room() {
        let store = UIStore::new();
        store.reduce(&Action::SelectRoom("suite".to_string()));
        assert_eq!(store.get_state().room, "suite");
    }

    #[test]
    fn test_hit_test_prefers_last_drawn() {
        let store = UIStore::new();
        store.set_hit_regions(vec![
            HitRegion {
                area: Rect::new(0, 0, 10, 10),
                action: Action::ToggleHelp,
            },
            HitRegion {
                area: Rect::new(2, 2, 3, 1),
                action: Action::Book,
            },
        ]);
        assert_eq!(store.hit_test(3, 2), Some(Action::Book));
        assert_eq!(store.hit_test(0, 0), Some(Action::ToggleHelp));
        assert_eq!(store.hit_test(20, 20), None);
    }

    #[test]
    fn test_quit() {
        let store = UIStore::new();
        store.reduce(&Action::Quit);

        assert_eq!(store.should_exit(), true);
    }
}
