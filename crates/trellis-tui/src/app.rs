/// Main application struct and event loop
use crate::actions::Action;
use crate::booking::stay_nights;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard;
use crate::stores::{AppLogsStore, CalendarStore, ModalStore, UIStore};
use crate::ui::render_layout;
use log::LevelFilter;
use ratatui::crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use std::time::Duration;
use trellis_core::calendar::{CalendarProps, CalendarState};
use trellis_core::components::CalendarViewProps;
use trellis_core::get_trellis_setting;

/// Options the host passes when starting the demo
#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub calendar: CalendarProps,
    pub view: CalendarViewProps,
    pub log_level: LevelFilter,
}

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for the calendar controller
    calendar_store: CalendarStore,

    /// Store for the booking summary modal
    modal_store: ModalStore,

    /// Store for UI state
    ui_store: UIStore,

    /// Store for application logs
    app_logs_store: AppLogsStore,

    /// Effects handler for side effects
    effects: Effects,
}

impl App {
    pub fn new(options: TuiOptions) -> color_eyre::Result<(Self, ActionReceiver)> {
        let calendar = CalendarState::new(&options.calendar)?;
        let log_buffer = crate::logger::init_memory_logger(options.log_level)?;
        let close_delay = get_trellis_setting!(TRELLIS_MODAL_CLOSE_DELAY_MS, usize) as u64;

        let (dispatcher, action_receiver) = Dispatcher::new();
        let effects = Effects::new(dispatcher.clone());
        effects.spawn_background_tasks();

        Ok((
            Self {
                dispatcher,
                calendar_store: CalendarStore::new(calendar, options.view),
                modal_store: ModalStore::new(Duration::from_millis(close_delay)),
                ui_store: UIStore::new(),
                app_logs_store: AppLogsStore::new(log_buffer),
                effects,
            },
            action_receiver,
        ))
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> std::io::Result<()> {
        log::info!("Trellis TUI started");
        let tick_ms = get_trellis_setting!(TRELLIS_TUI_TICK_MS, usize) as u64;

        loop {
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.calendar_store,
                    &self.modal_store,
                    &self.ui_store,
                    &self.app_logs_store,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                // Poll for keyboard and mouse events
                _ = tokio::time::sleep(Duration::from_millis(tick_ms)) => {
                    if event::poll(Duration::from_millis(0))? {
                        let action = match event::read()? {
                            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                                keyboard::handle_key_event(
                                    key_event,
                                    &self.ui_store,
                                    &self.modal_store,
                                )
                            }
                            Event::Mouse(mouse_event)
                                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
                            {
                                keyboard::handle_mouse_event(mouse_event, &self.ui_store)
                            }
                            _ => None,
                        };
                        if let Some(action) = action {
                            self.dispatcher.dispatch(action);
                        }
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        Ok(())
    }

    /// Route an action to the stores, then dispatch the events they produced.
    /// Events are only sent once every store has committed its new state.
    fn handle_action(&mut self, action: &Action) {
        if *action != Action::Tick {
            log::debug!("Handling action: {:?}", action);
        }

        if *action == Action::Book
            && stay_nights(&self.calendar_store.get_state().calendar.selection()).is_none()
        {
            log::warn!("Pick a check-in and check-out date before booking");
            return;
        }

        let calendar_event = self.calendar_store.reduce(action);
        let (modal_effect, modal_event) = self.modal_store.reduce(action);
        self.ui_store.reduce(action);

        self.effects.handle(action);
        if let Some(effect) = modal_effect {
            self.effects.run_modal_effect(effect);
        }
        if let Some(event) = calendar_event {
            self.dispatcher.dispatch(Action::CalendarChanged(event));
        }
        if let Some(event) = modal_event {
            self.dispatcher.dispatch(Action::ModalChanged(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use chrono::NaiveDate;
    use trellis_core::calendar::{
        CalendarAction, CalendarEvent, Selection, SelectionType,
    };
    use trellis_core::components::{ModalAction, ModalEvent};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> (App, ActionReceiver) {
        let props = CalendarProps {
            selection_type: SelectionType::Range,
            ..CalendarProps::new(ymd(2024, 2, 1))
        };
        let (dispatcher, rx) = Dispatcher::new();
        let app = App {
            effects: Effects::new(dispatcher.clone()),
            dispatcher,
            calendar_store: CalendarStore::new(
                CalendarState::new(&props).unwrap(),
                CalendarViewProps::default(),
            ),
            modal_store: ModalStore::new(Duration::from_millis(1)),
            ui_store: UIStore::new(),
            app_logs_store: AppLogsStore::new(LogBuffer::new()),
        };
        (app, rx)
    }

    #[tokio::test]
    async fn test_selection_event_dispatched_after_commit() {
        let (mut app, mut rx) = app();
        app.handle_action(&Action::Calendar(CalendarAction::SelectDay(ymd(2024, 2, 10))));
        let event = rx.try_recv();
        assert_eq!(
            event,
            Some(Action::CalendarChanged(CalendarEvent::DaySelected(
                Selection::single(ymd(2024, 2, 10))
            )))
        );
        assert_eq!(
            app.calendar_store.get_state().calendar.selection(),
            Selection::single(ymd(2024, 2, 10))
        );

        // the ui store records the event once it comes back through the loop
        app.handle_action(&event.unwrap());
        assert!(app.ui_store.get_state().last_event.is_some());
    }

    #[tokio::test]
    async fn test_book_requires_complete_range() {
        let (mut app, mut rx) = app();
        app.handle_action(&Action::Book);
        assert!(!app.modal_store.is_open());
        assert_eq!(rx.try_recv(), None);

        for day in [10, 12] {
            app.handle_action(&Action::Calendar(CalendarAction::SelectDay(ymd(2024, 2, day))));
        }
        app.handle_action(&Action::Book);
        assert!(app.modal_store.is_open());
    }

    #[tokio::test]
    async fn test_modal_close_round_trip() {
        let (mut app, mut rx) = app();
        for day in [10, 12] {
            app.handle_action(&Action::Calendar(CalendarAction::SelectDay(ymd(2024, 2, day))));
        }
        app.handle_action(&Action::Book);
        app.handle_action(&Action::Modal(ModalAction::RequestClose));
        assert!(app.modal_store.get_state().is_closing);

        // drain until the close timer reports back
        while let Some(action) = rx.recv().await {
            let done = action == Action::ModalChanged(ModalEvent::Closed);
            app.handle_action(&action);
            if done {
                break;
            }
        }
        assert!(!app.modal_store.is_open());
    }
}
