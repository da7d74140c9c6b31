/// Effects module handles side effects (timers, host callbacks)
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use std::time::Duration;
use tokio::task;
use trellis_core::calendar::CalendarEvent;
use trellis_core::components::{ModalAction, ModalEffect, ModalEvent};
use trellis_core::get_trellis_setting;

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
}

impl Effects {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Spawn background tasks that run for the lifetime of the app
    pub fn spawn_background_tasks(&self) {
        self.spawn_spinner_ticker();
    }

    /// Advance the spinner animation at a fixed rate
    fn spawn_spinner_ticker(&self) {
        let dispatcher = self.dispatcher.clone();
        let interval_ms = get_trellis_setting!(TRELLIS_SPINNER_FRAME_MS, usize) as u64;

        task::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                dispatcher.dispatch(Action::Tick);
            }
        });
    }

    /// Execute an effect requested by the modal reducer
    pub fn run_modal_effect(&self, effect: ModalEffect) {
        match effect {
            ModalEffect::ScheduleClose { delay, generation } => {
                let dispatcher = self.dispatcher.clone();
                task::spawn(async move {
                    tokio::time::sleep(delay).await;
                    dispatcher.dispatch(Action::Modal(ModalAction::CloseTimerElapsed(generation)));
                });
            }
        }
    }

    /// Handle an action that may trigger side effects
    pub fn handle(&self, action: &Action) {
        match action {
            Action::CalendarChanged(CalendarEvent::DaySelected(selection)) => {
                let dates: Vec<String> = selection
                    .dates()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .collect();
                log::info!("onSelectDay: [{}]", dates.join(", "));
            }
            Action::CalendarChanged(CalendarEvent::NavigatedPrevious(cursor)) => {
                log::info!("onNavigatePrevious: {}", cursor.format("%Y-%m"));
            }
            Action::CalendarChanged(CalendarEvent::NavigatedNext(cursor)) => {
                log::info!("onNavigateNext: {}", cursor.format("%Y-%m"));
            }
            Action::ModalChanged(ModalEvent::Opened) => {
                log::debug!("Booking summary opened");
            }
            Action::ModalChanged(ModalEvent::Closed) => {
                log::info!("onClose: booking summary dismissed");
            }
            Action::SelectRoom(room) => {
                log::debug!("Room changed to {}", room);
            }
            _ => {}
        }
    }
}
