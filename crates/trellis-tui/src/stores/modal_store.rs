/// ModalStore manages the booking summary modal
use crate::actions::Action;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use trellis_core::components::{ModalAction, ModalEffect, ModalEvent, ModalState};

/// Store that holds the modal state
#[derive(Clone)]
pub struct ModalStore {
    state: Arc<RwLock<ModalState>>,
}

impl ModalStore {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: Arc::new(RwLock::new(ModalState::new(close_delay))),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> ModalState {
        *self.state.read().unwrap()
    }

    pub fn is_open(&self) -> bool {
        self.state.read().unwrap().is_open
    }

    /// Reducer: returns the effect to run and the event to dispatch after commit
    pub fn reduce(&self, action: &Action) -> (Option<ModalEffect>, Option<ModalEvent>) {
        let modal_action = match action {
            Action::Modal(modal_action) => *modal_action,
            Action::Book => ModalAction::Open,
            _ => return (None, None),
        };

        let mut state = self.state.write().unwrap();
        let transition = state.reduce(&modal_action);
        *state = transition.state;
        (transition.effect, transition.event)
    }
}
