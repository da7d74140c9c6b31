/// Central dispatcher for the flux architecture.
/// Receives Actions and forwards them to Stores and Effects.
use crate::actions::Action;
use tokio::sync::mpsc;

/// The Dispatcher is responsible for routing Actions to all registered handlers
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new Dispatcher with a receiver for processing actions
    pub fn new() -> (Self, ActionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, ActionReceiver { rx })
    }

    /// Dispatch an action through the system.
    /// Actions are processed in the order they were dispatched.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action {:?}: receiver dropped", e.0);
        }
    }
}

/// ActionReceiver hands dispatched actions to the event loop
pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    /// Receive the next action (waiting until one is available)
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Receive an action if one is already queued
    pub fn try_recv(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PanelId;

    #[tokio::test]
    async fn test_actions_arrive_in_order() {
        let (dispatcher, mut rx) = Dispatcher::new();
        dispatcher.dispatch(Action::ToggleHelp);
        dispatcher.dispatch(Action::FocusPanel(PanelId::Widgets));
        assert_eq!(rx.recv().await, Some(Action::ToggleHelp));
        assert_eq!(rx.recv().await, Some(Action::FocusPanel(PanelId::Widgets)));
        assert_eq!(rx.try_recv(), None);
    }
}
