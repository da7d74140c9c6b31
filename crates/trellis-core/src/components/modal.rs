/// Modal dialog: open/close state machine and its rendering.
/// Closing is delayed so the host can play an exit transition; the reducer
/// asks for the delay through a `ModalEffect` and completes the close when the
/// host reports `CloseTimerElapsed` carrying the generation of that close request.
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::view::{Node, Tag, class_names_with_mods};

/// DOM key code of the Escape key
pub const ESCAPE_KEY_CODE: u32 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalAction {
    Open,
    RequestClose,
    Keydown(u32),
    /// Timer for the close request with this generation has run out
    CloseTimerElapsed(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    /// Dispatch `CloseTimerElapsed(generation)` after the delay
    ScheduleClose { delay: Duration, generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Opened,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub is_closing: bool,
    pub close_delay: Duration,
    /// Bumped on every close request; timers from older requests are stale
    pub close_generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTransition {
    pub state: ModalState,
    pub effect: Option<ModalEffect>,
    pub event: Option<ModalEvent>,
}

impl ModalState {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            is_open: false,
            is_closing: false,
            close_delay,
            close_generation: 0,
        }
    }

    fn to(self, effect: Option<ModalEffect>, event: Option<ModalEvent>) -> ModalTransition {
        ModalTransition {
            state: self,
            effect,
            event,
        }
    }

    pub fn reduce(&self, action: &ModalAction) -> ModalTransition {
        match action {
            ModalAction::Open if !self.is_open || self.is_closing => {
                let was_open = self.is_open;
                let next = Self {
                    is_open: true,
                    is_closing: false,
                    ..*self
                };
                // reopening during the exit transition cancels it without a new event
                next.to(None, (!was_open).then_some(ModalEvent::Opened))
            }
            ModalAction::RequestClose if self.is_open && !self.is_closing => {
                let generation = self.close_generation.wrapping_add(1);
                let effect = ModalEffect::ScheduleClose {
                    delay: self.close_delay,
                    generation,
                };
                Self {
                    is_closing: true,
                    close_generation: generation,
                    ..*self
                }
                .to(Some(effect), None)
            }
            ModalAction::Keydown(code) if *code == ESCAPE_KEY_CODE => {
                self.reduce(&ModalAction::RequestClose)
            }
            ModalAction::CloseTimerElapsed(generation)
                if self.is_closing && *generation == self.close_generation =>
            {
                Self {
                    is_open: false,
                    is_closing: false,
                    ..*self
                }
                .to(None, Some(ModalEvent::Closed))
            }
            _ => self.to(None, None),
        }
    }
}

/// Wraps `content` in the modal chrome. `close_msg` is attached to the close button.
pub fn render_modal<M: Clone>(
    state: &ModalState,
    title: &str,
    content: Node<M>,
    close_msg: Option<M>,
) -> Node<M> {
    let mut mods = Vec::new();
    if state.is_open {
        mods.push("open");
    }
    if state.is_closing {
        mods.push("closing");
    }
    Node::new(Tag::Div)
        .class(class_names_with_mods("ui-modal", &mods))
        .attr("role", "dialog")
        .child(
            Node::new(Tag::Header)
                .class("ui-modal__header")
                .child(Node::new(Tag::Span).class("ui-modal__title").text(title))
                .child(
                    Node::new(Tag::Button)
                        .class("ui-modal__close")
                        .attr("type", "button")
                        .on_click_opt(close_msg)
                        .text("×"),
                ),
        )
        .child(Node::new(Tag::Div).class("ui-modal__content").child(content))
}
