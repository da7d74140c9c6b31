use crate::view::{Node, Tag, class_names_with_mods};

/// Frames cycled by hosts that animate the spinner themselves
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

#[derive(Debug, Clone, Default)]
pub struct SpinnerProps {
    pub label: Option<String>,
    pub mods: Vec<String>,
}

pub fn render_spinner<M>(props: &SpinnerProps) -> Node<M> {
    let node = Node::new(Tag::Div)
        .class(class_names_with_mods("ui-spinner", &props.mods))
        .attr("role", "status");
    match &props.label {
        Some(label) => node.child(
            Node::new(Tag::Span)
                .class("ui-spinner__label")
                .text(label.clone()),
        ),
        None => node,
    }
}
