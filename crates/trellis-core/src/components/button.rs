use std::collections::BTreeMap;

use crate::view::{Node, Tag, class_names_with_mods, data_attributes};

#[derive(Debug, Clone)]
pub struct ButtonProps<M> {
    pub label: String,
    pub mods: Vec<String>,
    pub disabled: bool,
    pub on_click: Option<M>,
    pub data_attrs: BTreeMap<String, String>,
}

impl<M> ButtonProps<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            mods: Vec::new(),
            disabled: false,
            on_click: None,
            data_attrs: BTreeMap::new(),
        }
    }

    pub fn mods(mut self, mods: &[&str]) -> Self {
        self.mods = mods.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, msg: M) -> Self {
        self.on_click = Some(msg);
        self
    }
}

pub fn render_button<M: Clone>(props: &ButtonProps<M>) -> Node<M> {
    let on_click = if props.disabled {
        None
    } else {
        props.on_click.clone()
    };
    Node::new(Tag::Button)
        .class(class_names_with_mods("ui-button", &props.mods))
        .attr("type", "button")
        .attrs(data_attributes(&props.data_attrs))
        .disabled(props.disabled)
        .on_click_opt(on_click)
        .text(props.label.clone())
}
