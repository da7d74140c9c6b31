use crate::view::{Node, Tag, class_names_with_mods};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RadioButtonProps {
    pub name: String,
    pub options: Vec<RadioOption>,
    pub checked: Option<String>,
    pub mods: Vec<String>,
}

impl RadioButtonProps {
    /// Index of the checked option, if any
    pub fn checked_index(&self) -> Option<usize> {
        let checked = self.checked.as_deref()?;
        self.options.iter().position(|o| o.value == checked)
    }
}

/// Renders a radio group. Clicking an enabled option carries its value.
pub fn render_radio_button(props: &RadioButtonProps) -> Node<String> {
    Node::new(Tag::Div)
        .class(class_names_with_mods("ui-radio-button", &props.mods))
        .attr("data-name", props.name.clone())
        .children(props.options.iter().map(|option| {
            let mut mods = Vec::new();
            if props.checked.as_deref() == Some(option.value.as_str()) {
                mods.push("checked");
            }
            if option.disabled {
                mods.push("disabled");
            }
            Node::new(Tag::Label)
                .class(class_names_with_mods("ui-radio-button__option", &mods))
                .attr("data-value", option.value.clone())
                .disabled(option.disabled)
                .on_click_opt((!option.disabled).then(|| option.value.clone()))
                .text(option.label.clone())
        }))
}
