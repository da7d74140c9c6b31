use serde::{Deserialize, Serialize};

use crate::view::{Node, Tag, class_names_with_mods};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListAlign {
    #[default]
    Vertical,
    Horizontal,
}

impl ListAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListProps {
    pub items: Vec<String>,
    pub align: ListAlign,
    pub hide_bullets: bool,
    pub mods: Vec<String>,
}

pub fn render_list<M>(props: &ListProps) -> Node<M> {
    let mut mods = vec![props.align.as_str().to_string()];
    if props.hide_bullets {
        mods.push("hide-bullets".to_string());
    }
    mods.extend(props.mods.iter().cloned());

    Node::new(Tag::Ul)
        .class(class_names_with_mods("ui-list", &mods))
        .children(
            props
                .items
                .iter()
                .map(|item| Node::new(Tag::Li).class("ui-list__item").text(item.clone())),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<String> {
        ["London", "Amsterdam", "Madrid"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_vertical_list() {
        let node: Node<()> = render_list(&ListProps {
            items: cities(),
            ..Default::default()
        });
        assert_eq!(node.class_name, "ui-list ui-list--vertical");
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[1].text.as_deref(), Some("Amsterdam"));
    }

    #[test]
    fn test_horizontal_list() {
        let node: Node<()> = render_list(&ListProps {
            items: cities(),
            align: ListAlign::Horizontal,
            ..Default::default()
        });
        assert_eq!(node.class_name, "ui-list ui-list--horizontal");
    }

    #[test]
    fn test_hidden_bullets() {
        let node: Node<()> = render_list(&ListProps {
            items: cities(),
            hide_bullets: true,
            ..Default::default()
        });
        assert_eq!(
            node.class_name,
            "ui-list ui-list--vertical ui-list--hide-bullets"
        );
    }
}
