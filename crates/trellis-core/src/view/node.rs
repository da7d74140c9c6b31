/// Declarative node tree produced by component render functions.
/// A node carries the message to dispatch when it is clicked; the host decides
/// how to draw the tree and how to deliver messages.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Nav,
    Header,
    Button,
    Label,
    Ul,
    Li,
    Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<M> {
    pub tag: Tag,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node<M>>,
}

impl<M> Node<M> {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class_name: String::new(),
            attrs: Vec::new(),
            disabled: false,
            on_click: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn attrs(mut self, attrs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.attrs.extend(attrs);
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

    pub fn on_click_opt(mut self, msg: Option<M>) -> Self {
        self.on_click = msg;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node<M>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node<M>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class_name)
    }

    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first, pre-order walk over this node and its descendants
    pub fn walk(&self) -> Vec<&Node<M>> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    pub fn find_by_class(&self, class_name: &str) -> Vec<&Node<M>> {
        self.walk()
            .into_iter()
            .filter(|n| n.has_class(class_name))
            .collect()
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        self.walk()
            .iter()
            .filter_map(|n| n.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Convert the messages carried by the tree, e.g. to wrap a component's
    /// actions into an application action
    pub fn map<N>(self, f: &impl Fn(M) -> N) -> Node<N> {
        Node {
            tag: self.tag,
            class_name: self.class_name,
            attrs: self.attrs,
            disabled: self.disabled,
            on_click: self.on_click.map(f),
            text: self.text,
            children: self.children.into_iter().map(|c| c.map(f)).collect(),
        }
    }
}
