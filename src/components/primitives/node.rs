//! View Node
//!
//! Headless view tree produced by every table view. Interactive nodes carry the
//! commands they issue, so a host (or a test) can "click" or "type" without a
//! rendering backend.

use serde_json::Value;

use crate::domain::PassthroughAttrs;
use crate::eventing::GridCommand;

/// Passthrough attributes shared by all nodes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    pub class_name: Option<String>,
    pub id: Option<String>,
    pub test_id: Option<String>,
    pub title: Option<String>,
    pub width: Option<String>,
}

impl Attrs {
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    /// Whether the space separated class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|names| names.split_whitespace().any(|name| name == class))
    }

    /// Append classes to the class list
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        self.class_name = Some(match self.class_name.take() {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        });
    }
}

impl From<&PassthroughAttrs> for Attrs {
    fn from(props: &PassthroughAttrs) -> Self {
        Self {
            class_name: props.class_name.clone(),
            id: props.id.clone(),
            test_id: props.test_id.clone(),
            title: props.title.clone(),
            width: None,
        }
    }
}

/// What an input edits when its value changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputBinding {
    SearchText,
    EditField { field: String },
    PageSize,
}

impl InputBinding {
    /// Command issued when the input receives `value`
    pub fn command(&self, value: &str) -> Option<GridCommand> {
        match self {
            InputBinding::SearchText => Some(GridCommand::SetSearchText(value.to_string())),
            InputBinding::EditField { field } => Some(GridCommand::UpdateEditDraft {
                field: field.clone(),
                value: Value::String(value.to_string()),
            }),
            InputBinding::PageSize => value.trim().parse().ok().map(GridCommand::SetPageSize),
        }
    }
}

/// One option of a select node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Text(String),
    Element {
        tag: &'static str,
        attrs: Attrs,
        children: Vec<ViewNode>,
    },
    Button {
        attrs: Attrs,
        label: String,
        disabled: bool,
        on_click: Vec<GridCommand>,
    },
    Checkbox {
        attrs: Attrs,
        checked: bool,
        disabled: bool,
        on_toggle: Vec<GridCommand>,
    },
    TextInput {
        attrs: Attrs,
        value: String,
        placeholder: Option<String>,
        binding: InputBinding,
    },
    Select {
        attrs: Attrs,
        options: Vec<SelectOption>,
        selected: Option<String>,
        binding: InputBinding,
    },
    /// Blank space standing in for rows outside the virtual window
    Spacer { height: f32 },
}

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text(text.into())
    }

    /// A `div` with the given class
    pub fn div(class_name: impl Into<String>) -> Self {
        Self::element("div", Attrs::class(class_name))
    }

    pub fn span(class_name: impl Into<String>) -> Self {
        Self::element("span", Attrs::class(class_name))
    }

    pub fn element(tag: &'static str, attrs: Attrs) -> Self {
        ViewNode::Element {
            tag,
            attrs,
            children: Vec::new(),
        }
    }

    /// Add a child; ignored on leaf nodes
    pub fn child(mut self, node: ViewNode) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = ViewNode>) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Add a child only when present
    pub fn child_opt(self, node: Option<ViewNode>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Apply passthrough attributes on top of the node's own
    pub fn with_attrs(mut self, extra: &Attrs) -> Self {
        if let Some(attrs) = self.attrs_mut() {
            if let Some(class) = &extra.class_name {
                attrs.add_class(class);
            }
            if extra.id.is_some() {
                attrs.id.clone_from(&extra.id);
            }
            if extra.test_id.is_some() {
                attrs.test_id.clone_from(&extra.test_id);
            }
            if extra.title.is_some() {
                attrs.title.clone_from(&extra.title);
            }
            if extra.width.is_some() {
                attrs.width.clone_from(&extra.width);
            }
        }
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        if let Some(attrs) = self.attrs_mut() {
            attrs.width = Some(width.into());
        }
        self
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        match self {
            ViewNode::Element { attrs, .. }
            | ViewNode::Button { attrs, .. }
            | ViewNode::Checkbox { attrs, .. }
            | ViewNode::TextInput { attrs, .. }
            | ViewNode::Select { attrs, .. } => Some(attrs),
            ViewNode::Text(_) | ViewNode::Spacer { .. } => None,
        }
    }

    fn attrs_mut(&mut self) -> Option<&mut Attrs> {
        match self {
            ViewNode::Element { attrs, .. }
            | ViewNode::Button { attrs, .. }
            | ViewNode::Checkbox { attrs, .. }
            | ViewNode::TextInput { attrs, .. }
            | ViewNode::Select { attrs, .. } => Some(attrs),
            ViewNode::Text(_) | ViewNode::Spacer { .. } => None,
        }
    }

    pub fn child_nodes(&self) -> &[ViewNode] {
        match self {
            ViewNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attrs().is_some_and(|attrs| attrs.has_class(class))
    }

    /// Concatenated text of the subtree, as a reader would see it
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ViewNode::Text(text) => out.push_str(text),
            ViewNode::Button { label, .. } => out.push_str(label),
            ViewNode::TextInput { value, .. } => out.push_str(value),
            ViewNode::Select {
                options, selected, ..
            } => {
                if let Some(option) = options.iter().find(|o| Some(&o.value) == selected.as_ref()) {
                    out.push_str(&option.label);
                }
            }
            ViewNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            ViewNode::Checkbox { .. } | ViewNode::Spacer { .. } => {}
        }
    }

    /// Depth-first walk over the subtree, root included
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a ViewNode)) {
        visit(self);
        for child in self.child_nodes() {
            child.walk(visit);
        }
    }

    /// First node carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&ViewNode> {
        self.find(&|node| node.has_class(class))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&ViewNode> {
        let mut found = Vec::new();
        self.walk(&mut |node| {
            if node.has_class(class) {
                found.push(node);
            }
        });
        found
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        self.find(&|node| {
            node.attrs()
                .and_then(|a| a.test_id.as_deref())
                .is_some_and(|id| id == test_id)
        })
    }

    pub fn find(&self, predicate: &dyn Fn(&ViewNode) -> bool) -> Option<&ViewNode> {
        if predicate(self) {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|child| child.find(predicate))
    }

    /// Commands issued by clicking this node; empty for disabled or inert nodes
    pub fn click(&self) -> Vec<GridCommand> {
        match self {
            ViewNode::Button {
                disabled: false,
                on_click,
                ..
            } => on_click.clone(),
            ViewNode::Checkbox {
                disabled: false,
                on_toggle,
                ..
            } => on_toggle.clone(),
            _ => Vec::new(),
        }
    }

    /// Command issued by typing or selecting `value`
    pub fn input(&self, value: &str) -> Option<GridCommand> {
        match self {
            ViewNode::TextInput { binding, .. } => binding.command(value),
            ViewNode::Select {
                binding, options, ..
            } => options
                .iter()
                .any(|o| o.value == value)
                .then(|| binding.command(value))
                .flatten(),
            _ => None,
        }
    }
}

impl From<&str> for ViewNode {
    fn from(text: &str) -> Self {
        ViewNode::Text(text.to_string())
    }
}

impl From<String> for ViewNode {
    fn from(text: String) -> Self {
        ViewNode::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_and_lookup() {
        let node = ViewNode::div("outer extra")
            .child(ViewNode::span("inner").child("Hello".into()))
            .child(" world".into());

        assert_eq!(node.text_content(), "Hello world");
        assert!(node.has_class("extra"));
        assert!(node.find_by_class("inner").is_some());
        assert!(node.find_by_class("missing").is_none());
    }

    #[test]
    fn test_passthrough_attrs_append_class() {
        let extra = Attrs {
            class_name: Some("custom".into()),
            test_id: Some("footer".into()),
            ..Attrs::default()
        };
        let node = ViewNode::div("base").with_attrs(&extra);
        assert!(node.has_class("base"));
        assert!(node.has_class("custom"));
        assert!(node.find_by_test_id("footer").is_some());
    }

    #[test]
    fn test_disabled_button_issues_nothing() {
        let button = ViewNode::Button {
            attrs: Attrs::default(),
            label: "Next".into(),
            disabled: true,
            on_click: vec![GridCommand::SetPage(2)],
        };
        assert!(button.click().is_empty());
    }

    #[test]
    fn test_select_rejects_unknown_option() {
        let select = ViewNode::Select {
            attrs: Attrs::default(),
            options: vec![SelectOption::new("20", "20"), SelectOption::new("50", "50")],
            selected: Some("20".into()),
            binding: InputBinding::PageSize,
        };
        assert_eq!(select.input("50"), Some(GridCommand::SetPageSize(50)));
        assert_eq!(select.input("7"), None);
        assert_eq!(select.text_content(), "20");
    }
}
