//! Checkbox Component

use super::node::{Attrs, ViewNode};
use crate::eventing::GridCommand;

/// A checkbox, optionally labelled
pub struct Checkbox {
    attrs: Attrs,
    checked: bool,
    label: Option<String>,
    disabled: bool,
    on_toggle: Vec<GridCommand>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            attrs: Attrs::class(class_name),
            checked: false,
            label: None,
            disabled: false,
            on_toggle: Vec::new(),
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the command issued on toggle
    pub fn on_toggle(mut self, command: GridCommand) -> Self {
        self.on_toggle.push(command);
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.attrs.test_id = Some(test_id.into());
        self
    }

    /// Render as a bare checkbox, or a label wrapping checkbox and text
    pub fn into_node(self) -> ViewNode {
        let checkbox = ViewNode::Checkbox {
            attrs: self.attrs,
            checked: self.checked,
            disabled: self.disabled,
            on_toggle: self.on_toggle,
        };
        match self.label {
            Some(label) => ViewNode::element("label", Attrs::default())
                .child(checkbox)
                .child(ViewNode::text(label)),
            None => checkbox,
        }
    }
}

impl From<Checkbox> for ViewNode {
    fn from(checkbox: Checkbox) -> Self {
        checkbox.into_node()
    }
}
