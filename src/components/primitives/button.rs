//! Button Component

use super::node::{Attrs, ViewNode};
use crate::eventing::GridCommand;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Plain clickable text, the table's default
    #[default]
    Clickable,
    /// Primary action button
    Primary,
    /// Secondary button
    Secondary,
}

impl ButtonVariant {
    fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Clickable => "rgt-clickable",
            ButtonVariant::Primary => "rgt-button rgt-button-primary",
            ButtonVariant::Secondary => "rgt-button rgt-button-secondary",
        }
    }
}

/// A button that issues grid commands when clicked
pub struct Button {
    attrs: Attrs,
    label: String,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Vec<GridCommand>,
}

impl Button {
    /// Create a new button
    pub fn new(class_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            attrs: Attrs::class(class_name),
            label: label.into(),
            variant: ButtonVariant::Clickable,
            disabled: false,
            on_click: Vec::new(),
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Add a command issued on click; commands run in order
    pub fn on_click(mut self, command: GridCommand) -> Self {
        self.on_click.push(command);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.attrs.title = Some(title.into());
        self
    }

    /// Create a primary button
    pub fn primary(class_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(class_name, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(class_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(class_name, label).variant(ButtonVariant::Secondary)
    }

    pub fn into_node(self) -> ViewNode {
        let mut attrs = self.attrs;
        attrs.add_class(self.variant.class_name());
        ViewNode::Button {
            attrs,
            label: self.label,
            disabled: self.disabled,
            on_click: self.on_click,
        }
    }
}

impl From<Button> for ViewNode {
    fn from(button: Button) -> Self {
        button.into_node()
    }
}
