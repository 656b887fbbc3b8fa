//! Select Component

use super::node::{Attrs, InputBinding, SelectOption, ViewNode};

/// A select/dropdown bound to a grid input
pub struct Select {
    attrs: Attrs,
    selected: Option<String>,
    options: Vec<SelectOption>,
    binding: InputBinding,
}

impl Select {
    /// Create a new select
    pub fn new(class_name: impl Into<String>, binding: InputBinding) -> Self {
        Self {
            attrs: Attrs::class(class_name),
            selected: None,
            options: Vec::new(),
            binding,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn into_node(self) -> ViewNode {
        ViewNode::Select {
            attrs: self.attrs,
            options: self.options,
            selected: self.selected,
            binding: self.binding,
        }
    }
}

impl From<Select> for ViewNode {
    fn from(select: Select) -> Self {
        select.into_node()
    }
}
