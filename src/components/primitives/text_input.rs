//! TextInput Component

use super::node::{Attrs, InputBinding, ViewNode};

/// Single-line text input bound to a grid input
pub struct TextInput {
    attrs: Attrs,
    value: String,
    placeholder: Option<String>,
    binding: InputBinding,
}

impl TextInput {
    pub fn new(class_name: impl Into<String>, binding: InputBinding) -> Self {
        Self {
            attrs: Attrs::class(class_name),
            value: String::new(),
            placeholder: None,
            binding,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn into_node(self) -> ViewNode {
        ViewNode::TextInput {
            attrs: self.attrs,
            value: self.value,
            placeholder: self.placeholder,
            binding: self.binding,
        }
    }
}

impl From<TextInput> for ViewNode {
    fn from(input: TextInput) -> Self {
        input.into_node()
    }
}
