//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc. Each builds a [`node::ViewNode`].

pub mod button;
pub mod checkbox;
pub mod node;
pub mod select;
pub mod text_input;

pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use node::{Attrs, InputBinding, SelectOption, ViewNode};
pub use select::Select;
pub use text_input::TextInput;
