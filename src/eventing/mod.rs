//! Eventing - Commands into the engine and events out of it

pub mod grid_command;
pub mod grid_event;
pub mod grid_handle;

pub use grid_command::GridCommand;
pub use grid_event::{GridEvent, RowsRequest};
pub use grid_handle::GridHandle;
