pub mod table_manager;
pub mod table_state;

pub use table_manager::TableManager;
pub use table_state::{EditRow, TableState};
