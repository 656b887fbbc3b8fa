//! Domain - Pure Data Structures
//!
//! These types don't depend on the engine or the views and describe the grid's data.

pub mod config;
pub mod ids;
pub mod row;
pub mod sort;
pub mod value;

pub use config::{AdditionalProps, GridConfig, PassthroughAttrs, TableIcons, TableTexts};
pub use ids::{ColumnId, RowId};
pub use row::Row;
pub use sort::SortSpec;
