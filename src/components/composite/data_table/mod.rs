//! DataTable Component
//!
//! Headless data table: the engine, its column model and the views rendered from
//! its snapshots.

pub mod column;
pub mod data_provider;
pub mod data_table;
pub mod footer;
pub mod header;
pub mod information;
pub mod pagination;
pub mod render;
pub mod virtual_scroll;

#[cfg(test)]
pub(crate) mod test_support;

pub use column::{Column, ColumnSet, ColumnWidth};
pub use data_provider::{InMemoryRowsProvider, RowsPage, RowsProvider};
pub use data_table::{DataMode, DataTable};
pub use footer::render_footer;
pub use header::render_header;
pub use information::{InformationOverrides, render_information};
pub use pagination::render_pagination;
pub use render::{render_plain_text, render_table};
pub use virtual_scroll::{VirtualScroll, VirtualWindow};
