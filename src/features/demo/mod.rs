//! Demo - User Directory Stories
//!
//! A mock user directory shown through the grid twice: once with every row held
//! by the grid, once paged in from a mocked backend.

pub mod client_side;
pub mod columns;
pub mod mock_data;
pub mod server_side;

pub use client_side::ClientSideStory;
pub use columns::{base_columns, compare_day_month_year};
pub use mock_data::mock_rows;
pub use server_side::ServerSideStory;
