//! Composite Components
//!
//! Components built from primitives and driven by grid state.

pub mod data_table;
