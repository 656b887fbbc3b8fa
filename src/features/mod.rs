//! Features - Vertical Feature Slices
//!
//! Each feature wires the grid to its own columns, data and header.

pub mod demo;
