//! Components - Reusable View Components
//!
//! Pure view components that don't do I/O. They render snapshots into view trees.

pub mod composite;
pub mod primitives;
