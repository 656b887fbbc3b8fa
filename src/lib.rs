//! Grid Table Library
//!
//! A headless data grid engine: client-side and server-side row handling with
//! search, sort, pagination, selection, inline editing and virtual scrolling. Views
//! are plain node trees whose interactive nodes carry the commands they issue.

rust_i18n::i18n!("locales", fallback = "en");

pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod utils;
