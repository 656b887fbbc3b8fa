//! Service Layer
//!
//! Query execution, request bookkeeping and the async plumbing that answers rows
//! requests in server-side mode.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        DataTable                             │
//! │     GridCommand ──▶ apply ──▶ rebuild ──▶ TableManager       │
//! └─────────────────────────────────────────────────────────────┘
//!                            │ GridEvent::RowsRequested
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RowsService                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────┐    │
//! │  │ RowsProvider│  │   runtime   │  │  RequestTracker  │    │
//! │  │ (query)     │  │  (tokio)    │  │  (stale replies) │    │
//! │  └─────────────┘  └─────────────┘  └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod query;
pub mod request_tracker;
pub mod rows_service;
pub mod runtime;
pub mod search;

pub use query::{QueryParams, QueryResult, RowsRange, run_query};
pub use request_tracker::{RequestToken, RequestTracker};
pub use rows_service::{RowsService, drive_until_idle};
pub use search::{contains, contains_ignore_case, starts_with_ignore_case};
