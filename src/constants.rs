//! Grid Constants
//!
//! Centralized defaults for consistent grid behaviour.

/// Id of the synthetic selection column
pub const SELECTION_COLUMN_ID: &str = "checkbox";

/// Pagination defaults
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [20, 50, 100];

/// Minimum number of characters before free-text search applies
pub const DEFAULT_SEARCH_MIN_CHARS: usize = 2;

/// Column width used when a descriptor does not set one
pub const DEFAULT_COLUMN_WIDTH: &str = "200px";

/// Virtual scrolling defaults
pub const DEFAULT_ROW_HEIGHT: f32 = 50.0;
pub const DEFAULT_OVERSCAN: usize = 5;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

/// Events kept for hosts that do not drain the queue; older ones are dropped
pub const EVENT_QUEUE_CAPACITY: usize = 256;

/// Separator glyph between footer information segments
pub const INFO_SEPARATOR: &str = "|";

/// Demo timing
pub const DEMO_FETCH_DELAY_MS: u64 = 1500;
pub const DRIVER_TICK_MS: u64 = 10;
pub const DRIVER_MAX_TICKS: usize = 10_000;

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "grid-table.toml";
