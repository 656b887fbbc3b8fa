//! Virtual Scrolling
//!
//! Computes which rows intersect the viewport so only those are rendered. Rows
//! outside the window are replaced by spacers of the same total height.

use crate::constants::{DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT};
use crate::services::query::RowsRange;

/// Viewport geometry for fixed-height rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualScroll {
    pub row_height: f32,
    pub viewport_height: f32,
    pub offset: f32,
    /// Rows rendered beyond each edge of the viewport
    pub overscan: usize,
}

/// Rows to render plus the space standing in for the rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    pub range: RowsRange,
    pub top_spacer: f32,
    pub bottom_spacer: f32,
}

impl Default for VirtualScroll {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            offset: 0.0,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl VirtualScroll {
    pub fn new(row_height: f32, viewport_height: f32, offset: f32, overscan: usize) -> Self {
        Self {
            row_height,
            viewport_height,
            offset,
            overscan,
        }
    }

    /// Index of the first row touching the viewport
    pub fn first_visible(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.offset.max(0.0) / self.row_height).floor() as usize
    }

    /// Number of rows that fit in the viewport
    pub fn visible_count(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.viewport_height.max(0.0) / self.row_height).ceil() as usize
    }

    /// Exclusive end index wanted for the current viewport, overscan included
    pub fn wanted_end(&self) -> usize {
        self.first_visible()
            .saturating_add(self.visible_count())
            .saturating_add(self.overscan)
    }

    /// Window over `row_count` rows
    pub fn window(&self, row_count: usize) -> VirtualWindow {
        let to = self.wanted_end().min(row_count);
        let from = self.first_visible().saturating_sub(self.overscan).min(to);
        VirtualWindow {
            range: RowsRange::new(from, to),
            top_spacer: from as f32 * self.row_height,
            bottom_spacer: (row_count - to) as f32 * self.row_height,
        }
    }

    /// Height of all rows together
    pub fn total_height(&self, row_count: usize) -> f32 {
        row_count as f32 * self.row_height
    }

    /// Largest offset that still shows a full viewport
    pub fn max_offset(&self, row_count: usize) -> f32 {
        (self.total_height(row_count) - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_at_top() {
        let scroll = VirtualScroll::new(50.0, 200.0, 0.0, 2);
        let window = scroll.window(100);
        assert_eq!(window.range, RowsRange::new(0, 6));
        assert_eq!(window.top_spacer, 0.0);
        assert_eq!(window.bottom_spacer, 94.0 * 50.0);
    }

    #[test]
    fn test_window_mid_scroll() {
        let scroll = VirtualScroll::new(50.0, 200.0, 1000.0, 2);
        let window = scroll.window(100);
        assert_eq!(window.range, RowsRange::new(18, 26));
        assert_eq!(window.top_spacer, 18.0 * 50.0);
        assert_eq!(
            window.top_spacer + window.range.len() as f32 * 50.0 + window.bottom_spacer,
            scroll.total_height(100)
        );
    }

    #[test]
    fn test_window_past_end_is_clamped() {
        let scroll = VirtualScroll::new(50.0, 200.0, 10_000.0, 2);
        let window = scroll.window(10);
        assert!(window.range.is_empty());
        assert_eq!(window.range.to, 10);
        assert_eq!(window.bottom_spacer, 0.0);
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        let scroll = VirtualScroll::new(50.0, 200.0, f32::MAX, 5);
        assert_eq!(scroll.wanted_end(), usize::MAX);
        let window = scroll.window(10);
        assert!(window.range.is_empty());
        assert_eq!(window.range.to, 10);
    }

    #[test]
    fn test_max_offset() {
        let scroll = VirtualScroll::new(50.0, 200.0, 0.0, 0);
        assert_eq!(scroll.max_offset(10), 300.0);
        assert_eq!(scroll.max_offset(2), 0.0);
    }
}
