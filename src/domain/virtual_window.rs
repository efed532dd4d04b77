use std::ops::Range;

/// Fixed-row-height windowing over a long list.
///
/// Given how many rows exist, how tall the viewport is and how far it has
/// scrolled, works out which rows need to be mounted. The result is the
/// visible rows plus `overscan` rows on either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualWindow {
    pub row_height: f64,
    pub overscan: usize,
}

impl Default for VirtualWindow {
    fn default() -> Self {
        Self {
            row_height: 30.0,
            overscan: 5,
        }
    }
}

impl VirtualWindow {
    pub fn new(row_height: f64, overscan: usize) -> Self {
        Self {
            row_height,
            overscan,
        }
    }

    /// Total scrollable height for `count` rows.
    pub fn content_height(&self, count: usize) -> f64 {
        count as f64 * self.row_height
    }

    /// Top offset of the row at `index`.
    pub fn row_offset(&self, index: usize) -> f64 {
        index as f64 * self.row_height
    }

    pub fn visible_range(&self, count: usize, viewport_height: f64, scroll_offset: f64) -> Range<usize> {
        if count == 0 || self.row_height <= 0.0 || !viewport_height.is_finite() || viewport_height <= 0.0 {
            return 0..0;
        }

        let max_scroll = (self.content_height(count) - viewport_height).max(0.0);
        let scroll = if scroll_offset.is_finite() {
            scroll_offset.clamp(0.0, max_scroll)
        } else {
            0.0
        };

        let first = ((scroll / self.row_height).floor() as usize).min(count);
        let last = (((scroll + viewport_height) / self.row_height).ceil() as usize).min(count);

        first.saturating_sub(self.overscan)..(last + self.overscan).min(count)
    }

    /// Upper bound on mounted rows for a viewport, independent of row count.
    pub fn max_mounted_rows(&self, viewport_height: f64) -> usize {
        if self.row_height <= 0.0 || viewport_height <= 0.0 {
            return 0;
        }
        // One extra row covers a partially scrolled top row.
        (viewport_height / self.row_height).ceil() as usize + 1 + 2 * self.overscan
    }
}

/// Latest known scroll offset of a viewport whose reads complete out of order.
///
/// Each read is numbered when issued. A result is applied only if it is newer
/// than the last applied one, so a slow read can never roll the window back.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    issued: u64,
    applied: u64,
    offset: f64,
}

impl ScrollTracker {
    pub fn begin_read(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Returns `false` when `seq` is older than an already applied read.
    pub fn apply(&mut self, seq: u64, offset: f64) -> bool {
        if seq <= self.applied || !offset.is_finite() {
            return false;
        }
        self.applied = seq;
        self.offset = offset.max(0.0);
        true
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_empty_list_mounts_nothing() {
        let window = VirtualWindow::default();
        assert_eq!(window.visible_range(0, 300.0, 0.0), 0..0);
    }

    #[test]
    fn test_top_of_list_has_no_leading_overscan() {
        let window = VirtualWindow::new(30.0, 5);
        // 300px shows 10 rows, plus 5 overscan below
        assert_eq!(window.visible_range(1000, 300.0, 0.0), 0..15);
    }

    #[test]
    fn test_scrolled_window_overscans_both_sides() {
        let window = VirtualWindow::new(30.0, 5);
        // scrolled to row 100 exactly
        assert_eq!(window.visible_range(1000, 300.0, 3000.0), 95..115);
    }

    #[test]
    fn test_partial_row_scroll_includes_both_edges() {
        let window = VirtualWindow::new(30.0, 0);
        assert_eq!(window.visible_range(1000, 300.0, 15.0), 0..11);
    }

    #[test]
    fn test_scroll_past_end_is_clamped() {
        let window = VirtualWindow::new(30.0, 2);
        let range = window.visible_range(100, 300.0, 1_000_000.0);
        assert_eq!(range.end, 100);
        assert_eq!(range.start, 88);
    }

    #[test]
    fn test_short_list_fits_entirely() {
        let window = VirtualWindow::new(30.0, 5);
        assert_eq!(window.visible_range(3, 300.0, 0.0), 0..3);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    fn test_degenerate_viewport_mounts_nothing(#[case] height: f64) {
        let window = VirtualWindow::default();
        assert_eq!(window.visible_range(50, height, 0.0), 0..0);
    }

    #[test]
    fn test_mounted_rows_bounded_for_any_scroll_position() {
        let window = VirtualWindow::new(30.0, 5);
        let bound = window.max_mounted_rows(120.0);

        for scroll in (0..300_000).step_by(7_919) {
            let range = window.visible_range(10_000, 120.0, scroll as f64);
            assert!(range.len() <= bound, "{:?} exceeds {}", range, bound);
        }
    }

    #[test]
    fn test_late_scroll_read_does_not_roll_back() {
        let mut scroll = ScrollTracker::default();
        let older = scroll.begin_read();
        let newer = scroll.begin_read();

        assert!(scroll.apply(newer, 3000.0));
        assert!(!scroll.apply(older, 150.0));
        assert_eq!(scroll.offset(), 3000.0);
    }

    #[test]
    fn test_scroll_reads_in_order_all_apply() {
        let mut scroll = ScrollTracker::default();
        let first = scroll.begin_read();
        assert!(scroll.apply(first, 90.0));
        let second = scroll.begin_read();
        assert!(scroll.apply(second, 60.0));

        assert_eq!(scroll.offset(), 60.0);
        assert!(!scroll.apply(second, 10.0), "Same read applies once");
    }

    #[test]
    fn test_garbage_scroll_value_is_ignored() {
        let mut scroll = ScrollTracker::default();
        let seq = scroll.begin_read();
        assert!(!scroll.apply(seq, f64::NAN));
        assert_eq!(scroll.offset(), 0.0);
    }

    #[test]
    fn test_tracked_offset_drives_visible_range() {
        let window = VirtualWindow::new(30.0, 5);
        let mut scroll = ScrollTracker::default();
        let seq = scroll.begin_read();
        scroll.apply(seq, 3000.0);

        assert_eq!(window.visible_range(1000, 300.0, scroll.offset()), 95..115);
    }
}
