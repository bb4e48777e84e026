//! Pagination math
//!
//! Pure helpers behind the pagination controls: a window of up to two
//! pages either side of the current one, and clamping for every
//! navigation target.

use std::ops::RangeInclusive;

/// Pages to show as numbered buttons: current page plus up to two on
/// each side, clamped to `[1, total]`.
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    let start = current.saturating_sub(2).max(1);
    let end = current.saturating_add(2).min(total);
    start..=end
}

/// Clamp a navigation target into the valid page range.
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, total.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(page_window(5, 10).collect::<Vec<_>>(), [3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_clamps_at_the_edges() {
        assert_eq!(page_window(1, 10).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(page_window(10, 10).collect::<Vec<_>>(), [8, 9, 10]);
        assert_eq!(page_window(1, 1).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn clamp_keeps_targets_in_range() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(1, 0), 1);
    }
}
