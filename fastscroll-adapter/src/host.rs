/// The list interface a fast scroller consumes, layout-manager-agnostic.
///
/// Implementors report raw widget metrics; the [`Controller`] subtracts
/// paddings when it builds [`fastscroll::ScrollMetrics`]. All extents are
/// in pixels.
///
/// [`Controller`]: crate::Controller
pub trait ScrollHost {
    /// Current scroll offset in the scroll axis.
    fn scroll_offset(&self) -> u64;

    /// Total scrollable content length in the scroll axis.
    fn scroll_range(&self) -> u64;

    /// Widget extent in the scroll axis, paddings included.
    fn viewport_extent(&self) -> u32;

    /// Widget extent in the cross axis, paddings included.
    fn viewport_cross(&self) -> u32;

    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Padding before the content area in the scroll axis.
    fn top_padding(&self) -> u32 {
        0
    }

    /// Padding after the content area in the scroll axis.
    fn bottom_padding(&self) -> u32 {
        0
    }

    /// Padding before the content area in the cross axis.
    fn left_padding(&self) -> u32 {
        0
    }

    /// Whether the list lays out right-to-left.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Scrolls so the item at `index` sits at the top of the viewport
    /// (zero offset into the item).
    fn scroll_to_index(&mut self, index: usize);
}
