use fastscroll::{
    DragEvent, DrawSurface, FastScroller, FastScrollerOptions, InteractionMode, Palette,
    PositionRanges, ScrollMetrics, TouchEvent,
};

use crate::ScrollHost;

/// A framework-neutral controller that wires a [`ScrollHost`] to a
/// `fastscroll::FastScroller`.
///
/// This type does not hold any UI objects beyond the host handle.
/// Adapters drive it by calling:
/// - `on_scroll` / `on_layout` when UI events occur
/// - `on_touch` for pointer events over the track
/// - `tick(now_ms)` each frame/timer tick (auto-hide and fades)
/// - `draw(surface)` during the host's render pass
///
/// Scroll targets produced by thumb drags are dispatched straight to
/// [`ScrollHost::scroll_to_index`].
#[derive(Clone, Debug)]
pub struct Controller<H> {
    host: H,
    scroller: FastScroller,
}

impl<H: ScrollHost> Controller<H> {
    /// Attaches a fast scroller to `host`.
    ///
    /// The scroller starts Hidden; call [`on_layout`](Self::on_layout)
    /// once the host has been measured.
    pub fn attach(host: H, options: FastScrollerOptions) -> Self {
        Self {
            host,
            scroller: FastScroller::new(options),
        }
    }

    /// Detaches, returning the host. All scroller state is discarded, so
    /// a later re-attach starts fresh.
    pub fn detach(mut self) -> H {
        self.scroller.reset();
        self.host
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scroller(&self) -> &FastScroller {
        &self.scroller
    }

    /// Call when the host reports a scroll offset change.
    pub fn on_scroll(&mut self, now_ms: u64) {
        let metrics = self.read_metrics();
        self.scroller.update_scroll_metrics(metrics, now_ms);
    }

    /// Call after a layout pass or size change. A changed viewport size
    /// resets the scroller to Hidden until the next update.
    pub fn on_layout(&mut self, now_ms: u64) {
        let metrics = self.read_metrics();
        self.scroller.update_scroll_metrics(metrics, now_ms);
    }

    /// Feeds a pointer event through the track gesture handler and
    /// dispatches any resulting scroll target to the host.
    ///
    /// Returns whether the scroller consumed the event; the host should
    /// suppress its own gesture handling while this returns `true`.
    pub fn on_touch(&mut self, event: TouchEvent, now_ms: u64) -> bool {
        let outcome = self.scroller.on_touch_event(event, now_ms);
        if let Some(index) = outcome.scroll_target {
            self.host.scroll_to_index(index);
        }
        outcome.handled
    }

    /// Advances auto-hide and fades. Returns whether a redraw is needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.scroller.tick(now_ms)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.scroller.draw(surface);
    }

    pub fn show(&mut self, now_ms: u64) {
        self.scroller.show(now_ms);
    }

    pub fn hide(&mut self, now_ms: u64, duration_ms: u64) {
        self.scroller.hide(now_ms, duration_ms);
    }

    pub fn set_range_entries(&mut self, ranges: PositionRanges) -> bool {
        self.scroller.set_range_entries(ranges)
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.scroller.set_interaction_mode(mode);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.scroller.set_palette(palette);
    }

    pub fn set_on_drag(&mut self, on_drag: Option<impl Fn(DragEvent) + Send + Sync + 'static>) {
        self.scroller.set_on_drag(on_drag);
    }

    /// Builds [`ScrollMetrics`] from the host, subtracting paddings from
    /// the raw widget extents.
    fn read_metrics(&self) -> ScrollMetrics {
        let host = &self.host;
        let vertical_padding = host.top_padding().saturating_add(host.bottom_padding());
        ScrollMetrics {
            content_length: host.scroll_range(),
            viewport_length: host.viewport_extent().saturating_sub(vertical_padding),
            viewport_width: host.viewport_cross().saturating_sub(host.left_padding()),
            offset: host.scroll_offset(),
            item_count: host.item_count(),
            top_padding: host.top_padding(),
            left_padding: host.left_padding(),
            rtl: host.is_rtl(),
        }
    }
}
