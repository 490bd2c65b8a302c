use crate::animation::{AnimationEnd, ShowHideAnimator};
use crate::draw::DrawSurface;
use crate::geometry;
use crate::options::FastScrollerOptions;
use crate::overlay::{PositionMap, PositionRanges};
use crate::{
    AnimationState, DragEvent, InteractionMode, Palette, ScrollMetrics, ThumbGeometry, TouchEvent,
    TouchOutcome, VisibilityState,
};

/// A headless fast scroller with a position-map overlay.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the host feeds it [`ScrollMetrics`]
///   on every scroll/layout event and touch events as they arrive.
/// - It has no timers of its own: the host drives it by calling
///   [`tick`](Self::tick) once per frame, which services the auto-hide
///   deadline and advances the fade animations.
/// - Rendering goes through the minimal [`DrawSurface`] trait.
///
/// Everything is single-threaded and owned by the host's UI thread; there
/// is no concurrent mutation and no locking.
///
/// For host wiring (attach/detach, metrics refresh, scroll dispatch), see
/// the `fastscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct FastScroller {
    options: FastScrollerOptions,
    metrics: Option<ScrollMetrics>,
    thumb: Option<ThumbGeometry>,
    needs_scrollbar: bool,
    state: VisibilityState,
    animator: ShowHideAnimator,
    position_map: PositionMap,
    hide_deadline_ms: Option<u64>,
}

impl FastScroller {
    pub fn new(options: FastScrollerOptions) -> Self {
        fsdebug!(
            track_width = options.track_width,
            thumb_min_length = options.thumb_min_length,
            "FastScroller::new"
        );
        Self {
            options,
            metrics: None,
            thumb: None,
            needs_scrollbar: false,
            state: VisibilityState::Hidden,
            animator: ShowHideAnimator::new(),
            position_map: PositionMap::new(),
            hide_deadline_ms: None,
        }
    }

    pub fn options(&self) -> &FastScrollerOptions {
        &self.options
    }

    pub fn is_hidden(&self) -> bool {
        self.state == VisibilityState::Hidden
    }

    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Visible
    }

    pub fn is_dragging(&self) -> bool {
        self.state == VisibilityState::Dragging
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    /// Current fade alpha in `[0, 1]`, shared by the track, both thumbs,
    /// and (in lockstep) the position map.
    pub fn alpha(&self) -> f32 {
        self.animator.value()
    }

    pub fn thumb_geometry(&self) -> Option<ThumbGeometry> {
        self.thumb
    }

    pub fn position_map(&self) -> &PositionMap {
        &self.position_map
    }

    /// Replaces the overlay's range snapshot (structural no-op when equal).
    pub fn set_range_entries(&mut self, ranges: PositionRanges) -> bool {
        self.position_map.set_ranges(ranges)
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.options.interaction_mode
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.options.interaction_mode = mode;
    }

    /// Re-injects theme colors; call on every theme change.
    pub fn set_palette(&mut self, palette: Palette) {
        self.options.palette = palette;
    }

    pub fn set_on_drag(
        &mut self,
        on_drag: Option<impl Fn(DragEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_drag = on_drag.map(|f| alloc::sync::Arc::new(f) as _);
    }

    /// Detach teardown: cancels the hide deadline and both fades, drops
    /// the stored metrics and overlay snapshot. No cross-attach state
    /// survives.
    pub fn reset(&mut self) {
        self.metrics = None;
        self.thumb = None;
        self.needs_scrollbar = false;
        self.state = VisibilityState::Hidden;
        self.animator.reset();
        self.position_map.clear();
        self.hide_deadline_ms = None;
    }

    /// Applies a scroll/layout update from the host.
    ///
    /// A viewport size change forcibly resets to Hidden (stale geometry
    /// must never be shown) and waits for the next update to decide
    /// visibility again. Otherwise the thumb geometry is recomputed and,
    /// while Hidden or Visible, the scroller becomes Visible with a fresh
    /// auto-hide deadline.
    pub fn update_scroll_metrics(&mut self, metrics: ScrollMetrics, now_ms: u64) {
        if let Some(prev) = self.metrics {
            if prev.viewport_length != metrics.viewport_length
                || prev.viewport_width != metrics.viewport_width
            {
                fsdebug!(
                    viewport_length = metrics.viewport_length,
                    viewport_width = metrics.viewport_width,
                    "viewport size changed, resetting to hidden"
                );
                self.metrics = Some(metrics);
                self.force_hidden(now_ms);
                return;
            }
        }
        self.metrics = Some(metrics);

        let max_offset = metrics
            .content_length
            .saturating_sub(metrics.viewport_length as u64);
        if metrics.offset > max_offset {
            fswarn!(
                offset = metrics.offset,
                max_offset,
                "host reported a scroll offset beyond the scrollable range"
            );
        }

        self.needs_scrollbar =
            geometry::needs_scrollbar(&metrics, self.options.scrollbar_minimum_range);
        if !self.needs_scrollbar {
            self.thumb = None;
            if self.state == VisibilityState::Visible {
                self.hide_deadline_ms = None;
                self.hide(now_ms, 0);
            }
            return;
        }

        self.thumb = geometry::compute_thumb(
            &metrics,
            self.options.thumb_min_length,
            self.options.true_thumb_min_length,
            self.options.scrollbar_minimum_range,
        );
        fstrace!(offset = metrics.offset, "update_scroll_metrics");

        if matches!(
            self.state,
            VisibilityState::Hidden | VisibilityState::Visible
        ) {
            self.set_state(VisibilityState::Visible, now_ms);
        }
    }

    /// Starts fading in (host-callable, e.g. when the list is scrolled by
    /// external control). The position map fades in lockstep.
    pub fn show(&mut self, now_ms: u64) {
        if self.animator.state() == AnimationState::FadingOut {
            self.position_map.cancel_animation();
        }
        self.animator.show(now_ms, self.options.show_duration_ms);
        self.position_map.show(now_ms, self.options.show_duration_ms);
    }

    /// Starts fading out over `duration_ms`; `0` means instant
    /// disappearance on the next tick.
    pub fn hide(&mut self, now_ms: u64, duration_ms: u64) {
        if self.animator.state() == AnimationState::FadingIn {
            self.position_map.cancel_animation();
        }
        self.animator.hide(now_ms, duration_ms);
        self.position_map.hide(now_ms, duration_ms);
    }

    /// Services the auto-hide deadline and advances both fades.
    ///
    /// Call once per display frame. Returns whether a redraw is needed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.state == VisibilityState::Visible {
            if let Some(deadline) = self.hide_deadline_ms {
                if now_ms >= deadline {
                    fstrace!(deadline, "auto-hide deadline fired");
                    self.hide_deadline_ms = None;
                    self.hide(now_ms, self.options.hide_duration_ms);
                }
            }
        }

        let before = self.animator.value();
        let end = self.animator.tick(now_ms);
        self.position_map.tick(now_ms);

        if end == Some(AnimationEnd::FadedOut) {
            self.state = VisibilityState::Hidden;
            self.hide_deadline_ms = None;
        }

        end.is_some() || self.animator.value() != before
    }

    /// Feeds a host touch event through the track gesture handler.
    ///
    /// Unexpected events (a move without a preceding down inside the
    /// thumb, a second down while already dragging) are no-ops.
    pub fn on_touch_event(&mut self, event: TouchEvent, now_ms: u64) -> TouchOutcome {
        match event {
            TouchEvent::Down { x, y } => {
                // Drag state is exclusive.
                if self.state != VisibilityState::Visible {
                    return TouchOutcome::IGNORED;
                }
                if !self.is_point_inside_thumb(x, y) {
                    return TouchOutcome::IGNORED;
                }

                self.set_state(VisibilityState::Dragging, now_ms);
                self.notify_drag(DragEvent::Started);
                TouchOutcome {
                    handled: true,
                    scroll_target: self.scroll_target_for(y),
                }
            }
            TouchEvent::Move { x: _, y } => {
                if self.state != VisibilityState::Dragging {
                    return TouchOutcome::IGNORED;
                }
                self.show(now_ms);
                TouchOutcome {
                    handled: true,
                    scroll_target: self.scroll_target_for(y),
                }
            }
            TouchEvent::Up | TouchEvent::Cancel => {
                if self.state != VisibilityState::Dragging {
                    return TouchOutcome::IGNORED;
                }
                self.set_state(VisibilityState::Visible, now_ms);
                self.notify_drag(DragEvent::Ended);
                TouchOutcome {
                    handled: true,
                    scroll_target: None,
                }
            }
        }
    }

    /// Hit test against the thumb (or the whole track, depending on the
    /// interaction mode), mirrored under RTL.
    pub fn is_point_inside_thumb(&self, x: f32, y: f32) -> bool {
        let (Some(metrics), Some(thumb)) = (self.metrics, self.thumb) else {
            return false;
        };
        geometry::is_inside_thumb(
            &metrics,
            &thumb,
            self.options.track_width,
            self.options.interaction_mode,
            x,
            y,
        )
    }

    /// Paints the track, the position map, and both thumbs.
    ///
    /// The true-proportion thumb is drawn only alongside a non-empty
    /// overlay and only when it is meaningfully smaller than the
    /// draggable thumb.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let Some(metrics) = self.metrics else {
            return;
        };
        if self.animator.state() == AnimationState::Out || !self.needs_scrollbar {
            return;
        }
        let Some(thumb) = self.thumb else {
            return;
        };

        let opts = &self.options;
        let track_width = opts.track_width as f32;
        let track_x = if metrics.rtl {
            metrics.left_padding as f32
        } else {
            (metrics.left_padding + metrics.viewport_width) as f32 - track_width
        };
        let fade = self.animator.value();

        let track_alpha_ceiling = if self.is_dragging() {
            opts.track_alpha_dragging
        } else {
            opts.track_alpha_visible
        };
        surface.draw_rect(
            track_x,
            metrics.top_padding as f32,
            track_width,
            metrics.viewport_length as f32,
            opts.palette.track,
            track_alpha_ceiling as f32 / 255.0 * fade,
        );

        self.position_map
            .draw(surface, &metrics, track_x, opts.track_width, &opts.palette);

        let thumb_color = if self.is_dragging() {
            opts.palette.thumb_dragging
        } else {
            opts.palette.thumb
        };
        let thumb_top = geometry::clamp_thumb_top(&metrics, thumb.center_y, thumb.draggable_height);
        surface.draw_rect(
            track_x,
            thumb_top as f32,
            track_width,
            thumb.draggable_height as f32,
            thumb_color,
            opts.thumb_alpha as f32 / 255.0 * fade,
        );

        let true_thumb_fits =
            thumb.true_height.saturating_mul(opts.true_thumb_visibility_ratio)
                < thumb.draggable_height;
        if !self.position_map.is_empty() && true_thumb_fits {
            let true_top = geometry::clamp_thumb_top(&metrics, thumb.center_y, thumb.true_height);
            surface.draw_rect(
                track_x,
                true_top as f32,
                track_width,
                thumb.true_height as f32,
                opts.palette.true_thumb,
                opts.true_thumb_alpha as f32 / 255.0 * fade,
            );
        }
    }

    fn scroll_target_for(&self, y: f32) -> Option<usize> {
        let metrics = self.metrics?;
        let (range_start, range_end) = geometry::vertical_range(&metrics);
        let fraction = geometry::touch_fraction(y, range_start, range_end);
        geometry::target_index(fraction, metrics.item_count)
    }

    fn set_state(&mut self, state: VisibilityState, now_ms: u64) {
        if state == VisibilityState::Dragging && self.state != VisibilityState::Dragging {
            self.hide_deadline_ms = None;
        }

        if state != VisibilityState::Hidden {
            self.show(now_ms);
        }

        if self.state == VisibilityState::Dragging && state != VisibilityState::Dragging {
            self.schedule_hide(now_ms, self.options.hide_delay_after_dragging_ms);
        } else if state == VisibilityState::Visible {
            self.schedule_hide(now_ms, self.options.hide_delay_after_visible_ms);
        }

        self.state = state;
    }

    fn schedule_hide(&mut self, now_ms: u64, delay_ms: u64) {
        // Each (re)schedule replaces any pending deadline.
        self.hide_deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    fn force_hidden(&mut self, now_ms: u64) {
        self.state = VisibilityState::Hidden;
        self.thumb = None;
        self.needs_scrollbar = false;
        self.hide_deadline_ms = None;
        self.hide(now_ms, 0);
    }

    fn notify_drag(&self, event: DragEvent) {
        if let Some(cb) = &self.options.on_drag {
            cb(event);
        }
    }
}
