//! Pure mappings between item index space, content-pixel space, and
//! screen-pixel space.
//!
//! Everything here is synchronous math over [`ScrollMetrics`]; degenerate
//! inputs (zero content, zero items) collapse to `None`/`false` instead
//! of producing NaN or infinity.

use crate::{InteractionMode, ScrollMetrics, ThumbGeometry};

/// Whether the content is long enough (and the viewport tall enough) to
/// warrant a scrollbar at all.
pub fn needs_scrollbar(metrics: &ScrollMetrics, minimum_range: u32) -> bool {
    metrics.content_length > metrics.viewport_length as u64
        && metrics.viewport_length >= minimum_range
}

/// Maps scroll metrics to thumb geometry.
///
/// Returns `None` when no scrollbar is needed (which covers
/// `content_length == 0`, so the divisions below cannot trap).
pub fn compute_thumb(
    metrics: &ScrollMetrics,
    thumb_min_length: u32,
    true_thumb_min_length: u32,
    minimum_range: u32,
) -> Option<ThumbGeometry> {
    if !needs_scrollbar(metrics, minimum_range) {
        return None;
    }

    let content = metrics.content_length as f64;
    let view = metrics.viewport_length as f64;

    let middle_screen_pos = metrics.offset as f64 + view / 2.0;
    let center_y = metrics.top_padding as i64 + (view * middle_screen_pos / content) as i64;

    let raw_length = view.min(view * view / content) as u32;

    Some(ThumbGeometry {
        center_y,
        draggable_height: raw_length.max(thumb_min_length),
        true_height: raw_length.max(true_thumb_min_length),
    })
}

/// The `[min, max]` vertical extent of the track.
pub fn vertical_range(metrics: &ScrollMetrics) -> (i64, i64) {
    let start = metrics.top_padding as i64;
    (start, start + metrics.viewport_length as i64)
}

/// Maps a touch position to a fraction of the track in `[0, 1]`.
///
/// An inverted range is normalized first; positions outside the track
/// clamp to the nearest end.
pub fn touch_fraction(y: f32, range_start: i64, range_end: i64) -> f32 {
    let (lo, hi) = if range_start > range_end {
        (range_end, range_start)
    } else {
        (range_start, range_end)
    };

    let lo = lo as f32;
    let hi = hi as f32;
    if y <= lo {
        return 0.0;
    }
    if y >= hi {
        return 1.0;
    }

    let extent = hi - lo;
    if extent <= 0.0 {
        return 0.0;
    }
    (y - lo) / extent
}

/// Maps a track fraction to a target item index, rounding half-up.
pub fn target_index(fraction: f32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let scaled = (item_count - 1) as f32 * fraction.clamp(0.0, 1.0);
    Some(((scaled + 0.5) as usize).min(item_count - 1))
}

/// Hit test for the thumb/track, mirrored under RTL layouts.
///
/// `ThumbOnly` additionally requires the touch to fall within the thumb's
/// vertical extent, padded by one track width on each side.
pub fn is_inside_thumb(
    metrics: &ScrollMetrics,
    thumb: &ThumbGeometry,
    track_width: u32,
    mode: InteractionMode,
    x: f32,
    y: f32,
) -> bool {
    let inside_band = if metrics.rtl {
        x <= metrics.left_padding as f32 + track_width as f32 / 2.0
    } else {
        x >= (metrics.left_padding + metrics.viewport_width) as f32 - track_width as f32
    };

    match mode {
        InteractionMode::Disabled => false,
        InteractionMode::AnyPointOnTrack => inside_band,
        InteractionMode::ThumbOnly => {
            let center = thumb.center_y as f32;
            let half = thumb.draggable_height as f32 / 2.0;
            let pad = track_width as f32;
            inside_band && y >= center - half - pad && y <= center + half + pad
        }
    }
}

/// Clamps the thumb's draw top so the thumb stays inside the track.
pub fn clamp_thumb_top(metrics: &ScrollMetrics, center_y: i64, height: u32) -> i64 {
    let (track_start, track_end) = vertical_range(metrics);
    let top = center_y - height as i64 / 2;
    let max_top = (track_end - height as i64).max(track_start);
    top.clamp(track_start, max_top)
}
