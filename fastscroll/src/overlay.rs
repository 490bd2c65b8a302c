//! The position-map overlay: colored bands on the track marking
//! semantically important item ranges.

use alloc::vec::Vec;

use crate::animation::{AnimationEnd, ShowHideAnimator};
use crate::draw::DrawSurface;
use crate::options::Palette;
use crate::{Color, ScrollMetrics};

/// Semantic category of a range entry. Each category has a default color
/// in the [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeCategory {
    MyPosts,
    Replies,
    CrossThreadQuotes,
    FilterMatches,
    Deleted,
    Hot,
    ThirdEye,
}

impl RangeCategory {
    pub const ALL: [RangeCategory; 7] = [
        RangeCategory::MyPosts,
        RangeCategory::Replies,
        RangeCategory::CrossThreadQuotes,
        RangeCategory::FilterMatches,
        RangeCategory::Deleted,
        RangeCategory::Hot,
        RangeCategory::ThirdEye,
    ];
}

/// A contiguous span of item indices tagged for overlay coloring.
///
/// `end_index` is exclusive. The entry renders as one band anchored at
/// `start_index`; the band uses `color_override` when present, otherwise
/// the category's default color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeEntry {
    pub start_index: usize,
    pub end_index: usize,
    pub color_override: Option<Color>,
}

impl RangeEntry {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
            color_override: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color_override = Some(color);
        self
    }
}

/// An immutable grouped-by-category snapshot of range entries.
///
/// Owned by the external data layer and replaced wholesale whenever the
/// content changes; the overlay only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRanges {
    pub my_posts: Vec<RangeEntry>,
    pub replies: Vec<RangeEntry>,
    pub cross_thread_quotes: Vec<RangeEntry>,
    pub filter_matches: Vec<RangeEntry>,
    pub deleted: Vec<RangeEntry>,
    pub hot: Vec<RangeEntry>,
    pub third_eye: Vec<RangeEntry>,
}

impl PositionRanges {
    pub fn is_empty(&self) -> bool {
        RangeCategory::ALL
            .iter()
            .all(|&category| self.category(category).is_empty())
    }

    pub fn category(&self, category: RangeCategory) -> &[RangeEntry] {
        match category {
            RangeCategory::MyPosts => &self.my_posts,
            RangeCategory::Replies => &self.replies,
            RangeCategory::CrossThreadQuotes => &self.cross_thread_quotes,
            RangeCategory::FilterMatches => &self.filter_matches,
            RangeCategory::Deleted => &self.deleted,
            RangeCategory::Hot => &self.hot,
            RangeCategory::ThirdEye => &self.third_eye,
        }
    }
}

/// The overlay sub-renderer.
///
/// Holds the current snapshot plus its own show/hide animator, driven in
/// lockstep with the main scrollbar fade but independently hideable for
/// size-change edge cases.
#[derive(Clone, Debug, Default)]
pub struct PositionMap {
    ranges: PositionRanges,
    animator: ShowHideAnimator,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &PositionRanges {
        &self.ranges
    }

    /// Replaces the snapshot. Structurally equal snapshots are ignored so
    /// unchanged content does not trigger redraw work.
    ///
    /// Returns whether the snapshot actually changed.
    pub fn set_ranges(&mut self, ranges: PositionRanges) -> bool {
        if self.ranges == ranges {
            return false;
        }
        self.ranges = ranges;
        true
    }

    pub fn clear(&mut self) {
        self.ranges = PositionRanges::default();
        self.animator.reset();
    }

    pub fn alpha(&self) -> f32 {
        self.animator.value()
    }

    pub fn show(&mut self, now_ms: u64, duration_ms: u64) {
        self.animator.show(now_ms, duration_ms);
    }

    pub fn hide(&mut self, now_ms: u64, duration_ms: u64) {
        self.animator.hide(now_ms, duration_ms);
    }

    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<AnimationEnd> {
        self.animator.tick(now_ms)
    }

    /// Paints every band onto the track at `track_x`.
    ///
    /// Band math: with `per_item = content_length / item_count` and
    /// `unit = (viewport_length / content_length) * per_item`, each entry
    /// renders one band of height `max(unit, 1px)` anchored at
    /// `start_index * unit`, clamped to the track's content area.
    pub fn draw(&self, surface: &mut dyn DrawSurface, metrics: &ScrollMetrics, track_x: f32, track_width: u32, palette: &Palette) {
        if self.ranges.is_empty() {
            return;
        }
        if metrics.item_count == 0 || metrics.content_length == 0 {
            return;
        }

        let content = metrics.content_length as f32;
        let track_height = metrics.viewport_length as f32;
        let per_item = (metrics.content_length / metrics.item_count as u64) as f32;
        let unit = track_height / content * per_item;
        let half_unit = unit / 2.0;

        let alpha = self.animator.value();
        let origin_y = metrics.top_padding as f32 + half_unit;

        surface.translate(track_x, origin_y);
        for &category in RangeCategory::ALL.iter() {
            let default_color = palette.category_color(category);
            for entry in self.ranges.category(category) {
                let height = unit.max(1.0);
                let top = entry.start_index as f32 * unit - half_unit;

                // Keep the band inside [top_padding, top_padding + viewport].
                let min_top = -half_unit;
                let max_top = (track_height - half_unit - height).max(min_top);
                let top = top.clamp(min_top, max_top);

                let color = entry.color_override.unwrap_or(default_color);
                surface.draw_rect(0.0, top, track_width as f32, height, color, alpha);
            }
        }
        surface.translate(-track_x, -origin_y);
    }
}
