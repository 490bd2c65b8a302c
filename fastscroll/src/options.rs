use alloc::sync::Arc;

use crate::overlay::RangeCategory;
use crate::{Color, DragEvent, InteractionMode};

/// A callback fired when a thumb drag starts or ends.
pub type DragCallback = Arc<dyn Fn(DragEvent) + Send + Sync>;

/// Theme colors for the track, thumbs, and overlay categories.
///
/// The scroller never resolves colors itself; hosts inject a palette and
/// re-inject it on theme changes via `FastScroller::set_palette`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub thumb: Color,
    pub thumb_dragging: Color,
    pub true_thumb: Color,
    pub track: Color,
    pub my_posts: Color,
    pub replies: Color,
    pub cross_thread_quotes: Color,
    pub filter_matches: Color,
    pub deleted: Color,
    pub hot: Color,
    pub third_eye: Color,
}

impl Palette {
    /// Default color for a range category, used when an entry carries no
    /// override.
    pub fn category_color(&self, category: RangeCategory) -> Color {
        match category {
            RangeCategory::MyPosts => self.my_posts,
            RangeCategory::Replies => self.replies,
            RangeCategory::CrossThreadQuotes => self.cross_thread_quotes,
            RangeCategory::FilterMatches => self.filter_matches,
            RangeCategory::Deleted => self.deleted,
            RangeCategory::Hot => self.hot,
            RangeCategory::ThirdEye => self.third_eye,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            thumb: Color::argb(0xff, 0x90, 0x90, 0x90),
            thumb_dragging: Color::argb(0xff, 0x40, 0x80, 0xf0),
            true_thumb: Color::argb(0xff, 0xc0, 0xc0, 0xc0),
            track: Color::argb(0xff, 0x30, 0x30, 0x30),
            my_posts: Color::argb(0xff, 0x61, 0x9b, 0x45),
            replies: Color::argb(0xff, 0xd0, 0x64, 0x2c),
            cross_thread_quotes: Color::argb(0xff, 0x32, 0x8d, 0xc6),
            filter_matches: Color::argb(0xff, 0xc6, 0x32, 0xc0),
            deleted: Color::argb(0xff, 0x8d, 0x35, 0x35),
            hot: Color::argb(0xff, 0xe8, 0xa3, 0x2c),
            third_eye: Color::argb(0xff, 0x7a, 0x5c, 0xc9),
        }
    }
}

/// Configuration for [`crate::FastScroller`].
///
/// Cheap to clone: the drag callback is stored in an `Arc`, so adapters
/// can tweak a field and swap the whole options value without
/// reallocating closures.
pub struct FastScrollerOptions {
    /// Cross-axis width of the track (and every thumb/band), in pixels.
    pub track_width: u32,
    /// Minimum viewport extent required before a scrollbar is shown at all.
    pub scrollbar_minimum_range: u32,
    /// Minimum height of the draggable thumb.
    pub thumb_min_length: u32,
    /// Minimum height of the true-proportion thumb (typically 1 px).
    pub true_thumb_min_length: u32,

    /// The true thumb is drawn only when
    /// `true_height * true_thumb_visibility_ratio < draggable_height`,
    /// otherwise the two thumbs would visually overlap.
    pub true_thumb_visibility_ratio: u32,

    pub show_duration_ms: u64,
    pub hide_duration_ms: u64,
    /// Auto-hide delay after the scroller became visible by scrolling.
    pub hide_delay_after_visible_ms: u64,
    /// Auto-hide delay after a drag just finished.
    pub hide_delay_after_dragging_ms: u64,

    pub interaction_mode: InteractionMode,
    pub palette: Palette,

    /// Alpha ceiling of the draggable thumb, out of 255.
    pub thumb_alpha: u8,
    /// Alpha ceiling of the true-proportion thumb, out of 255.
    pub true_thumb_alpha: u8,
    /// Alpha ceiling of the track while merely visible, out of 255.
    pub track_alpha_visible: u8,
    /// Alpha ceiling of the track while dragging, out of 255.
    pub track_alpha_dragging: u8,

    /// Optional listener notified when a thumb drag starts/ends.
    pub on_drag: Option<DragCallback>,
}

impl FastScrollerOptions {
    pub fn new(track_width: u32, scrollbar_minimum_range: u32, thumb_min_length: u32) -> Self {
        Self {
            track_width,
            scrollbar_minimum_range,
            thumb_min_length,
            true_thumb_min_length: 1,
            true_thumb_visibility_ratio: 4,
            show_duration_ms: 300,
            hide_duration_ms: 300,
            hide_delay_after_visible_ms: 1500,
            hide_delay_after_dragging_ms: 1200,
            interaction_mode: InteractionMode::ThumbOnly,
            palette: Palette::default(),
            thumb_alpha: 150,
            true_thumb_alpha: 200,
            track_alpha_visible: 80,
            track_alpha_dragging: 150,
            on_drag: None,
        }
    }

    pub fn with_interaction_mode(mut self, interaction_mode: InteractionMode) -> Self {
        self.interaction_mode = interaction_mode;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_true_thumb_min_length(mut self, true_thumb_min_length: u32) -> Self {
        self.true_thumb_min_length = true_thumb_min_length;
        self
    }

    pub fn with_true_thumb_visibility_ratio(mut self, ratio: u32) -> Self {
        self.true_thumb_visibility_ratio = ratio;
        self
    }

    pub fn with_show_duration_ms(mut self, show_duration_ms: u64) -> Self {
        self.show_duration_ms = show_duration_ms;
        self
    }

    pub fn with_hide_duration_ms(mut self, hide_duration_ms: u64) -> Self {
        self.hide_duration_ms = hide_duration_ms;
        self
    }

    pub fn with_hide_delays_ms(mut self, after_visible: u64, after_dragging: u64) -> Self {
        self.hide_delay_after_visible_ms = after_visible;
        self.hide_delay_after_dragging_ms = after_dragging;
        self
    }

    pub fn with_on_drag(mut self, on_drag: impl Fn(DragEvent) + Send + Sync + 'static) -> Self {
        self.on_drag = Some(Arc::new(on_drag));
        self
    }
}

impl Clone for FastScrollerOptions {
    fn clone(&self) -> Self {
        Self {
            track_width: self.track_width,
            scrollbar_minimum_range: self.scrollbar_minimum_range,
            thumb_min_length: self.thumb_min_length,
            true_thumb_min_length: self.true_thumb_min_length,
            true_thumb_visibility_ratio: self.true_thumb_visibility_ratio,
            show_duration_ms: self.show_duration_ms,
            hide_duration_ms: self.hide_duration_ms,
            hide_delay_after_visible_ms: self.hide_delay_after_visible_ms,
            hide_delay_after_dragging_ms: self.hide_delay_after_dragging_ms,
            interaction_mode: self.interaction_mode,
            palette: self.palette,
            thumb_alpha: self.thumb_alpha,
            true_thumb_alpha: self.true_thumb_alpha,
            track_alpha_visible: self.track_alpha_visible,
            track_alpha_dragging: self.track_alpha_dragging,
            on_drag: self.on_drag.clone(),
        }
    }
}

impl core::fmt::Debug for FastScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FastScrollerOptions")
            .field("track_width", &self.track_width)
            .field("scrollbar_minimum_range", &self.scrollbar_minimum_range)
            .field("thumb_min_length", &self.thumb_min_length)
            .field("true_thumb_min_length", &self.true_thumb_min_length)
            .field(
                "true_thumb_visibility_ratio",
                &self.true_thumb_visibility_ratio,
            )
            .field("show_duration_ms", &self.show_duration_ms)
            .field("hide_duration_ms", &self.hide_duration_ms)
            .field(
                "hide_delay_after_visible_ms",
                &self.hide_delay_after_visible_ms,
            )
            .field(
                "hide_delay_after_dragging_ms",
                &self.hide_delay_after_dragging_ms,
            )
            .field("interaction_mode", &self.interaction_mode)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}
