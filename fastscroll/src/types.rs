/// Per-event scroll metrics supplied by the host list.
///
/// The host recomputes this on every scroll/layout event; nothing here is
/// persisted. `viewport_length` and `viewport_width` are the content area
/// of the list (paddings already subtracted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Total scrollable content length in the scroll axis, in pixels.
    pub content_length: u64,
    /// Visible extent in the scroll axis, in pixels.
    pub viewport_length: u32,
    /// Visible extent in the cross axis, in pixels.
    pub viewport_width: u32,
    /// Current scroll offset, in pixels.
    pub offset: u64,
    /// Number of items in the list.
    pub item_count: usize,
    /// Padding before the content area in the scroll axis.
    pub top_padding: u32,
    /// Padding before the content area in the cross axis.
    pub left_padding: u32,
    /// Whether the host lays out right-to-left (mirrors the track edge).
    pub rtl: bool,
}

/// Derived thumb geometry, recomputed whenever the metrics change.
///
/// `draggable_height` is inflated to a configured minimum so the thumb
/// stays grabbable for very long content. `true_height` reflects the real
/// visible:total proportion and may be smaller than `draggable_height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    /// Thumb center in the scroll axis, relative to the host's origin.
    ///
    /// May exceed the track slightly; the draw position is clamped.
    pub center_y: i64,
    /// Thumb height inflated to the usability minimum.
    pub draggable_height: u32,
    /// Thumb height at the mathematically accurate proportion.
    pub true_height: u32,
}

/// A packed 0xAARRGGBB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// Visibility of the scroller as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityState {
    /// Thumb not showing.
    #[default]
    Hidden,
    /// Thumb visible and moving along with the scrollbar.
    Visible,
    /// Thumb being dragged by the user.
    Dragging,
}

/// Phase of the show/hide crossfade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationState {
    #[default]
    Out,
    FadingIn,
    In,
    FadingOut,
}

/// How touches on the track are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionMode {
    /// The fast scroller never handles touches.
    Disabled,
    /// Only touches inside the (padded) thumb hit area start a drag.
    #[default]
    ThumbOnly,
    /// Any touch inside the track's cross-axis band starts a drag.
    AnyPointOnTrack,
}

/// A touch event forwarded from the host, in host coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Cancel,
}

/// Drag lifecycle notifications for the host.
///
/// Hosts typically use these to suspend unrelated gestures (e.g.
/// pull-to-refresh) while a thumb drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragEvent {
    Started,
    Ended,
}

/// Result of feeding a touch event to the scroller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchOutcome {
    /// Whether the scroller consumed the event.
    pub handled: bool,
    /// Item index the host should scroll to (zero offset), if any.
    pub scroll_target: Option<usize>,
}

impl TouchOutcome {
    pub(crate) const IGNORED: TouchOutcome = TouchOutcome {
        handled: false,
        scroll_target: None,
    };
}
