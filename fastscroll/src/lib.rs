//! A headless fast-scroll and position-map engine for virtualized lists.
//!
//! For adapter-level utilities (host wiring, attach/detach lifecycle),
//! see the `fastscroll-adapter` crate.
//!
//! This crate focuses on the core algorithms behind a custom-drawn fast
//! scroller: mapping scroll metrics to thumb geometry, mapping touches
//! back to item indices, the visibility and fade state machines with
//! debounced auto-hide, and the "position map" overlay that marks
//! semantically important item ranges with colored bands on the track.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll metrics (content length, viewport, offset, item count) on
//!   every scroll/layout event
//! - touch events in host coordinates
//! - a per-frame tick with the current time in milliseconds
//! - a [`DrawSurface`] implementation for the render pass
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod draw;
mod options;
mod overlay;
mod scroller;
mod types;

pub mod geometry;


pub use animation::{AnimationEnd, ShowHideAnimator};
pub use draw::DrawSurface;
pub use options::{DragCallback, FastScrollerOptions, Palette};
pub use overlay::{PositionMap, PositionRanges, RangeCategory, RangeEntry};
pub use scroller::FastScroller;
pub use types::{
    AnimationState, Color, DragEvent, InteractionMode, ScrollMetrics, ThumbGeometry, TouchEvent,
    TouchOutcome, VisibilityState,
};
