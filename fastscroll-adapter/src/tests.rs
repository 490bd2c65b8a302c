use crate::*;

use alloc::vec::Vec;
use fastscroll::{FastScrollerOptions, TouchEvent};

#[derive(Clone, Debug)]
struct FakeHost {
    offset: u64,
    range: u64,
    extent: u32,
    cross: u32,
    count: usize,
    top_padding: u32,
    bottom_padding: u32,
    left_padding: u32,
    scrolled_to: Vec<usize>,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            offset: 0,
            range: 10_000,
            extent: 1_000,
            cross: 500,
            count: 100,
            top_padding: 0,
            bottom_padding: 0,
            left_padding: 0,
            scrolled_to: Vec::new(),
        }
    }
}

impl ScrollHost for FakeHost {
    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn scroll_range(&self) -> u64 {
        self.range
    }

    fn viewport_extent(&self) -> u32 {
        self.extent
    }

    fn viewport_cross(&self) -> u32 {
        self.cross
    }

    fn item_count(&self) -> usize {
        self.count
    }

    fn top_padding(&self) -> u32 {
        self.top_padding
    }

    fn bottom_padding(&self) -> u32 {
        self.bottom_padding
    }

    fn left_padding(&self) -> u32 {
        self.left_padding
    }

    fn scroll_to_index(&mut self, index: usize) {
        self.scrolled_to.push(index);
    }
}

fn options() -> FastScrollerOptions {
    FastScrollerOptions::new(24, 100, 32)
}

#[test]
fn drag_to_track_bottom_scrolls_host_to_last_item() {
    let mut c = Controller::attach(FakeHost::new(), options());
    c.on_layout(0);

    let thumb = c.scroller().thumb_geometry().unwrap();
    assert!(c.on_touch(
        TouchEvent::Down {
            x: 490.0,
            y: thumb.center_y as f32,
        },
        10
    ));
    assert!(c.scroller().is_dragging());

    assert!(c.on_touch(TouchEvent::Move { x: 490.0, y: 2_000.0 }, 20));
    assert_eq!(c.host().scrolled_to.last(), Some(&99));

    assert!(c.on_touch(TouchEvent::Up, 30));
    assert!(c.scroller().is_visible());
}

#[test]
fn paddings_are_subtracted_from_host_extents() {
    let mut host = FakeHost::new();
    host.extent = 1_040;
    host.top_padding = 30;
    host.bottom_padding = 10;
    host.cross = 520;
    host.left_padding = 20;

    let mut c = Controller::attach(host, options());
    c.on_layout(0);

    // viewport_length = 1040 - 30 - 10 = 1000, so the thumb center is
    // top_padding + 1000 * 500 / 10000.
    let thumb = c.scroller().thumb_geometry().unwrap();
    assert_eq!(thumb.center_y, 30 + 50);
}

#[test]
fn unhandled_touch_does_not_scroll_the_host() {
    let mut c = Controller::attach(FakeHost::new(), options());
    c.on_layout(0);

    assert!(!c.on_touch(TouchEvent::Down { x: 100.0, y: 500.0 }, 10));
    assert!(c.host().scrolled_to.is_empty());
}

#[test]
fn auto_hide_runs_through_the_controller_tick() {
    let mut c = Controller::attach(FakeHost::new(), options());
    c.on_layout(0);
    assert!(c.scroller().is_visible());

    c.tick(300);
    c.tick(1_500);
    c.tick(1_800);
    assert!(c.scroller().is_hidden());
}

#[test]
fn detach_returns_the_host_and_reattach_starts_fresh() {
    let mut c = Controller::attach(FakeHost::new(), options());
    c.on_layout(0);
    let thumb = c.scroller().thumb_geometry().unwrap();
    c.on_touch(
        TouchEvent::Down {
            x: 490.0,
            y: thumb.center_y as f32,
        },
        10,
    );

    let host = c.detach();
    assert_eq!(host.scrolled_to.len(), 1);

    let c = Controller::attach(host, options());
    assert!(c.scroller().is_hidden());
    assert!(c.scroller().thumb_geometry().is_none());
}

#[test]
fn size_change_via_layout_hides_the_scroller() {
    let mut c = Controller::attach(FakeHost::new(), options());
    c.on_layout(0);
    c.tick(300);
    assert!(c.scroller().is_visible());

    c.host_mut().extent = 700;
    c.on_layout(100);
    assert!(c.scroller().is_hidden());
}
