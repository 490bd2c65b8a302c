use fastscroll::{FastScrollerOptions, TouchEvent};
use fastscroll_adapter::{Controller, ScrollHost};

/// A stand-in for a real list widget: fixed-height rows, instant
/// scroll-to-index.
struct ListWidget {
    offset: u64,
    row_height: u64,
    rows: usize,
    extent: u32,
    cross: u32,
}

impl ScrollHost for ListWidget {
    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn scroll_range(&self) -> u64 {
        self.row_height * self.rows as u64
    }

    fn viewport_extent(&self) -> u32 {
        self.extent
    }

    fn viewport_cross(&self) -> u32 {
        self.cross
    }

    fn item_count(&self) -> usize {
        self.rows
    }

    fn scroll_to_index(&mut self, index: usize) {
        let max = self.scroll_range().saturating_sub(self.extent as u64);
        self.offset = (self.row_height * index as u64).min(max);
        println!("host: scroll_to_index({index}) -> offset={}", self.offset);
    }
}

fn main() {
    let widget = ListWidget {
        offset: 0,
        row_height: 120,
        rows: 500,
        extent: 2_000,
        cross: 1_080,
    };

    let mut c = Controller::attach(
        widget,
        FastScrollerOptions::new(24, 100, 64).with_on_drag(|event| println!("drag: {event:?}")),
    );
    c.on_layout(0);

    let thumb = c.scroller().thumb_geometry().unwrap();
    println!(
        "thumb: center_y={} draggable_height={}",
        thumb.center_y, thumb.draggable_height
    );

    // Grab the thumb and drag it halfway, then to the bottom.
    c.on_touch(
        TouchEvent::Down {
            x: 1_070.0,
            y: thumb.center_y as f32,
        },
        10,
    );
    c.on_touch(TouchEvent::Move { x: 1_070.0, y: 1_000.0 }, 26);
    c.on_touch(TouchEvent::Move { x: 1_070.0, y: 2_000.0 }, 42);
    c.on_touch(TouchEvent::Up, 58);

    // After the drag the scroller lingers, then fades out on its own.
    let mut now_ms = 58;
    while !c.scroller().is_hidden() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("auto-hidden at t={now_ms}");

    let widget = c.detach();
    println!("detached: final offset={}", widget.offset);
}
