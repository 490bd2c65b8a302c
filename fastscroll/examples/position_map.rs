use fastscroll::{
    Color, DrawSurface, FastScroller, FastScrollerOptions, PositionRanges, RangeEntry,
    ScrollMetrics,
};

struct PrintSurface;

impl DrawSurface for PrintSurface {
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color, alpha: f32) {
        println!(
            "  rect x={x:.1} y={y:.1} w={width:.1} h={height:.1} color={:#010x} alpha={alpha:.2}",
            color.0
        );
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        println!("  translate dx={dx:.1} dy={dy:.1}");
    }
}

fn main() {
    let mut s = FastScroller::new(FastScrollerOptions::new(24, 100, 64));

    s.update_scroll_metrics(
        ScrollMetrics {
            content_length: 500_000,
            viewport_length: 2_000,
            viewport_width: 1_080,
            item_count: 1_000,
            ..Default::default()
        },
        0,
    );

    // Mark a few semantically interesting ranges; the overlay paints one
    // colored band per entry on the track.
    s.set_range_entries(PositionRanges {
        my_posts: vec![RangeEntry::new(12, 13), RangeEntry::new(740, 741)],
        replies: vec![RangeEntry::new(341, 352)],
        hot: vec![RangeEntry::new(990, 1_000).with_color(Color::argb(0xff, 0xff, 0x00, 0x00))],
        ..Default::default()
    });

    s.tick(300); // fade-in finished
    s.draw(&mut PrintSurface);
}
