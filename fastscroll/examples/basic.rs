use fastscroll::{Color, DrawSurface, FastScroller, FastScrollerOptions, ScrollMetrics};

struct PrintSurface;

impl DrawSurface for PrintSurface {
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, _color: Color, alpha: f32) {
        println!("  rect x={x} y={y} w={width} h={height} alpha={alpha:.2}");
    }

    fn translate(&mut self, _dx: f32, _dy: f32) {}
}

fn main() {
    let mut s = FastScroller::new(FastScrollerOptions::new(24, 100, 64));

    let metrics = ScrollMetrics {
        content_length: 500_000,
        viewport_length: 2_000,
        viewport_width: 1_080,
        item_count: 1_000,
        ..Default::default()
    };

    // A scroll event makes the scroller visible and starts the fade-in.
    s.update_scroll_metrics(metrics, 0);
    println!("after scroll: state visible={}", s.is_visible());

    // Drive frames; the scroller fades in, lingers, and auto-hides.
    for now_ms in (0..=2_000u64).step_by(100) {
        if s.tick(now_ms) {
            println!("t={now_ms} alpha={:.2} {:?}", s.alpha(), s.animation_state());
        }
    }

    println!("render at full alpha:");
    let mut s = FastScroller::new(FastScrollerOptions::new(24, 100, 64));
    s.update_scroll_metrics(metrics, 0);
    s.tick(300);
    s.draw(&mut PrintSurface);

    println!("hidden after auto-hide ran: {}", {
        s.tick(1_500);
        s.tick(1_800);
        s.is_hidden()
    });
}
