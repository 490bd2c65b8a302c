use crate::Color;

/// Minimal immediate-mode draw surface the render pass targets.
///
/// Any 2D renderer (software canvas, GPU immediate layer, TUI cell
/// buffer) can implement this. Coordinates are in host pixels;
/// `translate` shifts the origin for subsequent calls and is always
/// paired with an inverse translation by the caller.
pub trait DrawSurface {
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color, alpha: f32);

    fn translate(&mut self, dx: f32, dy: f32);
}
