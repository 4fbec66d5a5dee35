//! UI helper functions: animation math and layout.

use ratatui::prelude::*;

/// Ease-in/ease-out curve over `t` in 0..=1 (cosine smoothing, matching the
/// easeInOut feel of the breathing animation).
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (std::f32::consts::PI * t).cos()
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Center a fixed-height region vertically inside `area`.
pub fn vertical_center(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height,
    }
}
