use glam::Vec2;

// Pure pointer-to-box mapping shared by the tilt pipeline and its tests.

/// Style values are emitted with three decimals; rounding here keeps the
/// per-frame output stable instead of trailing float noise.
#[inline]
pub fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

/// Linear remap of `v` from one range onto another.
#[inline]
pub fn remap(v: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    round3(to_min + ((to_max - to_min) * (v - from_min)) / (from_max - from_min))
}

#[inline]
pub fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// Pointer position expressed relative to an element's box.
///
/// `percent_*` is in `[0, 100]`, `centered_*` in `[-50, 50]` with `(0, 0)` at
/// the box center. Events captured slightly outside the box (fast pointer
/// exits) are clamped before normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPosition {
    pub percent_x: f32,
    pub percent_y: f32,
    pub centered_x: f32,
    pub centered_y: f32,
}

#[inline]
pub fn normalize_in_box(offset: Vec2, size: Vec2) -> NormalizedPosition {
    if size.x <= 0.0 || size.y <= 0.0 {
        // degenerate box (display:none, mid-layout); treat as dead center
        return NormalizedPosition {
            percent_x: 50.0,
            percent_y: 50.0,
            centered_x: 0.0,
            centered_y: 0.0,
        };
    }
    let percent_x = (100.0 * offset.x / size.x).clamp(0.0, 100.0);
    let percent_y = (100.0 * offset.y / size.y).clamp(0.0, 100.0);
    NormalizedPosition {
        percent_x,
        percent_y,
        centered_x: percent_x - 50.0,
        centered_y: percent_y - 50.0,
    }
}

#[inline]
pub fn box_center(size: Vec2) -> Vec2 {
    size * 0.5
}
