pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Round and saturate a floating channel value into `0..=255`.
pub(crate) fn f32_to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Normalize a corner pair so that `(x0, y0)` is the top-left corner.
pub(crate) fn sort_top_left(x0: i32, y0: i32, x1: i32, y1: i32) -> (i32, i32, i32, i32) {
    (x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

/// Round to the nearest integer, halves away from zero.
pub(crate) fn round_to_i32(v: f64) -> i32 {
    v.round() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
