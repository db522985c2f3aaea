mod timing;

pub use timing::Easing;

/// Linear interpolation between `start` and `end`.
///
/// Callers guarantee `t` is in `[0, 1]`; no clamping is applied here so the
/// endpoints are reproduced exactly at `t = 0` and `t = 1`.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
