//! Scalar helpers with shader built-in semantics
//!
//! Small, branch-light replacements for `smoothstep`, `clamp`, `sign`,
//! `mix`, `length` and the 2x2 rotation used by the ring SDF.

use glam::Vec2;

/// Hermite interpolation between `edge0` and `edge1`, clamped to [0, 1].
///
/// The edges may be given in descending order (`edge0 > edge1`), which
/// inverts the ramp: this is how distances are turned into coverage.
#[inline(always)]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Constrain `x` to `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics; with `lo > hi` the result is `hi`.
#[inline(always)]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// -1, 0 or 1 depending on the sign of `x`.
///
/// `f32::signum` maps `0.0` to `1.0`; this returns `0.0` for both zeros.
#[inline(always)]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Linear blend: `a` at `t = 0`, `b` at `t = 1`.
///
/// Not used by the coverage path; kept so the full set of shader built-ins
/// is available to callers compositing the returned alpha.
#[inline(always)]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Euclidean length of `(x, y)`.
#[inline(always)]
pub fn length(x: f32, y: f32) -> f32 {
    Vec2::new(x, y).length()
}

/// Rotate `v` by the angle whose cosine/sine are `cos_a`/`sin_a`.
///
/// Equivalent to the column-major matrix `mat2(c, s, -s, c) * v`.
#[inline(always)]
pub fn rotate(v: Vec2, cos_a: f32, sin_a: f32) -> Vec2 {
    Vec2::new(cos_a * v.x - sin_a * v.y, sin_a * v.x + cos_a * v.y)
}
