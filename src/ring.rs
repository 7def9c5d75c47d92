//! Ring arc SDF
//!
//! Thick circular arc, symmetric about the vertical axis, with flat
//! terminations. The arc is centered on +Y and spans `±h` around it, where
//! `n = (cos h, sin h)`. Rounded end-caps are produced by the caller by
//! shrinking the arc and subtracting the rounding radius.
//!
//! Works without any inverse trigonometry: the angular limit falls out of
//! the sign of the rotated x coordinate.

use crate::math::{length, rotate, sign};
use glam::Vec2;

/// Signed distance from `p` to a thick ring arc
///
/// - `n`: unit direction `(cos h, sin h)` for the half-aperture `h`
/// - `radius`: distance from the origin to the middle of the stroke
/// - `thickness`: full stroke width
///
/// Negative inside the stroke band, positive outside.
#[inline(always)]
pub fn sdf_ring_arc(p: Vec2, n: Vec2, radius: f32, thickness: f32) -> f32 {
    // Fold onto the right half-plane, then bring the arc end onto the Y axis
    let p = rotate(Vec2::new(p.x.abs(), p.y), n.x, n.y);
    let half = thickness * 0.5;

    let d_band = (p.length() - radius).abs() - half;
    let d_cap = length(p.x, ((radius - p.y).abs() - half).max(0.0)) * sign(p.x);
    d_band.max(d_cap)
}
