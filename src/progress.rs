//! Progress arc coverage
//!
//! Turns indicator parameters and a normalized sample position into an
//! anti-aliased alpha value. Called once per output sample; pure, branch-light
//! and allocation-free so it can be fanned out across threads freely.
//!
//! # Coordinate conventions
//! - `pixel_pos` is in `[0, 1]²`, origin top-left, y down.
//! - The arc starts at 12 o'clock and grows clockwise with `progress`.
//! - `thickness` is relative to the indicator radius (1.0 fills the disc).
//! - `corner_radius` is a fraction of half the thickness (0 = flat, 1 = round).

use crate::math::{clamp, rotate, smoothstep};
use crate::ring::sdf_ring_arc;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Full turn in radians, as used by the sweep angle.
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// Alpha of a circular progress arc at `pixel_pos`
///
/// # Arguments
/// * `pixel_pos` - Sample position in `[0, 1]²` (y down)
/// * `progress` - Completed fraction of a turn; not clamped
/// * `thickness` - Stroke width relative to the radius; must be > 0
/// * `corner_radius` - End-cap rounding as a fraction of half the thickness
/// * `texel_size` - One output sample in normalized units; must be > 0
///
/// # Returns
/// Coverage in `[0, 1]`, already faded for strokes thinner than two texels.
#[inline]
pub fn progress_alpha_at(
    pixel_pos: Vec2,
    progress: f32,
    thickness: f32,
    corner_radius: f32,
    texel_size: f32,
) -> f32 {
    let min_thickness = texel_size * 2.0;

    // Fade sub-texel strokes instead of drawing them too thick at full opacity
    let sub_aa_multiplier = clamp(thickness / min_thickness, 0.1, 1.0);

    let thickness = thickness.max(min_thickness);
    let corner_radius = corner_radius * thickness * 0.5;

    let outer_radius = 1.0 - corner_radius;
    let inner_radius = 1.0 - thickness + corner_radius;

    let half_angle = progress * TWO_PI * 0.5;
    let (sin_h, cos_h) = half_angle.sin_cos();
    let cs = Vec2::new(cos_h, sin_h);

    // [0,1]² y-down -> [-1,1]² y-up
    let p = (pixel_pos - Vec2::splat(0.5)) * Vec2::new(2.0, -2.0);
    let p = rotate(p, cs.x, cs.y);

    let distance = sdf_ring_arc(
        p,
        cs,
        (outer_radius + inner_radius) * 0.5 - texel_size,
        outer_radius - inner_radius,
    ) - corner_radius
        + texel_size;

    smoothstep(texel_size, 0.0, distance * 0.5) * sub_aa_multiplier
}

/// Per-draw parameters of a progress arc
///
/// Mirrors the argument list of [`progress_alpha_at`] minus the sample
/// position, so one value can be shared by every sample of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressParams {
    /// Completed fraction of a turn.
    pub progress: f32,
    /// Stroke width relative to the radius.
    pub thickness: f32,
    /// End-cap rounding, fraction of half the thickness.
    pub corner_radius: f32,
    /// One output sample in normalized units.
    pub texel_size: f32,
}

impl Default for ProgressParams {
    fn default() -> Self {
        Self {
            progress: 0.0,
            thickness: 1.0,
            corner_radius: 0.0,
            texel_size: 1.5 / 256.0,
        }
    }
}

impl ProgressParams {
    /// Create parameters for one draw.
    pub fn new(progress: f32, thickness: f32, corner_radius: f32, texel_size: f32) -> Self {
        Self {
            progress,
            thickness,
            corner_radius,
            texel_size,
        }
    }

    /// Coverage at a normalized sample position.
    #[inline(always)]
    pub fn alpha_at(&self, pixel_pos: Vec2) -> f32 {
        progress_alpha_at(
            pixel_pos,
            self.progress,
            self.thickness,
            self.corner_radius,
            self.texel_size,
        )
    }
}
