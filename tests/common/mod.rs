//! Common test helpers for progress-arc integration tests

#![allow(dead_code)]

use progress_arc::prelude::*;

// ============================================================================
// Standard parameter sets
// ============================================================================

/// Output width used to derive texel sizes
pub const DRAW_WIDTH: f32 = 300.0;

/// Texel size an indicator `DRAW_WIDTH` samples wide would use
pub fn texel() -> f32 {
    AA_SAMPLES / DRAW_WIDTH
}

/// Flat-capped ring, 20% thick
pub fn flat_ring(progress: f32) -> ProgressParams {
    ProgressParams::new(progress, 0.2, 0.0, texel())
}

/// Fully rounded ring, 20% thick
pub fn round_ring(progress: f32) -> ProgressParams {
    ProgressParams::new(progress, 0.2, 1.0, texel())
}

// ============================================================================
// Standard sample points
// ============================================================================

/// Pixel position at `radius` (1.0 = outer edge), `phi` radians clockwise
/// from 12 o'clock
pub fn on_screen(radius: f32, phi: f32) -> Vec2 {
    Vec2::new(0.5 + 0.5 * radius * phi.sin(), 0.5 - 0.5 * radius * phi.cos())
}

/// Middle of the 20% stroke
pub const MIDLINE: f32 = 0.9;

/// `count` angles spread around the full turn, offset so none lands exactly
/// on the vertical axis
pub fn ring_angles(count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| 0.15 + i as f32 * (TWO_PI / count as f32))
        .collect()
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}
