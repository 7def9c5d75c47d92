//! Integration tests: Coverage properties
//!
//! Verifies mirror symmetry, boundary behavior, radial falloff, sweep
//! extremes and the sub-texel thickness floor.

mod common;

use common::*;
use progress_arc::prelude::*;

// ============================================================================
// Ring SDF
// ============================================================================

#[test]
fn ring_arc_mirror_invariant() {
    for i in 0..8 {
        let h = 0.2 + i as f32 * 0.4;
        let n = Vec2::new(h.cos(), h.sin());
        for j in 0..16 {
            let a = j as f32 * 0.41;
            let p = Vec2::new(a.sin() * (0.3 + 0.05 * j as f32), a.cos() * 0.8);
            let d1 = sdf_ring_arc(p, n, 0.75, 0.15);
            let d2 = sdf_ring_arc(Vec2::new(-p.x, p.y), n, 0.75, 0.15);
            assert_eq!(d1, d2, "Mirror mismatch at {:?} (h={})", p, h);
        }
    }
}

#[test]
fn ring_arc_band_edges_cross_zero() {
    let h = 1.2f32;
    let n = Vec2::new(h.cos(), h.sin());
    for &phi in &[-0.9f32, -0.3, 0.4, 1.0] {
        let dir = Vec2::new(phi.sin(), phi.cos());
        let mid = sdf_ring_arc(dir * 0.8, n, 0.8, 0.1);
        let outer = sdf_ring_arc(dir * 0.85, n, 0.8, 0.1);
        let inner = sdf_ring_arc(dir * 0.75, n, 0.8, 0.1);
        assert_close(mid, -0.05, 1e-5, "midline");
        assert_close(outer, 0.0, 1e-5, "outer edge");
        assert_close(inner, 0.0, 1e-5, "inner edge");
    }
}

#[test]
fn ring_arc_distance_grows_outward() {
    let h = 1.0f32;
    let n = Vec2::new(h.cos(), h.sin());
    let dir = Vec2::new(0.5f32.sin(), 0.5f32.cos());
    let mut prev = sdf_ring_arc(dir * 0.85, n, 0.8, 0.1);
    for i in 1..20 {
        let d = sdf_ring_arc(dir * (0.85 + i as f32 * 0.05), n, 0.8, 0.1);
        assert!(d > prev, "Distance should grow outward: {} <= {}", d, prev);
        prev = d;
    }
}

// ============================================================================
// Coverage
// ============================================================================

#[test]
fn center_is_transparent() {
    let a = progress_alpha_at(Vec2::splat(0.5), 0.42, 0.1, 0.0, 0.01);
    assert!(a.abs() < 1e-6, "Center should be transparent, got {}", a);
}

#[test]
fn half_progress_sweep_midpoint_is_opaque() {
    let a = progress_alpha_at(Vec2::new(0.95, 0.5), 0.5, 0.2, 0.0, 0.005);
    assert_close(a, 1.0, 0.05, "3 o'clock at half progress");
}

#[test]
fn radial_falloff_is_monotonic() {
    let params = flat_ring(1.0);
    let phi = 2.0;

    let inside = params.alpha_at(on_screen(MIDLINE, phi));
    assert!(inside > 0.99, "Midline should be opaque, got {}", inside);

    let mut prev = inside;
    for i in 1..=30 {
        let a = params.alpha_at(on_screen(MIDLINE + i as f32 * 0.005, phi));
        assert!(a <= prev + 1e-6, "Alpha should not increase outward: {} > {}", a, prev);
        prev = a;
    }
    assert!(prev < 1e-6, "Far outside should be transparent, got {}", prev);
}

#[test]
fn anti_alias_band_is_partial() {
    // Somewhere between fully inside and fully outside there is a soft edge
    let params = flat_ring(1.0);
    let partial = (0..200)
        .map(|i| params.alpha_at(on_screen(0.95 + i as f32 * 0.0005, 0.7)))
        .any(|a| a > 0.05 && a < 0.95);
    assert!(partial, "Edge should have partially covered samples");
}

#[test]
fn zero_progress_is_invisible_with_flat_caps() {
    let params = flat_ring(0.0);
    for phi in ring_angles(24) {
        let a = params.alpha_at(on_screen(MIDLINE, phi));
        assert!(a < 1e-6, "Zero progress should draw nothing at phi={}, got {}", phi, a);
    }
}

#[test]
fn full_progress_covers_whole_ring() {
    for params in [flat_ring(1.0), round_ring(1.0)] {
        for phi in ring_angles(24) {
            let a = params.alpha_at(on_screen(MIDLINE, phi));
            assert!(a > 0.99, "Full ring should be opaque at phi={}, got {}", phi, a);
        }
    }
}

#[test]
fn full_progress_flat_caps_meet_at_twelve() {
    // The two flat ends touch on the 12 o'clock line, leaving a soft seam
    let params = flat_ring(1.0);
    let top = 0.5 - 0.5 * MIDLINE;
    for &dx in &[-0.001f32, 0.001] {
        let a = params.alpha_at(Vec2::new(0.5 + dx, top));
        assert!(a > 0.7 && a < 0.85, "Seam should be partially covered, got {}", a);
    }
    for &dx in &[-0.003f32, 0.003] {
        let a = params.alpha_at(Vec2::new(0.5 + dx, top));
        assert!(a > 0.99, "Stroke should be opaque beside the seam, got {}", a);
    }
    // Round caps overlap there instead
    let a = round_ring(1.0).alpha_at(Vec2::new(0.501, top));
    assert!(a > 0.99, "Round caps should close the seam, got {}", a);
}

#[test]
fn round_caps_extend_past_flat_caps() {
    // Just before 12 o'clock, outside the quarter sweep
    let p = on_screen(MIDLINE, -0.05);
    let flat = flat_ring(0.25).alpha_at(p);
    let round = round_ring(0.25).alpha_at(p);
    assert!(flat < 0.01, "Flat cap should not reach back, got {}", flat);
    assert!(round > 0.99, "Round cap should cover the start, got {}", round);
}

#[test]
fn thickness_floor_keeps_geometry_and_fades() {
    let texel = 0.005;
    let floor = 2.0 * texel;
    for &thin in &[0.002f32, 0.005, 0.008] {
        let m = thin / floor;
        for i in 0..40 {
            let p = Vec2::new(0.97 + i as f32 * 0.001, 0.5);
            let floored = progress_alpha_at(p, 1.0, floor, 0.0, texel);
            let faded = progress_alpha_at(p, 1.0, thin, 0.0, texel);
            assert_close(faded, floored * m, 1e-5, "sub-texel stroke");
        }
    }
}

#[test]
fn thickness_above_floor_is_not_faded() {
    let texel = 0.005;
    let peak = (0..100)
        .map(|i| progress_alpha_at(Vec2::new(0.95 + i as f32 * 0.0005, 0.5), 1.0, 0.012, 0.0, texel))
        .fold(0.0f32, f32::max);
    assert_close(peak, 1.0, 1e-3, "stroke wider than two texels");
}

#[test]
fn progress_beyond_one_extrapolates() {
    // 1.25 turns: half-angle wraps past pi, nothing panics and output stays in range
    for phi in ring_angles(12) {
        let a = flat_ring(1.25).alpha_at(on_screen(MIDLINE, phi));
        assert!((0.0..=1.0).contains(&a), "Alpha out of range: {}", a);
    }
}
