//! Coverage rasterization
//!
//! Evaluates the progress arc at every pixel center of a grid, producing an
//! alpha mask the caller can composite however it likes. Rows are evaluated
//! in parallel with rayon.

use crate::indicator::{CircularProgress, IndicatorError};
use crate::progress::ProgressParams;
use glam::Vec2;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// ── Raster Config ────────────────────────────────────────────

/// Output grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
        }
    }
}

impl RasterConfig {
    /// Square grid.
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

// ── Coverage Map ─────────────────────────────────────────────

/// Row-major alpha values of a rasterized indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMap {
    /// Alpha values (width * height).
    pub pixels: Vec<f32>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CoverageMap {
    /// Fully transparent map.
    pub fn empty(config: &RasterConfig) -> Self {
        Self {
            pixels: vec![0.0; config.width as usize * config.height as usize],
            width: config.width,
            height: config.height,
        }
    }

    /// Alpha at pixel coordinates, 0 outside the grid.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize]
        } else {
            0.0
        }
    }

    /// Count pixels with alpha above `threshold`.
    pub fn covered_pixel_count(&self, threshold: f32) -> usize {
        self.pixels.iter().filter(|&&a| a > threshold).count()
    }

    /// Largest alpha in the map.
    pub fn max_alpha(&self) -> f32 {
        self.pixels.iter().copied().fold(0.0, f32::max)
    }

    /// Quantize to 8-bit gray, clamping to `[0, 1]` first.
    pub fn to_gray8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&a| (a.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
            .collect()
    }
}

// ── Rasterization ────────────────────────────────────────────

/// Evaluate `params` at every pixel center of the grid.
pub fn rasterize(params: &ProgressParams, config: &RasterConfig) -> CoverageMap {
    let width = config.width as usize;
    let height = config.height as usize;
    let mut map = CoverageMap::empty(config);
    if width == 0 || height == 0 {
        return map;
    }

    debug!(
        "rasterizing {}x{} progress={} thickness={} corner_radius={} texel={}",
        width, height, params.progress, params.thickness, params.corner_radius, params.texel_size
    );

    let inv = Vec2::new(1.0 / width as f32, 1.0 / height as f32);

    map.pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f32 + 0.5) * inv.y;
            for (x, alpha) in row.iter_mut().enumerate() {
                let u = (x as f32 + 0.5) * inv.x;
                *alpha = params.alpha_at(Vec2::new(u, v));
            }
        });

    map
}

/// Rasterize an indicator at the grid's width.
///
/// Returns a transparent map when the indicator has nothing to draw.
pub fn rasterize_indicator(
    indicator: &CircularProgress,
    config: &RasterConfig,
) -> Result<CoverageMap, IndicatorError> {
    match indicator.draw_state(config.width as f32)? {
        Some(params) => Ok(rasterize(&params, config)),
        None => Ok(CoverageMap::empty(config)),
    }
}

// ── Tests ────────────────────────────────────────────────────
