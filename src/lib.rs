//! # progress-arc
//!
//! Anti-aliased coverage for circular progress indicators, computed from a
//! signed distance field.
//!
//! ## Features
//!
//! - **Ring SDF**: Thick circular arc with flat terminations, no inverse trig
//! - **Coverage**: Per-sample alpha with resolution-aware anti-aliasing,
//!   rounded end-caps and sub-texel fading
//! - **Indicator**: Validated per-instance state with eased progress animation
//! - **Rasterization**: Parallel alpha-mask generation
//!
//! ## Example
//!
//! ```rust
//! use progress_arc::prelude::*;
//!
//! // Half-complete ring, 20% of the radius thick, rounded caps
//! let alpha = progress_alpha_at(Vec2::new(0.95, 0.5), 0.5, 0.2, 1.0, 0.005);
//! assert!(alpha > 0.95);
//!
//! // The hole in the middle is transparent
//! let alpha = progress_alpha_at(Vec2::splat(0.5), 0.5, 0.2, 1.0, 0.005);
//! assert_eq!(alpha, 0.0);
//! ```

#![warn(missing_docs)]

pub mod animation;
pub mod indicator;
pub mod math;
pub mod progress;
pub mod raster;
pub mod ring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::animation::{Easing, ProgressTransform};
    pub use crate::indicator::{CircularProgress, IndicatorConfig, IndicatorError, AA_SAMPLES};
    pub use crate::progress::{progress_alpha_at, ProgressParams, TWO_PI};
    pub use crate::raster::{rasterize, rasterize_indicator, CoverageMap, RasterConfig};
    pub use crate::ring::sdf_ring_arc;
    pub use glam::Vec2;
}

// Re-exports for convenience
pub use progress::{progress_alpha_at, ProgressParams};
pub use ring::sdf_ring_arc;
