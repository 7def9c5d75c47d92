//! Circular progress indicator state
//!
//! Holds the per-instance configuration (progress, thickness, end-cap
//! rounding), validates updates, drives progress animations, and snapshots
//! everything into [`ProgressParams`] for a draw of a given on-screen size.

use crate::animation::{Easing, ProgressTransform};
use crate::progress::ProgressParams;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Samples covered by the anti-alias band. A single sample looks too sharp.
pub const AA_SAMPLES: f32 = 1.5;

/// Indicator errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// NaN or infinite value passed to a setter
    #[error("{field} must be finite, but is {value}")]
    NonFinite {
        /// Name of the rejected field
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Draw width that cannot produce a texel size
    #[error("Invalid draw size: {0}")]
    InvalidDrawSize(f32),

    /// Malformed configuration document
    #[error("Config error: {0}")]
    Config(String),
}

/// Serializable indicator configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Initial progress
    pub progress: f64,
    /// Stroke width relative to the radius, `[0, 1]`
    pub thickness: f32,
    /// End-cap rounding, `[0, 1]`
    pub corner_radius: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            progress: 0.0,
            thickness: 1.0,
            corner_radius: 0.0,
        }
    }
}

impl IndicatorConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, IndicatorError> {
        serde_json::from_str(json).map_err(|e| IndicatorError::Config(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, IndicatorError> {
        serde_json::to_string_pretty(self).map_err(|e| IndicatorError::Config(e.to_string()))
    }
}

/// A circular progress indicator
#[derive(Debug, Clone, PartialEq)]
pub struct CircularProgress {
    progress: f64,
    thickness: f32,
    corner_radius: f32,
    clock: f64,
    transform: Option<ProgressTransform>,
}

impl Default for CircularProgress {
    fn default() -> Self {
        CircularProgress {
            progress: 0.0,
            thickness: 1.0,
            corner_radius: 0.0,
            clock: 0.0,
            transform: None,
        }
    }
}

impl CircularProgress {
    /// Create an indicator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an indicator from a configuration, validating every field.
    pub fn from_config(config: &IndicatorConfig) -> Result<Self, IndicatorError> {
        let mut indicator = Self::default();
        indicator.set_progress(config.progress)?;
        indicator.set_thickness(config.thickness)?;
        indicator.set_corner_radius(config.corner_radius)?;
        Ok(indicator)
    }

    /// Current configuration.
    pub fn config(&self) -> IndicatorConfig {
        IndicatorConfig {
            progress: self.progress,
            thickness: self.thickness,
            corner_radius: self.corner_radius,
        }
    }

    /// Completed fraction of a turn
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Stroke width relative to the radius
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// End-cap rounding fraction
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Set progress. Stored as given; values outside `[0, 1]` extrapolate.
    pub fn set_progress(&mut self, value: f64) -> Result<(), IndicatorError> {
        if !value.is_finite() {
            return Err(IndicatorError::NonFinite {
                field: "progress",
                value,
            });
        }
        if self.progress != value {
            trace!("progress {} -> {}", self.progress, value);
            self.progress = value;
        }
        Ok(())
    }

    /// Set stroke width, clamped to `[0, 1]`.
    pub fn set_thickness(&mut self, value: f32) -> Result<(), IndicatorError> {
        self.thickness = clamp_unit("thickness", value)?;
        Ok(())
    }

    /// Set end-cap rounding, clamped to `[0, 1]`.
    pub fn set_corner_radius(&mut self, value: f32) -> Result<(), IndicatorError> {
        self.corner_radius = clamp_unit("corner_radius", value)?;
        Ok(())
    }

    /// Animate progress from its current value to `target`.
    ///
    /// Starts at the current clock time and replaces any running animation.
    /// A non-positive duration applies the target immediately.
    pub fn progress_to(&mut self, target: f64, duration: f64, easing: Easing) -> Result<(), IndicatorError> {
        if !target.is_finite() {
            return Err(IndicatorError::NonFinite {
                field: "progress",
                value: target,
            });
        }
        if !duration.is_finite() {
            return Err(IndicatorError::NonFinite {
                field: "duration",
                value: duration,
            });
        }

        debug!(
            "progress_to {} -> {} over {}s ({:?})",
            self.progress, target, duration, easing
        );

        if duration <= 0.0 {
            self.transform = None;
            return self.set_progress(target);
        }

        self.transform = Some(ProgressTransform::new(
            self.progress,
            target,
            self.clock,
            duration,
            easing,
        ));
        Ok(())
    }

    /// True while a progress animation is running
    pub fn is_animating(&self) -> bool {
        self.transform.is_some()
    }

    /// Current clock time in seconds
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Advance the clock to `time` and apply the running animation.
    ///
    /// A non-finite `time` is rejected and leaves the indicator untouched.
    pub fn update(&mut self, time: f64) -> Result<(), IndicatorError> {
        if !time.is_finite() {
            return Err(IndicatorError::NonFinite {
                field: "time",
                value: time,
            });
        }

        self.clock = time;
        let Some(transform) = self.transform else {
            return Ok(());
        };

        self.progress = transform.value_at(time);
        if transform.is_complete(time) {
            debug!("progress animation finished at {}", self.progress);
            self.transform = None;
        }
        Ok(())
    }

    /// Snapshot draw parameters for an indicator `draw_width` output samples wide.
    ///
    /// Returns `Ok(None)` when nothing would be visible: zero thickness, or
    /// flat caps with zero progress. Progress too large for `f32` is an error.
    pub fn draw_state(&self, draw_width: f32) -> Result<Option<ProgressParams>, IndicatorError> {
        if !(draw_width.is_finite() && draw_width > 0.0) {
            return Err(IndicatorError::InvalidDrawSize(draw_width));
        }

        let progress = self.progress.abs() as f32;
        if !progress.is_finite() {
            return Err(IndicatorError::NonFinite {
                field: "progress",
                value: self.progress,
            });
        }
        if self.thickness == 0.0 || (self.corner_radius == 0.0 && progress == 0.0) {
            trace!("indicator invisible, skipping draw");
            return Ok(None);
        }

        Ok(Some(ProgressParams {
            progress,
            thickness: self.thickness,
            corner_radius: self.corner_radius,
            texel_size: AA_SAMPLES / draw_width,
        }))
    }
}

fn clamp_unit(field: &'static str, value: f32) -> Result<f32, IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::NonFinite {
            field,
            value: value as f64,
        });
    }
    Ok(value.clamp(0.0, 1.0))
}
