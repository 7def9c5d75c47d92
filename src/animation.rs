//! Progress animation
//!
//! Time-based tweening of the progress value. A [`ProgressTransform`] moves
//! from a start value to a target over a duration, shaped by an [`Easing`]
//! curve. Time is supplied by the caller; nothing here reads a clock.

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Linear
    #[default]
    None,
    /// Quadratic ease-in
    In,
    /// Quadratic ease-out
    Out,
    /// Quadratic ease-in-out
    InOut,
    /// Cubic ease-in
    InCubic,
    /// Cubic ease-out
    OutCubic,
    /// Cubic ease-in-out
    InOutCubic,
}

impl Easing {
    /// Map normalized time `t` to eased progress.
    ///
    /// `t` is clamped to `[0, 1]`; every curve maps 0 to 0 and 1 to 1.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::None => t,
            Easing::In => t * t,
            Easing::Out => t * (2.0 - t),
            Easing::InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * 0.5
                }
            }
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u * 0.5
                }
            }
        }
    }
}

/// A running tween of the progress value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressTransform {
    /// Value at `start_time`
    pub start_value: f64,
    /// Value reached at `start_time + duration`
    pub end_value: f64,
    /// Time the transform began, in seconds
    pub start_time: f64,
    /// Length in seconds
    pub duration: f64,
    /// Curve shaping the interpolation
    pub easing: Easing,
}

impl ProgressTransform {
    /// Create a transform.
    pub fn new(start_value: f64, end_value: f64, start_time: f64, duration: f64, easing: Easing) -> Self {
        ProgressTransform {
            start_value,
            end_value,
            start_time,
            duration,
            easing,
        }
    }

    /// Time at which the target is reached
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration.max(0.0)
    }

    /// True once `time` has reached the end of the transform
    pub fn is_complete(&self, time: f64) -> bool {
        time >= self.end_time()
    }

    /// Value at `time`. Before the start the start value is held; after the
    /// end the target is returned exactly.
    pub fn value_at(&self, time: f64) -> f64 {
        if self.duration <= 0.0 || self.is_complete(time) {
            return self.end_value;
        }
        let t = (time - self.start_time) / self.duration;
        let e = self.easing.apply(t);
        self.start_value + (self.end_value - self.start_value) * e
    }
}
