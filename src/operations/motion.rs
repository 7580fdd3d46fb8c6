// Motion Planner
// Ken Burns pan/zoom parameters for a single photo

use rand::Rng;
use std::f64::consts::TAU;

use crate::core::app_config::MotionRanges;

/// Pan and zoom applied to one photo across its display time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPlan {
    pub start_scale: f64,
    pub end_scale: f64,
    /// Total horizontal pan in image pixels
    pub total_dx: f64,
    /// Total vertical pan in image pixels
    pub total_dy: f64,
}

/// Transform at one instant of a plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub scale: f64,
    pub dx: f64,
    pub dy: f64,
}

impl MotionPlan {
    /// A plan that leaves the photo untouched
    pub fn still() -> Self {
        Self {
            start_scale: 1.0,
            end_scale: 1.0,
            total_dx: 0.0,
            total_dy: 0.0,
        }
    }

    /// Pick a random zoom direction, zoom amount and pan for an image of the given size
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, ranges: &MotionRanges) -> Self {
        let zoom = rng.random_range(ranges.zoom.clone());
        let (start_scale, end_scale) = if rng.random_bool(0.5) {
            (1.0, zoom)
        } else {
            (zoom, 1.0)
        };

        let pan_ratio = rng.random_range(ranges.pan_ratio.clone());
        let pan_angle = rng.random_range(0.0..TAU);

        Self {
            start_scale,
            end_scale,
            total_dx: width * pan_ratio * pan_angle.cos(),
            total_dy: height * pan_ratio * pan_angle.sin(),
        }
    }

    /// Whether the plan zooms in over time
    pub fn zooms_in(&self) -> bool {
        self.end_scale > self.start_scale
    }

    /// Interpolated transform at `progress`, clamped to [0, 1]
    pub fn at(&self, progress: f64) -> MotionFrame {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

        MotionFrame {
            scale: self.start_scale + (self.end_scale - self.start_scale) * progress,
            dx: self.total_dx * progress,
            dy: self.total_dy * progress,
        }
    }
}
