//! Sampling options

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFUSION, DENSE_THRESHOLD, LOG_THRESHOLD, MIN_FACE_STEPS, STEP_LENGTH, STEP_LIMIT,
};

/// Tuning for widget sampling density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
    /// Nominal spacing between widgets for medium-sized elements
    pub step_length: f64,
    /// Extent up to which edges get only their endpoints and faces the minimum grid
    pub dense_threshold: f64,
    /// Extent from which the step count grows logarithmically
    pub log_threshold: f64,
    /// Maximum number of steps in one direction
    pub max_steps: usize,
    /// Minimum number of steps per face direction
    pub min_face_steps: usize,
    /// Geometric tolerance for degeneracy and boundary checks
    pub tolerance: f64,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            step_length: STEP_LENGTH,
            dense_threshold: DENSE_THRESHOLD,
            log_threshold: LOG_THRESHOLD,
            max_steps: STEP_LIMIT,
            min_face_steps: MIN_FACE_STEPS,
            tolerance: CONFUSION,
        }
    }
}

impl SamplingOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nominal widget spacing
    pub fn with_step_length(mut self, step_length: f64) -> Self {
        self.step_length = step_length;
        self
    }

    /// Set the maximum step count per direction (at least 1)
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Set the geometric tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Number of steps along an edge of the given length. Never less than 1.
    ///
    /// Intermediate points start only once the length exceeds
    /// `dense_threshold`; an edge of exactly that length gets its endpoints.
    pub fn edge_steps(&self, length: f64) -> usize {
        if length.is_nan() || length <= self.dense_threshold {
            1
        } else if length < self.log_threshold {
            ((length / self.step_length).round() as usize).clamp(1, self.max_steps)
        } else {
            self.logarithmic_steps(length)
        }
    }

    /// Number of steps along one direction of a face. Never less than `min_face_steps`.
    pub fn face_steps(&self, extent: f64) -> usize {
        if extent.is_nan() || extent <= self.dense_threshold {
            self.min_face_steps.max(1)
        } else {
            self.edge_steps(extent).max(self.min_face_steps)
        }
    }

    /// Steps for long elements: spacing grows with `ln(length)^3`.
    ///
    /// Floored at the largest count the linear range can reach so the step
    /// count never drops when crossing `log_threshold`.
    fn logarithmic_steps(&self, length: f64) -> usize {
        let ln = length.ln();
        let raw = (length / (ln * ln * ln)).round() as usize;
        let linear_max = (self.log_threshold / self.step_length).round() as usize;
        raw.max(linear_max).clamp(1, self.max_steps)
    }
}
