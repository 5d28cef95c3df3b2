//! Global constants for fem-constraint

/// Distance below which two points are considered coincident
pub const CONFUSION: f64 = 1e-7;

/// Nominal distance between two widgets along an edge or face
pub const STEP_LENGTH: f64 = 10.0;

/// Length up to which edges get only their two endpoints
pub const DENSE_THRESHOLD: f64 = 20.0;

/// Length from which the step count grows logarithmically
pub const LOG_THRESHOLD: f64 = 30.0;

/// Upper bound for the step count in one direction
pub const STEP_LIMIT: usize = 50;

/// Steps per direction for small faces (three widgets along each side)
pub const MIN_FACE_STEPS: usize = 2;

/// Number of outline points used for circular planar faces
pub const CIRCLE_SEGMENTS: u32 = 32;
