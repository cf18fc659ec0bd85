// src/config.rs

/// Number of entries in the perturbation table. Must be a power of two.
pub const PERTURBATION_TABLE_SIZE: usize = 1024;

/// Half-width of the perturbation range before scaling by point magnitude.
pub const PERTURBATION_AMPLITUDE: f64 = 1e-6;

/// Seed for the perturbation table. Changing it changes every rebuilt hull.
pub const PERTURBATION_SEED: u64 = 0x5eed_c0de;

/// Cross products at or below this length are treated as collinear corners.
pub const DEGENERATE_CROSS_EPSILON: f64 = 1e-12;

/// Relative slack callers should allow when checking that a point is inside
/// the hull. Covers the jitter that was applied to inserted points.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-5;

/// Tunable tolerances for a builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Minimum `|(p1 - p0) x (p2 - p0)|` for a face to get a plane.
    pub degenerate_cross_epsilon: f64,
    /// Relative tolerance for containment checks (scaled by point magnitude).
    pub containment_tolerance: f64,
    /// Whether inserted points are nudged by the perturbation table.
    pub perturb: bool,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            degenerate_cross_epsilon: DEGENERATE_CROSS_EPSILON,
            containment_tolerance: CONTAINMENT_TOLERANCE,
            perturb: true,
        }
    }
}

impl HullConfig {
    /// Rejects only exactly-collinear corners and skips the perturbation.
    /// Useful for inputs already in general position, where exact corner
    /// coordinates matter more than robustness.
    pub fn exact() -> Self {
        Self {
            degenerate_cross_epsilon: 0.0,
            containment_tolerance: 1e-9,
            perturb: false,
        }
    }

    /// Slack for checking `point` against a face plane.
    pub fn containment_slack(&self, point: glam::DVec3) -> f64 {
        self.containment_tolerance * point.length().max(1.0)
    }
}
