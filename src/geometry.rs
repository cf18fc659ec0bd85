// src/geometry.rs

use glam::DVec3;

use crate::error::{HullError, HullResult};

/// Oriented plane `normal . x + offset == 0` with a unit normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub offset: f64,
}

impl Plane {
    /// Plane through three ordered corners. The normal follows the right-hand
    /// rule over `p0 -> p1 -> p2`.
    ///
    /// Fails when the corners are collinear to within `cross_epsilon`.
    pub fn from_triangle(p0: DVec3, p1: DVec3, p2: DVec3, cross_epsilon: f64) -> HullResult<Self> {
        let cross = (p1 - p0).cross(p2 - p0);
        let cross_length = cross.length();
        if !(cross_length > cross_epsilon) {
            return Err(HullError::DegeneratePlane { cross_length });
        }
        let normal = cross / cross_length;
        Ok(Self {
            normal,
            offset: -normal.dot(p0),
        })
    }

    #[inline(always)]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Strictly in front. Points on the plane are not in front.
    #[inline(always)]
    pub fn is_in_front(&self, point: DVec3) -> bool {
        self.signed_distance(point) > 0.0
    }
}
