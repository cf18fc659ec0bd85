// src/face.rs

use glam::DVec3;

use crate::error::HullResult;
use crate::geometry::Plane;

/// One triangle of the hull. Corner order gives the outward normal.
///
/// Faces are never edited in place. An insertion that needs a different
/// triangle drops this one and builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    corners: [DVec3; 3],
    plane: Plane,
    center: DVec3,
}

impl Face {
    pub fn new(c0: DVec3, c1: DVec3, c2: DVec3, cross_epsilon: f64) -> HullResult<Self> {
        let plane = Plane::from_triangle(c0, c1, c2, cross_epsilon)?;
        Ok(Self {
            corners: [c0, c1, c2],
            plane,
            center: (c0 + c1 + c2) / 3.0,
        })
    }

    pub fn corners(&self) -> &[DVec3; 3] {
        &self.corners
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn normal(&self) -> DVec3 {
        self.plane.normal
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    #[inline(always)]
    pub fn visible_from(&self, point: DVec3) -> bool {
        self.plane.is_in_front(point)
    }

    /// `(c0,c1), (c1,c2), (c2,c0)`, in the face's winding.
    pub fn edges(&self) -> [Edge; 3] {
        let [c0, c1, c2] = self.corners;
        [Edge::new(c0, c1), Edge::new(c1, c2), Edge::new(c2, c0)]
    }
}

/// Directed side of a face, only alive while a hole is being traced.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub start: DVec3,
    pub end: DVec3,
}

impl Edge {
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    pub fn reversed(&self) -> Edge {
        Edge::new(self.end, self.start)
    }
}

// Only the reversed-direction match is tested. Hole tracing never produces two
// copies of the same directed edge, so `(a,b) == (a,b)` is deliberately false
// unless `a == b`.
impl PartialEq for Edge {
    fn eq(&self, other: &Edge) -> bool {
        self.start == other.end && self.end == other.start
    }
}
