// src/builder.rs

use std::marker::PhantomData;

use glam::DVec3;

use crate::config::HullConfig;
use crate::face::Face;
use crate::fingerprint::{Fingerprint, RotateXor};
use crate::hull::HullState;
use crate::vertex::HullVertex;

/// Read-only view of the current hull triangles.
#[derive(Clone, Copy, Debug)]
pub struct FaceView<'a> {
    faces: &'a [Face],
}

impl<'a> FaceView<'a> {
    pub fn faces(&self) -> &'a [Face] {
        self.faces
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Face> {
        self.faces.iter()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn normals(&self) -> impl Iterator<Item = DVec3> + 'a {
        self.faces.iter().map(Face::normal)
    }

    /// Every face corner, three per face. Shared corners repeat.
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + 'a {
        self.faces.iter().flat_map(|face| face.corners().iter().copied())
    }

    /// Mean of the face centres, or the origin for an empty hull.
    pub fn center(&self) -> DVec3 {
        if self.faces.is_empty() {
            return DVec3::ZERO;
        }
        self.faces.iter().map(Face::center).sum::<DVec3>() / self.faces.len() as f64
    }

    pub fn vertex_buffer(&self, scale: f64) -> Vec<HullVertex> {
        let mut buffer = Vec::with_capacity(self.faces.len() * 3);
        for face in self.faces {
            buffer.extend_from_slice(&HullVertex::from_face(face, scale));
        }
        buffer
    }
}

impl<'a> IntoIterator for FaceView<'a> {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

/// Point store plus the hull built over it.
///
/// Appending never touches the hull. `ensure_current` compares the store's
/// fingerprint against the one recorded with the hull; on a mismatch it
/// either inserts just the appended points or rebuilds from scratch.
#[derive(Debug)]
pub struct IncrementalHullBuilder<F: Fingerprint = RotateXor> {
    points: Vec<DVec3>,
    state: HullState,
    config: HullConfig,
    rebuilds: usize,
    extensions: usize,
    _fingerprint: PhantomData<F>,
}

impl IncrementalHullBuilder<RotateXor> {
    pub fn new() -> Self {
        Self::with_config(HullConfig::default())
    }

    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut builder = Self::new();
        builder.set_points(points);
        builder
    }
}

impl<F: Fingerprint> Default for IncrementalHullBuilder<F> {
    fn default() -> Self {
        Self::with_config(HullConfig::default())
    }
}

impl<F: Fingerprint> IncrementalHullBuilder<F> {
    pub fn with_config(config: HullConfig) -> Self {
        Self {
            points: Vec::new(),
            state: HullState::new(),
            config,
            rebuilds: 0,
            extensions: 0,
            _fingerprint: PhantomData,
        }
    }

    pub fn append(&mut self, point: DVec3) {
        self.points.push(point);
    }

    /// Appends a point in the z = 0 plane.
    pub fn append_xy(&mut self, x: f64, y: f64) {
        self.append(DVec3::new(x, y, 0.0));
    }

    /// Replaces the whole point store.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = DVec3>) {
        self.points.clear();
        self.points.extend(points);
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    pub fn state(&self) -> &HullState {
        &self.state
    }

    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    pub fn extension_count(&self) -> usize {
        self.extensions
    }

    pub fn needs_update(&self) -> bool {
        self.state.fingerprint() != Some(F::fingerprint(&self.points))
    }

    /// Brings the hull up to date with the point store and returns its faces.
    /// A degenerate store yields an empty view.
    pub fn ensure_current(&mut self) -> FaceView<'_> {
        if self.is_degenerate() {
            if self.state.fingerprint().is_some() {
                self.state = HullState::new();
            }
            return FaceView { faces: &[] };
        }

        let hulled = self.state.point_count();
        let current = match self.state.fingerprint() {
            Some(recorded) if hulled <= self.points.len() => {
                let prefix = F::fingerprint(&self.points[..hulled]);
                if prefix != recorded {
                    None
                } else if hulled == self.points.len() {
                    Some(true)
                } else {
                    Some(false)
                }
            }
            _ => None,
        };

        match current {
            Some(true) => {}
            Some(false) => self.extend(),
            None => self.rebuild(),
        }

        FaceView {
            faces: self.state.faces(),
        }
    }

    /// Whether `point` lies inside the current hull, within the configured
    /// containment slack.
    pub fn contains(&mut self, point: DVec3) -> bool {
        self.ensure_current();
        self.state.contains(point, &self.config)
    }

    pub fn center(&mut self) -> DVec3 {
        self.ensure_current().center()
    }

    pub fn hull_vertices(&mut self) -> Vec<DVec3> {
        self.ensure_current().vertices().collect()
    }

    pub fn vertex_buffer(&mut self, scale: f64) -> Vec<HullVertex> {
        self.ensure_current().vertex_buffer(scale)
    }

    fn extend(&mut self) {
        match self.state.extend::<F>(&self.points, &self.config) {
            Ok(added) => {
                self.extensions += 1;
                log::debug!("Extended hull with {} appended points", added);
            }
            Err(err) => {
                log::debug!("Hull extend not possible ({}), rebuilding", err);
                self.rebuild();
            }
        }
    }

    fn rebuild(&mut self) {
        match HullState::rebuild::<F>(&self.points, &self.config) {
            Ok(state) => {
                self.state = state;
                self.rebuilds += 1;
            }
            Err(err) => {
                log::debug!("Hull rebuild skipped: {}", err);
                self.state = HullState::new();
            }
        }
    }
}
