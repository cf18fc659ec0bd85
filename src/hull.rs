// src/hull.rs

use std::collections::HashMap;

use glam::DVec3;

use crate::config::HullConfig;
use crate::error::{HullError, HullResult};
use crate::face::{Edge, Face};
use crate::fingerprint::Fingerprint;
use crate::perturbation::PerturbationTable;

/// What a single-point insertion did to the face set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The point is inside (or on) the hull. Nothing changed.
    Interior,
    /// Visible faces were replaced by a fan around the point.
    Extended { removed: usize, added: usize },
    /// The visible region did not have a closed boundary. Nothing changed.
    Rejected,
}

/// Current triangulated hull plus the fingerprint of the points it was
/// built from.
///
/// Faces live in a flat `Vec` and are removed by swap-remove, so their
/// order carries no meaning.
#[derive(Clone, Debug, Default)]
pub struct HullState {
    faces: Vec<Face>,
    fingerprint: Option<u64>,
    point_count: usize,
    rejected_insertions: usize,
}

impl HullState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two back-to-back faces over the first three points: a zero-volume hull
    /// that every later point is in front of at least one side of.
    pub fn bootstrap(p0: DVec3, p1: DVec3, p2: DVec3, config: &HullConfig) -> Self {
        let mut state = Self::new();
        for corners in [[p0, p1, p2], [p0, p2, p1]] {
            match Face::new(corners[0], corners[1], corners[2], config.degenerate_cross_epsilon) {
                Ok(face) => state.faces.push(face),
                Err(err) => log::warn!("Skipping seed face {:?}: {}", corners, err),
            }
        }
        state
    }

    /// Builds the hull of `points` from scratch and records their fingerprint.
    ///
    /// The seed triangle is `points[0]` plus the first pair that spans a plane
    /// with it. Every other point is then inserted in store order.
    pub fn rebuild<F: Fingerprint>(points: &[DVec3], config: &HullConfig) -> HullResult<Self> {
        if points.len() < 3 {
            return Err(HullError::InsufficientPoints { count: points.len() });
        }

        let mut state = match seed_indices(points, config.degenerate_cross_epsilon) {
            Some((j, k)) => {
                let mut state = Self::bootstrap(points[0], points[j], points[k], config);
                for (i, &point) in points.iter().enumerate().skip(1) {
                    if i != j && i != k {
                        state.add_point(i, point, config);
                    }
                }
                state
            }
            None => {
                log::warn!("All {} hull points are collinear; hull left empty", points.len());
                Self::new()
            }
        };
        state.fingerprint = Some(F::fingerprint(points));
        state.point_count = points.len();

        log::debug!(
            "Rebuilt hull: {} points, {} faces, {} rejected insertions",
            points.len(),
            state.faces.len(),
            state.rejected_insertions
        );
        Ok(state)
    }

    /// Inserts the points appended since the last rebuild or extend, i.e.
    /// `points[self.point_count()..]`, and returns how many there were.
    ///
    /// The caller must make sure `points[..self.point_count()]` is the same
    /// point set the hull was built from. The result is identical to a
    /// rebuild over all of `points`.
    pub fn extend<F: Fingerprint>(&mut self, points: &[DVec3], config: &HullConfig) -> HullResult<usize> {
        let (start, acc) = match self.fingerprint {
            Some(acc) if self.point_count >= 3 && self.point_count <= points.len() => (self.point_count, acc),
            _ => return Err(HullError::InsufficientPoints { count: self.point_count }),
        };

        // No seed yet: an appended point may be the first one off the line.
        if self.faces.is_empty() {
            return Err(HullError::CollinearPoints { count: start });
        }
        for (i, &point) in points.iter().enumerate().skip(start) {
            self.add_point(i, point, config);
        }
        self.fingerprint = Some(F::extend(acc, &points[start..]));
        self.point_count = points.len();
        Ok(points.len() - start)
    }

    /// Perturbs the point stored at index `index`, then inserts it.
    pub fn add_point(&mut self, index: usize, point: DVec3, config: &HullConfig) -> InsertOutcome {
        let point = if config.perturb {
            PerturbationTable::global().perturb(index, point)
        } else {
            point
        };
        self.insert(point, config)
    }

    /// Single-point insertion. `point` is used as given, without perturbation.
    pub fn insert(&mut self, point: DVec3, config: &HullConfig) -> InsertOutcome {
        let visible: Vec<usize> = self
            .faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.visible_from(point))
            .map(|(i, _)| i)
            .collect();

        if visible.is_empty() {
            return InsertOutcome::Interior;
        }

        let hole = trace_hole(visible.iter().map(|&i| &self.faces[i]));
        if let Err(err) = check_boundary(&hole) {
            log::warn!("Discarding hull point {:?}: {}", point, err);
            self.rejected_insertions += 1;
            return InsertOutcome::Rejected;
        }

        // Descending order keeps the remaining indices valid across swap_remove.
        for &i in visible.iter().rev() {
            self.faces.swap_remove(i);
        }

        let mut added = 0;
        for edge in &hole {
            match Face::new(edge.start, edge.end, point, config.degenerate_cross_epsilon) {
                Ok(face) => {
                    self.faces.push(face);
                    added += 1;
                }
                Err(err) => log::warn!("Skipping hull face on edge {:?}: {}", edge, err),
            }
        }

        InsertOutcome::Extended {
            removed: visible.len(),
            added,
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn fingerprint(&self) -> Option<u64> {
        self.fingerprint
    }

    /// Number of leading store points this hull covers.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn rejected_insertions(&self) -> usize {
        self.rejected_insertions
    }

    /// Whether `point` is behind or within `config.containment_slack` of every
    /// face. An empty hull contains nothing.
    pub fn contains(&self, point: DVec3, config: &HullConfig) -> bool {
        let slack = config.containment_slack(point);
        !self.faces.is_empty()
            && self
                .faces
                .iter()
                .all(|face| face.plane().signed_distance(point) <= slack)
    }

    /// Every directed edge has exactly one reversed partner and no directed
    /// edge appears twice.
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        let mut directed: HashMap<EdgeKey, usize> = HashMap::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for edge in face.edges() {
                *directed.entry(EdgeKey::of(&edge)).or_insert(0) += 1;
            }
        }
        directed.iter().all(|(key, &count)| {
            count == 1 && directed.get(&key.reversed()).copied() == Some(1)
        })
    }
}

/// First `(j, k)` with `j < k` such that `points[0]`, `points[j]`, `points[k]`
/// span a plane. `k` is scanned upward, so the pair depends only on
/// `points[..=k]` and stays fixed as points are appended.
fn seed_indices(points: &[DVec3], cross_epsilon: f64) -> Option<(usize, usize)> {
    let p0 = *points.first()?;
    (2..points.len()).find_map(|k| {
        let pk = points[k] - p0;
        (1..k)
            .find(|&j| (points[j] - p0).cross(pk).length() > cross_epsilon)
            .map(|j| (j, k))
    })
}

/// Silhouette of a patch of faces: shared internal edges cancel against their
/// reversed twin, leaving the outer ring in the faces' own winding.
fn trace_hole<'a>(faces: impl Iterator<Item = &'a Face>) -> Vec<Edge> {
    let mut hole: Vec<Edge> = Vec::new();
    for face in faces {
        for edge in face.edges() {
            match hole.iter().position(|h| *h == edge) {
                Some(h) => {
                    hole.swap_remove(h);
                }
                None => hole.push(edge),
            }
        }
    }
    hole
}

/// The hole must be one simple ring: every vertex starts exactly one edge and
/// walking end-to-start from the first edge visits all of them.
fn check_boundary(hole: &[Edge]) -> HullResult<()> {
    let off_ring = |ring: usize| HullError::NonManifoldBoundary {
        stray_edges: hole.len() - ring,
    };
    if hole.is_empty() {
        return Err(off_ring(0));
    }
    for (i, edge) in hole.iter().enumerate() {
        if hole[..i].iter().any(|other| other.start == edge.start) {
            // Two loops pinched together at one vertex.
            return Err(off_ring(0));
        }
    }

    let mut current = 0;
    let mut ring = 0;
    loop {
        ring += 1;
        let end = hole[current].end;
        match hole.iter().position(|edge| edge.start == end) {
            Some(0) => break,
            Some(next) if ring < hole.len() => current = next,
            _ => return Err(off_ring(0)),
        }
    }

    if ring == hole.len() {
        Ok(())
    } else {
        Err(off_ring(ring))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct EdgeKey([u64; 3], [u64; 3]);

impl EdgeKey {
    fn of(edge: &Edge) -> Self {
        // -0.0 and 0.0 compare equal in `Edge::eq`, so they share a key.
        let key = |c: f64| if c == 0.0 { 0 } else { c.to_bits() };
        let bits = |p: DVec3| [key(p.x), key(p.y), key(p.z)];
        Self(bits(edge.start), bits(edge.end))
    }

    fn reversed(&self) -> Self {
        Self(self.1, self.0)
    }
}
