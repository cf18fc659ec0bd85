// src/error.rs

use thiserror::Error;

/// Internal failure modes of the hull algorithms.
///
/// None of these reach the `IncrementalHullBuilder` caller. The builder turns
/// each one into a local recovery: a no-op, a skipped face, or a rejected
/// point. They are still typed so the algorithms can use `?` and so the
/// recovery sites can log something precise.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// A rebuild was attempted with fewer than three points.
    #[error("need at least 3 points to build a hull, have {count}")]
    InsufficientPoints { count: usize },

    /// Every point so far lies on one line, so no seed triangle exists yet.
    #[error("all {count} points are collinear, no seed triangle")]
    CollinearPoints { count: usize },

    /// The three corners of a candidate face are (numerically) collinear.
    #[error("degenerate face plane: cross product length {cross_length:e}")]
    DegeneratePlane { cross_length: f64 },

    /// The hole left by removing visible faces is not one simple closed ring.
    #[error("non-manifold hole boundary: {stray_edges} edges off the silhouette ring")]
    NonManifoldBoundary { stray_edges: usize },
}

pub type HullResult<T> = Result<T, HullError>;
