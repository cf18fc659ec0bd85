// src/lib.rs

pub mod builder;
pub mod config;
pub mod error;
pub mod face;
pub mod fingerprint;
pub mod generator;
pub mod geometry;
pub mod hull;
pub mod perturbation;
pub mod shared;
pub mod vertex;

pub use builder::{FaceView, IncrementalHullBuilder};
pub use config::HullConfig;
pub use error::{HullError, HullResult};
pub use face::{Edge, Face};
pub use fingerprint::{Fingerprint, RotateXor};
pub use geometry::Plane;
pub use hull::{HullState, InsertOutcome};
pub use perturbation::PerturbationTable;
pub use shared::SharedHull;
pub use vertex::HullVertex;
