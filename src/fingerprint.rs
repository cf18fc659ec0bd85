// src/fingerprint.rs

use glam::DVec3;

/// Cheap, order-sensitive digest of a point store.
///
/// Used only to answer "has anything changed since the last rebuild", so it
/// needs to be fast and deterministic, not collision resistant.
pub trait Fingerprint {
    /// Continues a digest over `points`, starting from `acc`.
    fn extend(acc: u64, points: &[DVec3]) -> u64;

    fn fingerprint(points: &[DVec3]) -> u64 {
        Self::extend(0, points)
    }
}

/// XOR each coordinate byte into the accumulator, then rotate left one bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotateXor;

impl RotateXor {
    #[inline]
    fn fold(acc: u64, value: f64) -> u64 {
        value
            .to_le_bytes()
            .iter()
            .fold(acc, |acc, &byte| (acc ^ byte as u64).rotate_left(1))
    }
}

impl Fingerprint for RotateXor {
    fn extend(acc: u64, points: &[DVec3]) -> u64 {
        points.iter().fold(acc, |acc, p| {
            let acc = Self::fold(acc, p.x);
            let acc = Self::fold(acc, p.y);
            Self::fold(acc, p.z)
        })
    }
}
