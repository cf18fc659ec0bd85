// src/generator.rs

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct PointCloudGenerator;

impl PointCloudGenerator {
    pub fn seeded(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Uniform points in the axis-aligned cube `center +- half_extent`.
    pub fn cube(rng: &mut impl Rng, center: DVec3, half_extent: f64, count: usize) -> Vec<DVec3> {
        (0..count)
            .map(|_| {
                center
                    + DVec3::new(
                        rng.gen_range(-half_extent..half_extent),
                        rng.gen_range(-half_extent..half_extent),
                        rng.gen_range(-half_extent..half_extent),
                    )
            })
            .collect()
    }

    /// Points on a sphere of `radius` around `center`, from normalized cube
    /// samples.
    pub fn sphere_shell(rng: &mut impl Rng, center: DVec3, radius: f64, count: usize) -> Vec<DVec3> {
        let mut points = Vec::with_capacity(count);
        while points.len() < count {
            let v = DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            // Skip samples too close to the origin to normalize stably.
            if let Some(dir) = v.try_normalize().filter(|_| v.length_squared() > 1e-6) {
                points.push(center + dir * radius);
            }
        }
        points
    }

    /// Points on a circle in the z = 0 plane. Every point is coplanar with
    /// the seed triangle, which leans entirely on the perturbation.
    pub fn circle(center_x: f64, center_y: f64, radius: f64, count: usize) -> Vec<DVec3> {
        (0..count)
            .map(|i| {
                let angle = i as f64 * std::f64::consts::TAU / count as f64;
                DVec3::new(center_x + radius * angle.sin(), center_y + radius * angle.cos(), 0.0)
            })
            .collect()
    }
}
