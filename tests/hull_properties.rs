// tests/hull_properties.rs

use approx::assert_relative_eq;
use convex_hull_builder::config::HullConfig;
use convex_hull_builder::fingerprint::RotateXor;
use convex_hull_builder::generator::PointCloudGenerator;
use convex_hull_builder::hull::{HullState, InsertOutcome};
use convex_hull_builder::{Face, IncrementalHullBuilder};
use glam::DVec3;

fn tetrahedron() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    ]
}

fn assert_contains_all(state: &HullState, points: &[DVec3], config: &HullConfig) {
    for &p in points {
        assert!(state.contains(p, config), "point {:?} is outside the hull", p);
    }
}

fn same_planes(a: &[Face], b: &[Face]) -> bool {
    a.len() == b.len()
        && a.iter().all(|fa| {
            b.iter().any(|fb| {
                fa.normal().distance(fb.normal()) < 1e-9
                    && (fa.plane().offset - fb.plane().offset).abs() < 1e-9
            })
        })
}

#[test]
fn tetrahedron_has_four_outward_faces() {
    let mut builder = IncrementalHullBuilder::from_points(tetrahedron());
    let view = builder.ensure_current();
    assert_eq!(view.len(), 4);

    let centroid = DVec3::splat(0.25);
    for face in view {
        assert!(face.plane().signed_distance(centroid) < 0.0);
        assert_relative_eq!(face.normal().length(), 1.0, epsilon = 1e-12);
    }
    assert!(builder.state().is_closed());
}

#[test]
fn interior_fifth_point_leaves_planes_unchanged() {
    let mut builder = IncrementalHullBuilder::from_points(tetrahedron());
    let before: Vec<Face> = builder.ensure_current().faces().to_vec();

    builder.append(DVec3::splat(0.1));
    let after = builder.ensure_current().faces().to_vec();
    assert_eq!(after.len(), 4);
    assert!(same_planes(&before, &after));
}

#[test]
fn far_fifth_point_grows_hull_and_stays_closed() {
    let mut builder = IncrementalHullBuilder::from_points(tetrahedron());
    let before = builder.ensure_current().len();

    builder.append(DVec3::splat(5.0));
    let after = builder.ensure_current().len();
    assert!(after > before);
    assert!(builder.state().is_closed());

    let config = *builder.config();
    assert_contains_all(builder.state(), builder.points(), &config);
}

#[test]
fn degenerate_point_counts() {
    let mut builder = IncrementalHullBuilder::new();
    assert!(builder.is_degenerate());
    assert!(builder.ensure_current().is_empty());
    builder.append(DVec3::X);
    assert!(builder.is_degenerate());
    assert!(builder.ensure_current().is_empty());
    builder.append(DVec3::Y);
    assert!(builder.is_degenerate());
    assert!(builder.ensure_current().is_empty());
    assert!(builder.hull_vertices().is_empty());
    assert_eq!(builder.rebuild_count(), 0);
}

#[test]
fn random_cube_cloud_is_closed_and_contains_inputs() {
    let config = HullConfig::default();
    let mut rng = PointCloudGenerator::seeded(11);
    let points = PointCloudGenerator::cube(&mut rng, DVec3::new(3.0, -1.0, 0.5), 2.0, 400);

    let state = HullState::rebuild::<RotateXor>(&points, &config).unwrap();
    assert!(state.is_closed());
    assert_eq!(state.rejected_insertions(), 0);
    assert_contains_all(&state, &points, &config);
}

#[test]
fn sphere_shell_is_closed_and_contains_inputs() {
    let config = HullConfig::default();
    let mut rng = PointCloudGenerator::seeded(5);
    let points = PointCloudGenerator::sphere_shell(&mut rng, DVec3::splat(2.0), 1.0, 300);

    let state = HullState::rebuild::<RotateXor>(&points, &config).unwrap();
    assert!(state.is_closed());
    assert_contains_all(&state, &points, &config);
    // Every shell point is extreme, so a triangulation of all of them has
    // 2n - 4 faces when no insertion was rejected.
    if state.rejected_insertions() == 0 {
        assert_eq!(state.len(), 2 * points.len() - 4);
    }
}

#[test]
fn rebuild_twice_gives_same_planes() {
    let config = HullConfig::default();
    let mut rng = PointCloudGenerator::seeded(23);
    let points = PointCloudGenerator::cube(&mut rng, DVec3::ZERO, 1.0, 200);

    let a = HullState::rebuild::<RotateXor>(&points, &config).unwrap();
    let b = HullState::rebuild::<RotateXor>(&points, &config).unwrap();
    assert_eq!(a.len(), b.len());
    assert!(same_planes(a.faces(), b.faces()));
}

#[test]
fn one_at_a_time_matches_batch() {
    let config = HullConfig::default();
    let mut rng = PointCloudGenerator::seeded(99);
    let points = PointCloudGenerator::cube(&mut rng, DVec3::ZERO, 1.0, 150);

    let mut incremental = HullState::bootstrap(points[0], points[1], points[2], &config);
    for (i, &p) in points.iter().enumerate().skip(3) {
        incremental.add_point(i, p, &config);
    }
    let batch = HullState::rebuild::<RotateXor>(&points, &config).unwrap();
    assert!(same_planes(incremental.faces(), batch.faces()));
}

#[test]
fn frame_by_frame_appends_match_batch() {
    let mut rng = PointCloudGenerator::seeded(8);
    let points = PointCloudGenerator::cube(&mut rng, DVec3::ZERO, 1.0, 120);

    let mut builder = IncrementalHullBuilder::new();
    for chunk in points.chunks(7) {
        for &p in chunk {
            builder.append(p);
        }
        builder.ensure_current();
    }
    assert_eq!(builder.rebuild_count(), 1);

    let mut batch = IncrementalHullBuilder::from_points(points);
    assert_eq!(batch.ensure_current().faces(), builder.state().faces());
}

#[test]
fn coplanar_circle_is_closed() {
    let points = PointCloudGenerator::circle(0.0, 2.0, 1.0, 63);
    let state = HullState::rebuild::<RotateXor>(&points, &HullConfig::default()).unwrap();
    assert!(!state.is_empty());
    assert!(state.is_closed());
}

#[test]
fn integer_lattice_is_closed() {
    let mut points = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(3.0, 0.0, 0.0),
        DVec3::new(0.0, 3.0, 0.0),
    ];
    for x in 0..4 {
        for y in 0..4 {
            for z in 0..4 {
                let p = DVec3::new(x as f64, y as f64, z as f64);
                if !points.contains(&p) {
                    points.push(p);
                }
            }
        }
    }
    let state = HullState::rebuild::<RotateXor>(&points, &HullConfig::default()).unwrap();
    assert!(state.is_closed());
}

#[test]
fn insert_reports_outcomes() {
    let config = HullConfig::default();
    let mut state = HullState::rebuild::<RotateXor>(&tetrahedron(), &config).unwrap();
    assert_eq!(state.insert(DVec3::splat(0.2), &config), InsertOutcome::Interior);
    match state.insert(DVec3::new(-4.0, -4.0, -4.0), &config) {
        InsertOutcome::Extended { removed, added } => {
            assert!(removed >= 1);
            assert!(added >= 3);
        }
        other => panic!("expected the hull to grow, got {:?}", other),
    }
    assert!(state.is_closed());
}

#[test]
fn vertex_buffer_matches_faces() {
    let mut builder = IncrementalHullBuilder::from_points(tetrahedron());
    builder.append(DVec3::splat(5.0));
    let faces = builder.ensure_current().len();
    let buffer = builder.vertex_buffer(0.5);
    assert_eq!(buffer.len(), faces * 3);
    assert!(buffer
        .iter()
        .all(|v| v.position.iter().all(|c| (-0.01..=2.51).contains(c))));
}
