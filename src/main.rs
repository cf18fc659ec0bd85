// src/main.rs

use convex_hull_builder::generator::PointCloudGenerator;
use convex_hull_builder::vertex::vertex_bytes;
use convex_hull_builder::IncrementalHullBuilder;
use glam::DVec3;

fn report(name: &str, builder: &mut IncrementalHullBuilder) {
    if builder.is_degenerate() {
        log::info!("{}: {} points, degenerate", name, builder.len());
        return;
    }
    let view = builder.ensure_current();
    let faces = view.len();
    let center = view.center();
    let bytes = vertex_bytes(&view.vertex_buffer(1.0)).len();
    let outside = builder
        .points()
        .iter()
        .filter(|&&p| !builder.state().contains(p, builder.config()))
        .count();
    log::info!(
        "{}: {} points, {} faces, center {:.3?}, {} vertex bytes, {} outside, {} rebuilds, {} extensions",
        name,
        builder.len(),
        faces,
        center,
        bytes,
        outside,
        builder.rebuild_count(),
        builder.extension_count()
    );
}

fn main() {
    env_logger::init();

    let mut triangle = IncrementalHullBuilder::new();
    triangle.append_xy(-4.0, 2.5);
    triangle.append_xy(-5.0, 2.5);
    triangle.append_xy(-4.5, 3.25);
    report("triangle", &mut triangle);

    let mut circle = IncrementalHullBuilder::from_points(PointCloudGenerator::circle(0.0, 2.0, 1.0, 63));
    report("circle", &mut circle);

    let mut rng = PointCloudGenerator::seeded(0);
    let mut line = IncrementalHullBuilder::from_points([DVec3::ZERO, DVec3::X, DVec3::X * 2.0]);
    report("line", &mut line);
    for p in PointCloudGenerator::cube(&mut rng, DVec3::ZERO, 1.0, 30) {
        line.append(p);
    }
    report("line", &mut line);

    let mut sphere = IncrementalHullBuilder::from_points(PointCloudGenerator::sphere_shell(
        &mut rng,
        DVec3::splat(2.0),
        1.0,
        1000,
    ));
    report("sphere", &mut sphere);

    // Grow the sphere a little each "frame" to exercise the append path.
    for frame in 0..5 {
        for p in PointCloudGenerator::sphere_shell(&mut rng, DVec3::splat(2.0), 1.0 + 0.1 * frame as f64, 20) {
            sphere.append(p);
        }
        report("sphere", &mut sphere);
    }
}
