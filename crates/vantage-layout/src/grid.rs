//! Grid layout: row-major placement centered on the origin.

use glam::Vec3;

use vantage_scene::Artifact;

/// Place artifacts on a `ceil(sqrt(n))`-wide grid with the given cell
/// spacing. Height encodes complexity (`complexity * 0.5`).
pub(crate) fn apply(artifacts: &mut [Artifact], spacing: f32) {
    let n = artifacts.len();
    if n == 0 {
        return;
    }

    let width = (n as f32).sqrt().ceil() as usize;
    let half = width as f32 * spacing / 2.0;
    for (index, artifact) in artifacts.iter_mut().enumerate() {
        artifact.position = Vec3::new(
            (index % width) as f32 * spacing - half,
            artifact.complexity * 0.5,
            (index / width) as f32 * spacing - half,
        );
    }
}
