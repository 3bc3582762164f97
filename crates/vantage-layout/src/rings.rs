//! Ring placement: the circular layout and the slot helper shared with
//! hierarchical levels and cluster centers.

use std::f32::consts::TAU;

use glam::Vec3;

use vantage_scene::Artifact;

/// Evenly spaced slot `index` of `count` on a ring of `radius` at `height`.
pub(crate) fn ring_position(index: usize, count: usize, radius: f32, height: f32) -> Vec3 {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    Vec3::new(radius * angle.cos(), height, radius * angle.sin())
}

/// Circular layout: one ring for the whole scene.
///
/// Radius grows with the artifact count (`max(5, n * 0.8)`); a slight
/// sine-wave height keeps the ring from being perfectly flat.
pub(crate) fn apply(artifacts: &mut [Artifact]) {
    let n = artifacts.len();
    if n == 0 {
        return;
    }

    let radius = (n as f32 * 0.8).max(5.0);
    for (index, artifact) in artifacts.iter_mut().enumerate() {
        let height = (index as f32 * 0.5).sin() * 2.0;
        artifact.position = ring_position(index, n, radius, height);
    }
}
