//! Force-directed layout: iterative repulsion/attraction simulation.

use std::collections::HashMap;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vantage_config::LayoutConfig;
use vantage_scene::Artifact;

/// Pairs closer than this are skipped when computing repulsion, to avoid
/// the 1/d² singularity.
const MIN_FORCE_DISTANCE: f32 = 0.1;

/// Half-width of the cube used to seed unset positions.
const SEED_HALF_WIDTH: f32 = 10.0;

/// Run the force simulation for exactly `config.iterations` steps.
///
/// Artifacts still at the origin are first seeded uniformly inside a
/// half-width-10 cube from the injected RNG, so a fixed seed reproduces
/// the layout exactly. Each step sums three forces per artifact and adds
/// the total directly to its position (the force magnitude is the
/// per-step displacement; there is no velocity state):
///
/// - repulsion `repulsion_strength / d²` between every unordered pair,
/// - attraction `d * force_strength` along each dependency edge, pulling
///   the dependent toward its dependency,
/// - a center-seeking force `-center_attraction * position`.
pub(crate) fn apply(artifacts: &mut [Artifact], config: &LayoutConfig, rng: &mut ChaCha8Rng) {
    let n = artifacts.len();
    if n == 0 {
        return;
    }

    for artifact in artifacts.iter_mut() {
        if artifact.position == Vec3::ZERO {
            artifact.position = Vec3::new(
                rng.random_range(-SEED_HALF_WIDTH..SEED_HALF_WIDTH),
                rng.random_range(-SEED_HALF_WIDTH..SEED_HALF_WIDTH),
                rng.random_range(-SEED_HALF_WIDTH..SEED_HALF_WIDTH),
            );
        }
    }

    let index_of: HashMap<&str, usize> = artifacts
        .iter()
        .enumerate()
        .map(|(i, a)| (a.id.as_str(), i))
        .collect();

    // Dependency edges resolved to indices once; unknown ids and
    // self-edges are skipped.
    let edges: Vec<(usize, usize)> = artifacts
        .iter()
        .enumerate()
        .flat_map(|(from, a)| {
            a.dependencies
                .iter()
                .filter_map(|dep| index_of.get(dep.as_str()).copied())
                .filter(move |&to| to != from)
                .map(move |to| (from, to))
        })
        .collect();

    let mut positions: Vec<Vec3> = artifacts.iter().map(|a| a.position).collect();

    for _ in 0..config.iterations {
        let mut forces = vec![Vec3::ZERO; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.length();
                if distance < MIN_FORCE_DISTANCE {
                    continue;
                }
                let push = delta / distance * (config.repulsion_strength / (distance * distance));
                forces[i] += push;
                forces[j] -= push;
            }
        }

        for &(from, to) in &edges {
            // delta already scales with distance, so `delta * strength`
            // is the spring force along the unit direction.
            let delta = positions[to] - positions[from];
            forces[from] += delta * config.force_strength;
        }

        for i in 0..n {
            forces[i] -= positions[i] * config.center_attraction;
        }

        for i in 0..n {
            positions[i] += forces[i];
        }
    }

    for (artifact, position) in artifacts.iter_mut().zip(positions) {
        artifact.position = position;
    }
}
