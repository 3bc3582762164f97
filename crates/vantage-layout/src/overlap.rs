//! Pairwise overlap relaxation applied after a layout pass.

use std::f32::consts::TAU;

use glam::Vec3;

use vantage_scene::Artifact;

/// Maximum relaxation passes before giving up.
pub const MAX_PASSES: usize = 10;

/// Push artifacts apart until every pair is at least `min_distance` apart
/// or the pass budget is exhausted. Returns the number of corrective
/// passes run.
///
/// Each violating pair moves symmetrically, half the deficit each, along
/// the separating unit vector. The relaxation monotonically reduces total
/// overlap per pass but is not guaranteed globally overlap-free within
/// the pass budget.
pub fn resolve_overlaps(artifacts: &mut [Artifact], min_distance: f32) -> usize {
    let n = artifacts.len();
    for pass in 0..MAX_PASSES {
        let mut moved = false;
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = artifacts[i].position - artifacts[j].position;
                let distance = delta.length();
                if distance >= min_distance {
                    continue;
                }
                let direction = if distance > f32::EPSILON {
                    delta / distance
                } else {
                    separation_fallback(i, j)
                };
                let push = direction * (min_distance - distance) * 0.5;
                artifacts[i].position += push;
                artifacts[j].position -= push;
                moved = true;
            }
        }
        if !moved {
            return pass;
        }
    }
    MAX_PASSES
}

/// Deterministic unit direction for coincident pairs.
fn separation_fallback(i: usize, j: usize) -> Vec3 {
    let angle = (i as f32 * 0.618_034 + j as f32 * 0.414_214) * TAU;
    Vec3::new(angle.cos(), 0.0, angle.sin())
}
