//! Clustered layout: members scattered around their cluster center.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vantage_config::LayoutConfig;
use vantage_scene::Artifact;

use crate::cluster::build_clusters;

/// Scatter each cluster's members around its center.
///
/// Members land at a random angle, a radial distance of 0.3..0.7 of the
/// cluster radius, and a small vertical jitter, all drawn from the
/// injected RNG.
pub(crate) fn apply(artifacts: &mut [Artifact], config: &LayoutConfig, rng: &mut ChaCha8Rng) {
    let clusters = build_clusters(artifacts, config.cluster_radius);

    let index_of: HashMap<&str, usize> = artifacts
        .iter()
        .enumerate()
        .map(|(i, a)| (a.id.as_str(), i))
        .collect();

    // Draw offsets first: `index_of` borrows the slice immutably.
    let mut placements: Vec<(usize, Vec3)> = Vec::with_capacity(artifacts.len());
    for cluster in &clusters {
        for id in &cluster.member_ids {
            let Some(&index) = index_of.get(id.as_str()) else {
                continue;
            };
            let angle = rng.random::<f32>() * TAU;
            let radial = rng.random_range(0.3..0.7) * cluster.radius;
            let jitter = rng.random_range(-1.0..1.0);
            let offset = Vec3::new(angle.cos() * radial, jitter, angle.sin() * radial);
            placements.push((index, cluster.center + offset));
        }
    }

    for (index, position) in placements {
        artifacts[index].position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use vantage_config::LayoutConfig;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn artifact(id: &str, file_path: &str) -> Artifact {
        Artifact::new(id, file_path)
    }

    /// Members stay within their cluster's placement annulus.
    #[test]
    fn test_members_stay_near_their_center() {
        let mut artifacts = vec![
            artifact("a", "/src/models/a.rs"),
            artifact("b", "/src/models/b.rs"),
            artifact("c", "/src/models/c.rs"),
            artifact("d", "/src/models/d.rs"),
        ];
        let config = LayoutConfig::default();
        apply(&mut artifacts, &config, &mut rng(3));

        let clusters = build_clusters(&artifacts, config.cluster_radius);
        let center = clusters[0].center;
        let radius = clusters[0].radius;
        for a in &artifacts {
            let horizontal = Vec3::new(a.position.x - center.x, 0.0, a.position.z - center.z);
            let distance = horizontal.length();
            assert!(
                distance >= 0.3 * radius - 1e-4 && distance <= 0.7 * radius + 1e-4,
                "{} landed at radial distance {distance} for radius {radius}",
                a.id
            );
            assert!((a.position.y - center.y).abs() <= 1.0);
        }
    }

    /// Same seed, same inputs: identical placements.
    #[test]
    fn test_deterministic_for_fixed_seed() {
        let make = || {
            vec![
                artifact("a", "/src/models/a.rs"),
                artifact("b", "/src/models/b.rs"),
                artifact("solo", "/scripts/solo.rs"),
            ]
        };
        let config = LayoutConfig::default();
        let mut first = make();
        let mut second = make();
        apply(&mut first, &config, &mut rng(11));
        apply(&mut second, &config, &mut rng(11));
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.position, b.position);
        }
    }

    /// Unclustered artifacts scatter around the misc center above the
    /// origin.
    #[test]
    fn test_misc_members_scatter_above_origin() {
        let mut artifacts = vec![
            artifact("a", "/src/models/a.rs"),
            artifact("b", "/src/models/b.rs"),
            artifact("solo", "/scripts/solo.rs"),
        ];
        let config = LayoutConfig::default();
        apply(&mut artifacts, &config, &mut rng(5));
        let solo = &artifacts[2];
        assert!(
            (solo.position.y - config.cluster_radius).abs() <= 1.0,
            "misc member should hover near the misc center height"
        );
    }
}
