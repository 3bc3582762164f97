//! Directory-based clustering, shared by the clustered layout and by
//! cluster visualization.

use std::collections::BTreeMap;
use std::path::Path;

use glam::Vec3;

use vantage_scene::{Artifact, ArtifactId};

use crate::rings::ring_position;

/// Id of the synthetic cluster that absorbs unclustered artifacts.
pub const MISC_CLUSTER_ID: &str = "misc";

/// Fixed palette cycled by cluster index.
pub const CLUSTER_PALETTE: [[f32; 3]; 8] = [
    [0.31, 0.48, 0.84], // blue
    [0.84, 0.42, 0.31], // orange
    [0.38, 0.70, 0.42], // green
    [0.72, 0.38, 0.70], // purple
    [0.84, 0.73, 0.31], // yellow
    [0.31, 0.73, 0.76], // teal
    [0.80, 0.35, 0.48], // rose
    [0.55, 0.57, 0.62], // slate
];

/// A group of artifacts positioned together.
#[derive(Clone, Debug)]
pub struct ClusterInfo {
    /// Parent directory shared by the members, or [`MISC_CLUSTER_ID`].
    pub id: String,
    /// World-space cluster center.
    pub center: Vec3,
    /// Placement radius, `max(3, members * 0.5)`.
    pub radius: f32,
    /// Ids of every member artifact.
    pub member_ids: Vec<ArtifactId>,
    /// Palette color for visualization.
    pub color: [f32; 3],
}

/// Group artifacts by the parent directory of their file path.
///
/// Directories with a single artifact fold into the synthetic misc
/// cluster, so every artifact belongs to exactly one cluster. Named
/// cluster centers take evenly spaced slots on a ring of `cluster_radius`;
/// the misc cluster is centered above the origin.
pub fn build_clusters(artifacts: &[Artifact], cluster_radius: f32) -> Vec<ClusterInfo> {
    // BTreeMap keeps directory order deterministic across runs.
    let mut by_directory: BTreeMap<String, Vec<&ArtifactId>> = BTreeMap::new();
    let mut misc: Vec<&ArtifactId> = Vec::new();

    for artifact in artifacts {
        match parent_directory(&artifact.file_path) {
            Some(directory) => by_directory.entry(directory).or_default().push(&artifact.id),
            None => misc.push(&artifact.id),
        }
    }

    // Singleton directories are not real clusters; fold them into misc.
    let mut named: Vec<(String, Vec<&ArtifactId>)> = Vec::new();
    for (directory, members) in by_directory {
        if members.len() > 1 {
            named.push((directory, members));
        } else {
            misc.extend(members);
        }
    }

    let named_count = named.len();
    let mut clusters: Vec<ClusterInfo> = named
        .into_iter()
        .enumerate()
        .map(|(index, (directory, members))| ClusterInfo {
            id: directory,
            center: ring_position(index, named_count, cluster_radius, 0.0),
            radius: cluster_fit_radius(members.len()),
            member_ids: members.into_iter().cloned().collect(),
            color: CLUSTER_PALETTE[index % CLUSTER_PALETTE.len()],
        })
        .collect();

    if !misc.is_empty() {
        clusters.push(ClusterInfo {
            id: MISC_CLUSTER_ID.to_string(),
            center: Vec3::new(0.0, cluster_radius, 0.0),
            radius: cluster_fit_radius(misc.len()),
            member_ids: misc.into_iter().cloned().collect(),
            color: CLUSTER_PALETTE[named_count % CLUSTER_PALETTE.len()],
        });
    }

    clusters
}

/// Smallest placement radius that fits the member count.
fn cluster_fit_radius(members: usize) -> f32 {
    (members as f32 * 0.5).max(3.0)
}

/// Parent directory of a file path, if it has one.
fn parent_directory(file_path: &str) -> Option<String> {
    let parent = Path::new(file_path).parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    Some(parent.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn artifact(id: &str, file_path: &str) -> Artifact {
        Artifact::new(id, file_path)
    }

    /// Four artifacts in one directory form one cluster of four with
    /// radius 3 and no misc bucket.
    #[test]
    fn test_single_directory_forms_one_cluster() {
        let artifacts = vec![
            artifact("user", "/src/models/user.rs"),
            artifact("post", "/src/models/post.rs"),
            artifact("tag", "/src/models/tag.rs"),
            artifact("vote", "/src/models/vote.rs"),
        ];
        let clusters = build_clusters(&artifacts, 20.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].id, "/src/models");
        assert_eq!(clusters[0].member_ids.len(), 4);
        assert_eq!(clusters[0].radius, 3.0);
    }

    /// Every artifact lands in exactly one cluster: member-id sets
    /// partition the artifact id set.
    #[test]
    fn test_clusters_partition_artifacts() {
        let artifacts = vec![
            artifact("a", "/src/models/a.rs"),
            artifact("b", "/src/models/b.rs"),
            artifact("c", "/src/views/c.rs"),
            artifact("d", "/src/views/d.rs"),
            artifact("lonely", "/scripts/build.rs"),
            artifact("rootless", "main.rs"),
        ];
        let clusters = build_clusters(&artifacts, 20.0);

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for cluster in &clusters {
            for id in &cluster.member_ids {
                assert!(seen.insert(id.as_str()), "{id} appears in two clusters");
            }
        }
        assert_eq!(seen.len(), artifacts.len());
    }

    /// Singleton directories fold into the misc cluster.
    #[test]
    fn test_singletons_fold_into_misc() {
        let artifacts = vec![
            artifact("a", "/src/models/a.rs"),
            artifact("b", "/src/models/b.rs"),
            artifact("lonely", "/scripts/build.rs"),
        ];
        let clusters = build_clusters(&artifacts, 20.0);
        assert_eq!(clusters.len(), 2);
        let misc = clusters.iter().find(|c| c.id == MISC_CLUSTER_ID).unwrap();
        assert_eq!(misc.member_ids.len(), 1);
        assert_eq!(misc.member_ids[0].as_str(), "lonely");
    }

    /// The misc center sits above the origin, off the named-cluster ring.
    #[test]
    fn test_misc_center_is_above_origin() {
        let artifacts = vec![artifact("lonely", "/scripts/build.rs")];
        let clusters = build_clusters(&artifacts, 20.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].center, Vec3::new(0.0, 20.0, 0.0));
    }

    /// Radius scales with membership but never drops below 3.
    #[test]
    fn test_radius_fits_member_count() {
        let artifacts: Vec<Artifact> = (0..10)
            .map(|i| artifact(&format!("a{i}"), &format!("/src/big/a{i}.rs")))
            .collect();
        let clusters = build_clusters(&artifacts, 20.0);
        assert_eq!(clusters[0].radius, 5.0);

        let small = vec![
            artifact("x", "/src/tiny/x.rs"),
            artifact("y", "/src/tiny/y.rs"),
        ];
        let clusters = build_clusters(&small, 20.0);
        assert_eq!(clusters[0].radius, 3.0);
    }

    /// Colors cycle through the palette by cluster index.
    #[test]
    fn test_palette_round_robin() {
        let mut artifacts = Vec::new();
        for d in 0..10 {
            artifacts.push(artifact(&format!("a{d}"), &format!("/src/d{d}/a.rs")));
            artifacts.push(artifact(&format!("b{d}"), &format!("/src/d{d}/b.rs")));
        }
        let clusters = build_clusters(&artifacts, 20.0);
        assert_eq!(clusters.len(), 10);
        assert_eq!(clusters[0].color, CLUSTER_PALETTE[0]);
        assert_eq!(clusters[8].color, CLUSTER_PALETTE[0]);
        assert_eq!(clusters[9].color, CLUSTER_PALETTE[1]);
    }

    /// Named cluster centers sit on the configured ring.
    #[test]
    fn test_named_centers_on_ring() {
        let artifacts = vec![
            artifact("a", "/src/models/a.rs"),
            artifact("b", "/src/models/b.rs"),
            artifact("c", "/src/views/c.rs"),
            artifact("d", "/src/views/d.rs"),
        ];
        let clusters = build_clusters(&artifacts, 24.0);
        for cluster in clusters.iter().filter(|c| c.id != MISC_CLUSTER_ID) {
            let horizontal = (cluster.center.x.powi(2) + cluster.center.z.powi(2)).sqrt();
            assert!((horizontal - 24.0).abs() < 1e-4);
        }
    }
}
