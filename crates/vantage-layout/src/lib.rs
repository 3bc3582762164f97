//! Spatial layout engine for artifact graphs: five positioning strategies,
//! a shared directory-clustering routine, and a pairwise overlap resolver.

mod cluster;
mod clustered;
mod engine;
mod force;
mod grid;
mod hierarchy;
mod overlap;
mod rings;

pub use cluster::{CLUSTER_PALETTE, ClusterInfo, MISC_CLUSTER_ID, build_clusters};
pub use engine::LayoutEngine;
pub use hierarchy::dependency_levels;
pub use overlap::{MAX_PASSES, resolve_overlaps};
