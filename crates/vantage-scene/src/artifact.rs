//! Artifacts: the code entities rendered as nodes in the 3D scene.

use std::fmt;

use glam::Vec3;

/// Identifier of an artifact, unique within a scene.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ArtifactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A code entity rendered as a node in the 3D scene.
///
/// Artifacts are owned by the caller. The layout engine rewrites
/// `position` in place on every layout pass; the frame planner only reads
/// it and never mutates an artifact.
#[derive(Clone, Debug)]
pub struct Artifact {
    /// Unique identifier within the scene.
    pub id: ArtifactId,
    /// World-space position, assigned and rewritten by the layout engine.
    pub position: Vec3,
    /// Scalar complexity score. Higher values mark more important nodes;
    /// the frame planner spares them from probabilistic thinning.
    pub complexity: f32,
    /// Directed dependency edges to other artifacts. The graph is not
    /// guaranteed acyclic.
    pub dependencies: Vec<ArtifactId>,
    /// Source path of the entity, used for directory-based clustering.
    pub file_path: String,
    /// Visual size of the node.
    pub size: f32,
}

impl Artifact {
    /// Create an artifact at the origin with default complexity and size.
    pub fn new(id: impl Into<ArtifactId>, file_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: Vec3::ZERO,
            complexity: 1.0,
            dependencies: Vec::new(),
            file_path: file_path.into(),
            size: 1.0,
        }
    }
}
