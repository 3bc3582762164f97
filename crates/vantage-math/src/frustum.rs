//! View-frustum plane extraction and point containment.
//!
//! The frustum is built once per frame from the camera's combined
//! `projection * inverse_world` matrix and reused for every artifact
//! containment test that frame.

use glam::{Mat4, Vec3, Vec4};

/// Plane indices into the frustum planes array.
const LEFT: usize = 0;
const RIGHT: usize = 1;
const BOTTOM: usize = 2;
const TOP: usize = 3;
const NEAR: usize = 4;
const FAR: usize = 5;

/// A view frustum defined by six inward-pointing planes extracted from
/// the combined view-projection matrix.
#[derive(Clone, Debug)]
pub struct Frustum {
    /// Six planes: left, right, bottom, top, near, far.
    /// Each `Vec4(a, b, c, d)` where `(a,b,c)` is the normalized inward
    /// normal and `d` is the signed distance term.
    planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a combined view-projection matrix
    /// using the Gribb-Hartmann method.
    ///
    /// Works with both perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];

        let mut planes = [Vec4::ZERO; 6];
        planes[LEFT] = rows[3] + rows[0];
        planes[RIGHT] = rows[3] - rows[0];
        planes[BOTTOM] = rows[3] + rows[1];
        planes[TOP] = rows[3] - rows[1];
        // glam projections map depth to [0, 1], so the near clip is z' >= 0
        // (row 2 directly) rather than the GL-style row3 + row2.
        planes[NEAR] = rows[2];
        planes[FAR] = rows[3] - rows[2];

        // Normalize each plane so that (a,b,c) is a unit vector.
        for plane in &mut planes {
            let len = plane.truncate().length();
            if len > 0.0 {
                *plane /= len;
            }
        }

        Self { planes }
    }

    /// Test whether a point is inside (or on the boundary of) the frustum.
    ///
    /// A point is inside iff it lies on the non-negative side of all six
    /// inward-pointing planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }
}

/// Convenience wrapper for per-frame frustum culling.
///
/// Constructed once per frame from the camera's view-projection matrix,
/// then used to test each artifact position before it enters the render
/// plan.
#[derive(Clone, Debug)]
pub struct FrustumCuller {
    frustum: Frustum,
}

impl FrustumCuller {
    /// Create a new culler from the camera's view-projection matrix.
    pub fn new(view_projection: &Mat4) -> Self {
        Self {
            frustum: Frustum::from_view_projection(view_projection),
        }
    }

    /// Returns `true` if the point is inside the frustum.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.frustum.contains_point(point)
    }
}
