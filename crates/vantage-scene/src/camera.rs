//! Camera state consumed by the per-frame render planner.

use glam::{Mat4, Vec3};

/// Camera state for one frame.
///
/// The planner derives artifact distances from `position` and builds the
/// culling frustum from `projection * inverse_world`. Supplying stale or
/// mismatched matrices is a caller contract violation, not an error the
/// planner detects.
#[derive(Clone, Debug)]
pub struct CameraState {
    /// World-space camera position.
    pub position: Vec3,
    /// Projection matrix.
    pub projection: Mat4,
    /// Inverse of the camera's world transform (the view matrix).
    pub inverse_world: Mat4,
}

impl CameraState {
    /// Create a camera state from its raw matrices.
    pub fn new(position: Vec3, projection: Mat4, inverse_world: Mat4) -> Self {
        Self {
            position,
            projection,
            inverse_world,
        }
    }

    /// Perspective camera at `position` looking at `target`.
    pub fn looking_at(position: Vec3, target: Vec3, aspect: f32) -> Self {
        let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 2000.0);
        let inverse_world = Mat4::look_at_rh(position, target, Vec3::Y);
        Self {
            position,
            projection,
            inverse_world,
        }
    }

    /// Combined matrix used for frustum extraction.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.inverse_world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looking_at_projects_target_in_front() {
        let camera = CameraState::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);
        let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
        // The target must sit inside clip space after perspective divide.
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
    }
}
