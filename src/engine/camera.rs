//! Fixed perspective camera.
//!
//! The camera never moves: it sits on the +Z axis looking down -Z toward the
//! origin, and only supplies the `view` and `projection` uniforms.

use crate::config::DemoConfig;
use crate::engine::math::matrixfuncs::{perspective_matrix, translation_matrix};

/// Represents a perspective projection camera.
///
/// Right-handed coordinate system, column-major 4x4 output matrices suitable
/// for OpenGL.
#[derive(Debug, Clone)]
pub struct Camera {
    /// The camera's world-space position.
    pub position: [f32; 3],

    /// Vertical field of view in radians.
    pub fov_y: f32,

    /// Aspect ratio of the view (width / height).
    pub aspect: f32,

    /// Distance to the near clipping plane.
    pub near: f32,

    /// Distance to the far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a camera at `[0, 0, distance]` with the given projection.
    ///
    /// # Parameters
    /// - `distance`: how far down +Z the camera sits from the origin.
    /// - `fov_deg`: vertical field of view in degrees.
    /// - `aspect`: width-to-height ratio of the viewport.
    pub fn new(distance: f32, fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: [0.0, 0.0, distance],
            fov_y: fov_deg.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(
            config.camera_distance,
            config.fov_deg,
            config.aspect(),
            config.near,
            config.far,
        )
    }

    /// Computes the view matrix from the camera's position.
    ///
    /// This transform converts world-space coordinates into view-space,
    /// where the camera is at the origin looking down the negative Z-axis.
    pub fn view_matrix(&self) -> [f32; 16] {
        translation_matrix([
            -self.position[0],
            -self.position[1],
            -self.position[2],
        ])
    }

    /// Computes the perspective projection matrix based on the camera's FOV, aspect ratio, and near/far planes.
    pub fn projection_matrix(&self) -> [f32; 16] {
        perspective_matrix(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::math::matrixfuncs::transform_point;

    #[test]
    fn default_view_is_fixed_pullback() {
        let camera = Camera::from_config(&DemoConfig::default());
        assert_eq!(camera.view_matrix(), translation_matrix([0.0, 0.0, -25.0]));
    }

    #[test]
    fn default_projection_uses_window_aspect() {
        let camera = Camera::from_config(&DemoConfig::default());
        assert_eq!(camera.aspect, 800.0 / 600.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 200.0);
        assert!((camera.fov_y - 60.0f32.to_radians()).abs() < 1e-6);
        assert_eq!(
            camera.projection_matrix(),
            perspective_matrix(60.0f32.to_radians(), 800.0 / 600.0, 0.1, 200.0)
        );
    }

    #[test]
    fn origin_lands_inside_clip_volume() {
        let camera = Camera::from_config(&DemoConfig::default());
        let view = transform_point(&camera.view_matrix(), [0.0, 0.0, 0.0, 1.0]);
        let clip = transform_point(&camera.projection_matrix(), view);
        let ndc_z = clip[2] / clip[3];
        assert!(clip[3] > 0.0);
        assert!(ndc_z > -1.0 && ndc_z < 1.0);
    }
}
