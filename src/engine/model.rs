use crate::engine::camera::Camera;
use crate::engine::frame::{FrameTransforms, RenderPhase, RenderState};
use crate::engine::geometry::GLMesh;
use crate::engine::math::matrixfuncs::rotation_y_matrix;
use crate::engine::shader::ShaderProgram;

/// Builds the three per-frame matrices for a model spun `angle_y` degrees about +Y.
pub fn frame_transforms(angle_y: f32, camera: &Camera) -> FrameTransforms {
    FrameTransforms {
        model: rotation_y_matrix(angle_y),
        view: camera.view_matrix(),
        projection: camera.projection_matrix(),
    }
}

/// The one thing on screen: an uploaded mesh spinning about +Y.
///
/// Owns its GPU resources; dropping the model releases the buffers and the
/// program exactly once. `shader` is `None` when program creation failed and
/// the loop was told to carry on anyway, in which case frames still advance
/// but nothing is drawn.
#[derive(Debug)]
pub struct SpinningModel {
    mesh: GLMesh,
    shader: Option<ShaderProgram>,
    state: RenderState,
}

impl SpinningModel {
    pub fn new(mesh: GLMesh, shader: Option<ShaderProgram>, rotation_step: f32) -> Self {
        Self {
            mesh,
            shader,
            state: RenderState::new(rotation_step),
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Binds the program, pushes model/view/projection, issues one indexed
    /// draw, then advances the rotation. Clearing and presenting are the
    /// renderer's job.
    pub fn draw(&mut self, camera: &Camera) {
        if self.state.phase() == RenderPhase::Idle {
            log::debug!("first frame, {} indices per draw", self.mesh.index_count);
        }
        let angle_y = self.state.begin_frame();

        if let Some(ref shader) = self.shader {
            shader.bind();

            let transforms = frame_transforms(angle_y, camera);
            shader.set_uniform_matrix4("model", &transforms.model);
            shader.set_uniform_matrix4("projection", &transforms.projection);
            shader.set_uniform_matrix4("view", &transforms.view);

            self.mesh.draw();
        }

        self.state.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::engine::math::matrixfuncs::{IDENTITY_MATRIX, translation_matrix};

    fn camera() -> Camera {
        Camera::from_config(&DemoConfig::default())
    }

    #[test]
    fn first_frame_model_is_identity() {
        let state = RenderState::new(0.1);
        let transforms = frame_transforms(state.angle_y(), &camera());
        assert_eq!(transforms.model, IDENTITY_MATRIX);
        assert_eq!(transforms.view, translation_matrix([0.0, 0.0, -25.0]));
    }

    #[test]
    fn full_turn_is_equivalent_to_identity() {
        let mut state = RenderState::new(0.1);
        for _ in 0..3600 {
            state.begin_frame();
            state.end_frame();
        }
        let model = frame_transforms(state.angle_y(), &camera()).model;
        for (got, want) in model.iter().zip(IDENTITY_MATRIX.iter()) {
            assert!((got - want).abs() < 1e-3, "{model:?}");
        }
    }

    #[test]
    fn only_the_model_matrix_depends_on_angle() {
        let cam = camera();
        let a = frame_transforms(0.0, &cam);
        let b = frame_transforms(45.0, &cam);
        assert_ne!(a.model, b.model);
        assert_eq!(a.view, b.view);
        assert_eq!(a.projection, b.projection);
    }
}
