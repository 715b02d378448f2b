use crate::logging::LoggingConfig;

/// What the main loop does when the shader program fails to compile or link.
///
/// Chosen at build time: `Continue` unless the crate is built with the
/// `strict-shaders` feature.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderFailurePolicy {
    /// Log the driver diagnostics and keep the loop running without drawing.
    Continue,
    /// Log the driver diagnostics and exit with the init-failure status.
    Abort,
}

/// Demo configuration.
///
/// Everything is fixed at build time; no command-line arguments are read.
/// `logging` still honors `RUST_LOG` when no explicit filter is set.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub clear_color: [f32; 4],

    /// Distance of the camera from the origin along +Z.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,

    /// Degrees added to the model's Y rotation after every frame.
    pub rotation_step: f32,

    pub shader_failure: ShaderFailurePolicy,
    pub logging: LoggingConfig,
}

impl Default for ShaderFailurePolicy {
    fn default() -> Self {
        if cfg!(feature = "strict-shaders") {
            ShaderFailurePolicy::Abort
        } else {
            ShaderFailurePolicy::Continue
        }
    }
}

impl DemoConfig {
    /// Projection aspect ratio, width / height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Spinning Torus".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            camera_distance: 25.0,
            fov_deg: 60.0,
            near: 0.1,
            far: 200.0,
            rotation_step: 0.1,
            shader_failure: ShaderFailurePolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_float_division() {
        let config = DemoConfig::default();
        assert_eq!(config.aspect(), 800.0f32 / 600.0f32);
        assert_ne!(config.aspect(), (800 / 600) as f32);
    }

    #[test]
    #[cfg(not(feature = "strict-shaders"))]
    fn shader_failures_continue_by_default() {
        assert_eq!(DemoConfig::default().shader_failure, ShaderFailurePolicy::Continue);
    }

    #[test]
    fn policy_follows_build_feature() {
        let expected = if cfg!(feature = "strict-shaders") {
            ShaderFailurePolicy::Abort
        } else {
            ShaderFailurePolicy::Continue
        };
        assert_eq!(ShaderFailurePolicy::default(), expected);
        assert_eq!(DemoConfig::default().shader_failure, expected);
    }
}
