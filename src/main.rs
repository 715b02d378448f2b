use std::process;

use anyhow::Result;

use crate::config::{DemoConfig, ShaderFailurePolicy};
use crate::engine::geometry::{GLMesh, Geometry};
use crate::engine::model::SpinningModel;
use crate::engine::renderer::Renderer;
use crate::engine::shader::{FRAGMENT_SHADER_SRC, ShaderError, ShaderProgram, VERTEX_SHADER_SRC};

mod config;
mod engine;
mod logging;

/// Exit status for any failure before the render loop starts.
const INIT_FAILURE_EXIT: i32 = -1;

fn main() {
    let config = DemoConfig::default();
    logging::init_logging(config.logging.clone());

    if let Err(err) = run(&config) {
        log::error!("{err:#}");
        process::exit(INIT_FAILURE_EXIT);
    }
}

fn run(config: &DemoConfig) -> Result<()> {
    let mut renderer = Renderer::new(config)?;
    renderer.enable_depth_test();

    let shader = apply_shader_policy(
        ShaderProgram::build(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC),
        config.shader_failure,
    )?;
    if let Some(ref program) = shader {
        log::info!("shader program {} ready", program.id());
    }

    let mesh = GLMesh::upload(&Geometry::builtin());
    renderer.run(SpinningModel::new(mesh, shader, config.rotation_step));

    Ok(())
}

/// Decides what a failed program build means for the loop. The error itself
/// has already been logged with the driver's diagnostics.
fn apply_shader_policy<T>(
    built: Result<T, ShaderError>,
    policy: ShaderFailurePolicy,
) -> Result<Option<T>, ShaderError> {
    match built {
        Ok(program) => Ok(Some(program)),
        Err(err) => match policy {
            ShaderFailurePolicy::Continue => {
                log::warn!("continuing without a usable shader program: {err}");
                Ok(None)
            }
            ShaderFailurePolicy::Abort => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::shader::ShaderStage;

    fn compile_failure() -> Result<(), ShaderError> {
        Err(ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "0:2(1): error: syntax error".to_string(),
        })
    }

    #[test]
    fn built_program_passes_through() {
        assert_eq!(apply_shader_policy(Ok(7), ShaderFailurePolicy::Abort), Ok(Some(7)));
        assert_eq!(apply_shader_policy(Ok(7), ShaderFailurePolicy::Continue), Ok(Some(7)));
    }

    #[test]
    fn continue_policy_keeps_running_without_program() {
        assert_eq!(apply_shader_policy(compile_failure(), ShaderFailurePolicy::Continue), Ok(None));
    }

    #[test]
    fn abort_policy_surfaces_the_diagnostic() {
        let err = apply_shader_policy(compile_failure(), ShaderFailurePolicy::Abort).unwrap_err();
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn init_failure_is_nonzero() {
        assert_ne!(INIT_FAILURE_EXIT, 0);
    }
}
