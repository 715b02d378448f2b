use std::any::Any;
use std::ffi::CStr;
use std::panic::{self, UnwindSafe};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use glutin::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
    Api,
    ContextBuilder,
    ContextWrapper,
    GlProfile,
    GlRequest,
    PossiblyCurrent,
};

use crate::config::DemoConfig;
use crate::engine::camera::Camera;
use crate::engine::model::SpinningModel;

/// How often the frame rate is sampled for the debug log.
const FPS_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// `Renderer` owns the window, its OpenGL context and the event loop.
///
/// Built on `glutin`: the window and a 3.3 core context with a depth buffer are
/// created together, made current on this thread, and the `gl` crate's
/// function pointers are loaded from it.
///
/// # Ownership
///
/// `run` borrows the event loop through `run_return`, so control comes back
/// to the caller once the window closes. The model handed to `run` is dropped
/// there, while the context is still current, and the window goes away when
/// the `Renderer` itself is dropped.
pub struct Renderer {
    /// The event loop responsible for driving window events and rendering
    event_loop: EventLoop<()>,

    /// The OpenGL context tied to a window, in the `PossiblyCurrent` state,
    /// meaning OpenGL commands can be issued.
    windowed_context: ContextWrapper<PossiblyCurrent, Window>,

    camera: Camera,
}

impl Renderer {
    /// Creates the window and context described by `config`.
    ///
    /// # Errors
    /// Fails if no windowing backend can be initialized, or if the window or
    /// the OpenGL context cannot be created or made current. The caller treats
    /// all of these as fatal.
    pub fn new(config: &DemoConfig) -> Result<Self> {
        // winit panics instead of returning an error when no backend is available.
        let event_loop = init_backend(EventLoop::new)
            .context("failed to initialize the windowing backend")?;

        let wb = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false);

        let windowed_context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .with_depth_buffer(24)
            .with_vsync(config.vsync)
            .build_windowed(wb, &event_loop)
            .context("failed to create window with an OpenGL 3.3 core context")?;

        // Required before issuing any GL call.
        let windowed_context = unsafe { windowed_context.make_current() }
            .map_err(|(_, err)| anyhow!(err))
            .context("failed to make the OpenGL context current")?;

        gl::load_with(|symbol| windowed_context.get_proc_address(symbol) as *const _);

        log::info!(
            "window created: \"{}\" {}x{}, {} ({})",
            config.title,
            config.width,
            config.height,
            gl_string(gl::VERSION),
            gl_string(gl::RENDERER),
        );

        let renderer = Self {
            event_loop,
            windowed_context,
            camera: Camera::from_config(config),
        };
        let [r, g, b, a] = config.clear_color;
        renderer.set_clear_color(r, g, b, a);

        Ok(renderer)
    }

    /// Sets the color used by subsequent clears.
    pub fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe {
            gl::ClearColor(r, g, b, a);
        }
    }

    pub fn enable_depth_test(&self) {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
        }
    }

    /// Renders `model` every iteration until the window is closed.
    ///
    /// Each pass of the loop renders one frame, presents it, then lets the
    /// event loop poll for window events. `CloseRequested` ends the loop; the
    /// model (mesh buffers and shader program) is released before this
    /// returns.
    pub fn run(&mut self, mut model: SpinningModel) {
        let mut fps_window_start = Instant::now();
        let mut fps_window_frames = 0u64;

        let Renderer {
            event_loop,
            windowed_context,
            camera,
        } = self;

        event_loop.run_return(|event, _, control_flow| {
            // Keep spinning without waiting for input; never undo a requested exit.
            if *control_flow != ControlFlow::Exit {
                *control_flow = ControlFlow::Poll;
            }

            match event {
                Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                    log::info!("close requested after {} frames", model.state().frames());
                    *control_flow = ControlFlow::Exit;
                }

                Event::MainEventsCleared => {
                    clear_frame();
                    model.draw(camera);
                    present(windowed_context);

                    fps_window_frames += 1;
                    let elapsed = fps_window_start.elapsed();
                    if elapsed >= FPS_SAMPLE_INTERVAL {
                        log::debug!(
                            "{:.1} fps, angle {:.1} deg",
                            fps_window_frames as f64 / elapsed.as_secs_f64(),
                            model.state().angle_y(),
                        );
                        fps_window_start = Instant::now();
                        fps_window_frames = 0;
                    }
                }

                _ => {}
            }
        });

        drop(model);
        log::info!("render loop finished");
    }
}

/// Runs a backend initializer, turning a panic inside it into an error that
/// carries the panic message.
///
/// # Parameters
/// - `init`: the initializer, typically `EventLoop::new`.
///
/// # Returns
/// The initializer's value, or an error if it panicked.
fn init_backend<T>(init: impl FnOnce() -> T + UnwindSafe) -> Result<T> {
    panic::catch_unwind(init).map_err(|payload| anyhow!(panic_message(&*payload)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "backend initializer panicked".to_string()
    }
}

/// Clears color and depth.
fn clear_frame() {
    unsafe {
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}

/// Presents the back buffer. A failed swap is logged and the loop carries on.
fn present(windowed_context: &ContextWrapper<PossiblyCurrent, Window>) {
    if let Err(err) = windowed_context.swap_buffers() {
        log::warn!("swap_buffers failed: {err}");
    }
}

/// Reads a `glGetString` value, or "unknown" if the driver returns null.
fn gl_string(name: gl::types::GLenum) -> String {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            return "unknown".to_string();
        }
        CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_value_passes_through() {
        assert_eq!(init_backend(|| 42).unwrap(), 42);
    }

    #[test]
    fn backend_panic_becomes_error() {
        let err = init_backend(|| -> u32 { panic!("Failed to initialize any backend!") })
            .context("failed to initialize the windowing backend")
            .unwrap_err();
        let text = format!("{err:#}");
        assert!(text.starts_with("failed to initialize the windowing backend"));
        assert!(text.contains("Failed to initialize any backend!"));
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let code = 7;
        let err = init_backend(|| -> u32 { panic!("no display (code {code})") }).unwrap_err();
        assert_eq!(err.to_string(), "no display (code 7)");
    }

    #[test]
    fn unknown_payload_has_fallback_message() {
        let err = init_backend(|| -> u32 { std::panic::panic_any(5u8) }).unwrap_err();
        assert_eq!(err.to_string(), "backend initializer panicked");
    }
}
