//! Per-frame transform state.
//!
//! `RenderState` is the only thing that changes between frames. It is owned by
//! the model and threaded through each draw instead of living in a global.

/// Where the renderer is in its lifecycle. There is no way back to `Idle`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderPhase {
    Idle,
    Rendering,
}

#[derive(Debug, Clone)]
pub struct RenderState {
    /// Model rotation about +Y, in degrees. Never wrapped.
    angle_y: f32,
    /// Degrees added after every frame.
    step: f32,
    frames: u64,
    phase: RenderPhase,
}

impl RenderState {
    pub fn new(step: f32) -> Self {
        debug_assert!(step >= 0.0, "rotation must not run backwards");
        Self {
            angle_y: 0.0,
            step,
            frames: 0,
            phase: RenderPhase::Idle,
        }
    }

    pub fn angle_y(&self) -> f32 {
        self.angle_y
    }

    /// Number of frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Marks the start of a frame and returns the angle to draw it with.
    pub fn begin_frame(&mut self) -> f32 {
        self.phase = RenderPhase::Rendering;
        self.angle_y
    }

    /// Advances the rotation once the frame's draw has been issued.
    pub fn end_frame(&mut self) {
        self.angle_y += self.step;
        self.frames += 1;
    }
}

/// The three matrices pushed to the shader each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub model: [f32; 16],
    pub view: [f32; 16],
    pub projection: [f32; 16],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut RenderState, frames: usize) {
        for _ in 0..frames {
            state.begin_frame();
            state.end_frame();
        }
    }

    #[test]
    fn starts_idle_at_zero() {
        let state = RenderState::new(0.1);
        assert_eq!(state.phase(), RenderPhase::Idle);
        assert_eq!(state.angle_y(), 0.0);
        assert_eq!(state.frames(), 0);
    }

    #[test]
    fn first_frame_draws_at_zero_and_enters_rendering() {
        let mut state = RenderState::new(0.1);
        assert_eq!(state.begin_frame(), 0.0);
        assert_eq!(state.phase(), RenderPhase::Rendering);
        state.end_frame();
        assert_eq!(state.phase(), RenderPhase::Rendering);
        assert_eq!(state.angle_y(), 0.1);
    }

    #[test]
    fn ten_frames_is_one_degree() {
        let mut state = RenderState::new(0.1);
        run(&mut state, 10);
        assert_eq!(state.frames(), 10);
        assert!((state.angle_y() - 1.0).abs() < 1e-5, "{}", state.angle_y());
    }

    #[test]
    fn full_turn_after_3600_frames() {
        let mut state = RenderState::new(0.1);
        run(&mut state, 3600);
        // f32 accumulation drifts a little over thousands of additions.
        assert!((state.angle_y() - 360.0).abs() < 0.05, "{}", state.angle_y());
    }

    #[test]
    fn angle_never_decreases_or_wraps() {
        let mut state = RenderState::new(0.1);
        let mut last = state.angle_y();
        for _ in 0..10_000 {
            state.begin_frame();
            state.end_frame();
            assert!(state.angle_y() > last);
            last = state.angle_y();
        }
        assert!(last > 360.0);
    }
}
