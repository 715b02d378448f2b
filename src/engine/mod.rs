pub mod camera;
pub mod frame;
pub mod geometry;
pub mod math;
mod mesh_data;
pub mod model;
pub mod renderer;
pub mod shader;
