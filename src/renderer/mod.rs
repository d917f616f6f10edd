//! WebGPU rendering module
//!
//! Flat-shaded triangle lists rebuilt from sim state every frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
