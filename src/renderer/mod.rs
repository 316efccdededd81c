//! WebGPU rendering module
//!
//! Rebuilds a flat-shaded triangle list from the game state every frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
