//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Teal (#43c6ac)
    pub const PADDLE: [f32; 4] = [0.263, 0.776, 0.675, 1.0];
    /// Soft glow drawn under paddles and ball
    pub const GLOW: [f32; 4] = [0.263, 0.776, 0.675, 0.25];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const MID_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.25];
    /// Dims the frozen court after the match
    pub const GAME_OVER_OVERLAY: [f32; 4] = [0.098, 0.086, 0.329, 0.55];
    /// Deep indigo (#191654)
    pub const BACKGROUND: [f32; 4] = [0.098, 0.086, 0.329, 1.0];
}
