//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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
    pub const BACKGROUND: [f32; 4] = [0.49, 0.76, 0.96, 1.0]; // Daytime sky
    pub const GROUND: [f32; 4] = [0.13, 0.55, 0.26, 1.0];
    pub const GRAPE: [f32; 4] = [0.66, 0.33, 0.97, 1.0];
    pub const GRAPE_HIGHLIGHT: [f32; 4] = [0.85, 0.71, 1.0, 1.0];
    pub const GRAPE_STEM: [f32; 4] = [0.08, 0.50, 0.24, 1.0];
    pub const STONE: [f32; 4] = [0.42, 0.45, 0.50, 1.0];
    pub const STONE_CORE: [f32; 4] = [0.29, 0.33, 0.39, 1.0];
    pub const BASKET: [f32; 4] = [0.71, 0.33, 0.04, 1.0];
    pub const BASKET_RIM: [f32; 4] = [0.57, 0.25, 0.06, 1.0];
}
