//! Shape primitives - vertices for dots, lines and rings
//!
//! Everything is emitted as triangle lists in clip space. Round shapes take
//! the canvas aspect ratio so they stay round on a non-square canvas.

use std::f32::consts::TAU;

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Filled dot (triangle fan unrolled into a list)
pub fn create_circle_vertices(
    cx: f32,
    cy: f32,
    radius: f32,
    aspect: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let rx = radius / aspect;

    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * TAU;
        let a2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex { position: [cx, cy], color });
        vertices.push(Vertex {
            position: [cx + rx * a1.cos(), cy + radius * a1.sin()],
            color,
        });
        vertices.push(Vertex {
            position: [cx + rx * a2.cos(), cy + radius * a2.sin()],
            color,
        });
    }

    vertices
}

/// Line segment rendered as a thin quad
pub fn create_line_vertices(
    x1: f32, y1: f32,
    x2: f32, y2: f32,
    width: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.0001 { return vec![]; }

    // Perpendicular direction for line thickness
    let px = -dy / len * width;
    let py = dx / len * width;

    vec![
        Vertex { position: [x1 - px, y1 - py], color },
        Vertex { position: [x1 + px, y1 + py], color },
        Vertex { position: [x2 + px, y2 + py], color },

        Vertex { position: [x1 - px, y1 - py], color },
        Vertex { position: [x2 + px, y2 + py], color },
        Vertex { position: [x2 - px, y2 - py], color },
    ]
}

/// Circle outline: one quad per segment
pub fn create_ring_vertices(
    cx: f32,
    cy: f32,
    radius: f32,
    aspect: f32,
    width: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let point = |i: u32| {
        let a = (i as f32 / segments as f32) * TAU;
        (cx + radius / aspect * a.cos(), cy + radius * a.sin())
    };

    for i in 0..segments {
        let (x1, y1) = point(i);
        let (x2, y2) = point(i + 1);
        vertices.extend(create_line_vertices(x1, y1, x2, y2, width, color));
    }

    vertices
}
