// src/vertex.rs

use bytemuck::{Pod, Zeroable};

use crate::face::Face;

/// Flat-shaded hull vertex, laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct HullVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl HullVertex {
    pub const STRIDE: usize = std::mem::size_of::<HullVertex>();
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();

    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    /// The three corners of `face`, each carrying the face normal. Positions
    /// are multiplied by `scale` (the renderer's global scale factor).
    pub fn from_face(face: &Face, scale: f64) -> [HullVertex; 3] {
        let normal = face.normal().as_vec3().to_array();
        let corners = *face.corners();
        corners.map(|corner| HullVertex::new((corner * scale).as_vec3().to_array(), normal))
    }
}

pub fn vertex_bytes(vertices: &[HullVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
