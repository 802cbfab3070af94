//! Interleaved vertex layout for hosts that upload meshes to the GPU

use bytemuck::{Pod, Zeroable};

use crate::mesh::Mesh;

/// Vertex with position, normal, and texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Vertex position in local space.
    pub position: [f32; 3],
    /// Vertex normal vector.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

impl Mesh {
    /// Interleave the attribute sequences into one vertex per position.
    ///
    /// Missing normals or uvs are filled with zeros.
    pub fn interleaved_vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, position)| {
                let normal = self.normals.get(i).copied().unwrap_or_default();
                let uv = self.uvs.get(i).copied().unwrap_or_default();
                MeshVertex::new(position.to_array(), normal.to_array(), uv.to_array())
            })
            .collect()
    }

    /// Raw bytes of the interleaved vertex buffer
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved_vertices()).to_vec()
    }

    /// Raw bytes of the index buffer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
