//! Accumulating vertex/index storage used while building a mesh

use glam::{Vec2, Vec3};

use crate::constants::DEFAULT_MESH_NAME;
use crate::mesh::{Mesh, MeshError};

/// Parallel vertex attribute sequences plus a triangle index list.
///
/// Attributes only grow in lockstep through [`MeshBuffer::append_vertex`], so
/// positions, normals and uvs always have the same length.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all sequences, keeping their allocations
    pub fn reset(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Append one vertex and return its index
    pub fn append_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        (self.positions.len() - 1) as u32
    }

    /// Append one triangle.
    ///
    /// Every index must refer to an already appended vertex; otherwise nothing
    /// is appended and [`MeshError::InvalidIndex`] is returned.
    pub fn append_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> Result<(), MeshError> {
        let vertex_count = self.positions.len();
        if let Some(index) = [i0, i1, i2]
            .into_iter()
            .find(|&i| i as usize >= vertex_count)
        {
            return Err(MeshError::InvalidIndex {
                index,
                vertex_count,
            });
        }

        self.indices.extend_from_slice(&[i0, i1, i2]);
        Ok(())
    }

    /// Snapshot the current contents as a named [`Mesh`].
    ///
    /// The buffer is left untouched; call [`MeshBuffer::reset`] before the
    /// next build.
    pub fn finalize(&self, name: impl Into<String>) -> Mesh {
        Mesh {
            name: name.into(),
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            uvs: self.uvs.clone(),
            indices: self.indices.clone(),
        }
    }

    /// Snapshot with the default mesh name
    pub fn finalize_unnamed(&self) -> Mesh {
        self.finalize(DEFAULT_MESH_NAME)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }
}
