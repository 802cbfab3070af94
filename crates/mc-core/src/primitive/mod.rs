//! Primitive mesh generation
//!
//! Generates positions, normals, uvs and indices for basic shapes:
//! - Quad (single face)
//! - Box (six quads, pivot at the center)

mod box_mesh;
mod quad;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use box_mesh::{build_box, build_box_with_uvs};
pub use quad::{UvLayout, build_quad, build_quad_with_uvs};

use crate::buffer::MeshBuffer;
use crate::constants::{CUBE_MESH_NAME, QUAD_MESH_NAME};
use crate::mesh::{Mesh, MeshError};

/// Primitive shapes the builder can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Quad,
    #[default]
    Cube,
}

impl PrimitiveKind {
    /// Name given to the generated mesh
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Quad => QUAD_MESH_NAME,
            PrimitiveKind::Cube => CUBE_MESH_NAME,
        }
    }

    pub const ALL: &'static [PrimitiveKind] = &[PrimitiveKind::Quad, PrimitiveKind::Cube];
}

/// Builds primitive meshes into an owned, reusable buffer.
///
/// The buffer is reset at the start of every `create_*` call, so one builder
/// can serve any number of sequential requests.
#[derive(Debug, Default)]
pub struct PrimitiveBuilder {
    buffer: MeshBuffer,
    uv_layout: UvLayout,
}

impl PrimitiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder using a non-default UV layout for every face
    pub fn with_uv_layout(uv_layout: UvLayout) -> Self {
        Self {
            buffer: MeshBuffer::new(),
            uv_layout,
        }
    }

    pub fn uv_layout(&self) -> UvLayout {
        self.uv_layout
    }

    pub fn set_uv_layout(&mut self, uv_layout: UvLayout) {
        self.uv_layout = uv_layout;
    }

    /// The working buffer (contents of the last build)
    pub fn buffer(&self) -> &MeshBuffer {
        &self.buffer
    }

    /// Quad in the XZ plane with one corner at the origin, facing +Y
    pub fn create_quad_mesh(&mut self, width: f32, length: f32) -> Result<Mesh, MeshError> {
        self.buffer.reset();
        build_quad_with_uvs(
            &mut self.buffer,
            Vec3::ZERO,
            Vec3::X * width,
            Vec3::Z * length,
            self.uv_layout,
        )?;
        Ok(self.buffer.finalize(QUAD_MESH_NAME))
    }

    /// Box centered on the origin
    pub fn create_cube_mesh(
        &mut self,
        width: f32,
        height: f32,
        length: f32,
    ) -> Result<Mesh, MeshError> {
        self.buffer.reset();
        build_box_with_uvs(&mut self.buffer, width, height, length, self.uv_layout)?;
        Ok(self.buffer.finalize(CUBE_MESH_NAME))
    }

    /// Build `kind`; `height` is ignored for quads
    pub fn create(
        &mut self,
        kind: PrimitiveKind,
        width: f32,
        height: f32,
        length: f32,
    ) -> Result<Mesh, MeshError> {
        match kind {
            PrimitiveKind::Quad => self.create_quad_mesh(width, length),
            PrimitiveKind::Cube => self.create_cube_mesh(width, height, length),
        }
    }
}
