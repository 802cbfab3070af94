//! Global constants for mc-core

/// Default width, height and length of a generated primitive
pub const DEFAULT_DIMENSION: f32 = 1.0;

/// Name given to meshes finalized without an explicit name
pub const DEFAULT_MESH_NAME: &str = "mesh";

/// Name of the mesh produced by `create_quad_mesh`
pub const QUAD_MESH_NAME: &str = "Quad";

/// Name of the mesh produced by `create_cube_mesh`
pub const CUBE_MESH_NAME: &str = "Cube";

/// Vertices appended per quad (one per corner, no sharing between faces)
pub const QUAD_VERTEX_COUNT: usize = 4;

/// Indices appended per quad (two triangles)
pub const QUAD_INDEX_COUNT: usize = 6;

/// Tolerance used when comparing generated floating point data
pub const GEOMETRY_EPSILON: f32 = 1e-5;
