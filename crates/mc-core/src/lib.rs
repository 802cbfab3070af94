//! Mesh Creator Core
//!
//! Procedural triangle mesh generation for two parametric primitives:
//! - Quad: a single planar face spanned by two edge vectors
//! - Cube: an axis-aligned box built from six quads, pivot at its center
//!
//! Geometry is accumulated in a [`MeshBuffer`], read out as a [`Mesh`] and
//! handed to a [`MeshSink`] (in-memory, logging or file export).

pub mod buffer;
pub mod config;
pub mod constants;
pub mod export;
pub mod mesh;
pub mod primitive;
pub mod sink;
pub mod vertex;

pub use buffer::*;
pub use config::*;
pub use constants::*;
pub use export::*;
pub use mesh::*;
pub use primitive::*;
pub use sink::*;
pub use vertex::*;
