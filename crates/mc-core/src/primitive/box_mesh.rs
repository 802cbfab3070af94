//! Box (rectangular prism) mesh generation

use glam::Vec3;

use super::quad::{UvLayout, build_quad_with_uvs};
use crate::buffer::MeshBuffer;
use crate::mesh::MeshError;

/// Append a box centered on the origin with the default UV layout
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `length` - Extent along Z
///
/// Adds 24 vertices (4 per face, so every face keeps its own normal) and
/// 12 triangles.
pub fn build_box(
    buffer: &mut MeshBuffer,
    width: f32,
    height: f32,
    length: f32,
) -> Result<(), MeshError> {
    build_box_with_uvs(buffer, width, height, length, UvLayout::default())
}

/// Append a box centered on the origin with an explicit UV layout
pub fn build_box_with_uvs(
    buffer: &mut MeshBuffer,
    width: f32,
    height: f32,
    length: f32,
    uv_layout: UvLayout,
) -> Result<(), MeshError> {
    let up = Vec3::Y * height;
    let right = Vec3::X * width;
    let forward = Vec3::Z * length;

    // Pivot at the middle of the box
    let far_corner = (up + right + forward) / 2.0;
    let near_corner = -far_corner;

    // (origin, width_dir, length_dir); each pair is ordered so that
    // length_dir × width_dir points away from the center.
    let faces = [
        // -Y, -Z, -X
        (near_corner, forward, right),
        (near_corner, right, up),
        (near_corner, up, forward),
        // +Y, +Z, +X
        (far_corner, -right, -forward),
        (far_corner, -up, -right),
        (far_corner, -forward, -up),
    ];

    for (origin, width_dir, length_dir) in faces {
        build_quad_with_uvs(buffer, origin, width_dir, length_dir, uv_layout)?;
    }

    Ok(())
}
