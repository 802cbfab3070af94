//! Quad (planar parallelogram) mesh generation

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::buffer::MeshBuffer;
use crate::constants::QUAD_VERTEX_COUNT;
use crate::mesh::MeshError;

/// Texture coordinate assignment for the four corners of a quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UvLayout {
    /// (0,0), (1,0), (1,1), (1,1): the fourth corner repeats the third
    /// corner's coordinate. Kept as the default so existing materials map
    /// the same way.
    #[default]
    Legacy,
    /// (0,0), (1,0), (1,1), (0,1): the full unit square
    UnitSquare,
}

impl UvLayout {
    /// UVs for corners `origin`, `+length`, `+length+width`, `+width`
    pub fn corners(&self) -> [Vec2; 4] {
        match self {
            UvLayout::Legacy => [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::ONE],
            UvLayout::UnitSquare => [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UvLayout::Legacy => "Legacy",
            UvLayout::UnitSquare => "Unit square",
        }
    }

    pub const ALL: &'static [UvLayout] = &[UvLayout::Legacy, UvLayout::UnitSquare];
}

/// Append a quad with the default UV layout
///
/// # Arguments
/// * `origin` - First corner
/// * `width_dir` - Edge from `origin` to the fourth corner
/// * `length_dir` - Edge from `origin` to the second corner
///
/// The face normal is `length_dir × width_dir`, normalized.
pub fn build_quad(
    buffer: &mut MeshBuffer,
    origin: Vec3,
    width_dir: Vec3,
    length_dir: Vec3,
) -> Result<(), MeshError> {
    build_quad_with_uvs(buffer, origin, width_dir, length_dir, UvLayout::default())
}

/// Append a quad with an explicit UV layout
///
/// Adds 4 vertices sharing one normal and 2 triangles fanned from `origin`.
/// The triangle winding is counter-clockwise around the normal, since both
/// are derived from the same edge pair.
pub fn build_quad_with_uvs(
    buffer: &mut MeshBuffer,
    origin: Vec3,
    width_dir: Vec3,
    length_dir: Vec3,
    uv_layout: UvLayout,
) -> Result<(), MeshError> {
    // Parallel or zero edges give a zero normal rather than NaN
    let normal = length_dir.cross(width_dir).normalize_or_zero();

    let corners = [
        origin,
        origin + length_dir,
        origin + length_dir + width_dir,
        origin + width_dir,
    ];

    for (position, uv) in corners.into_iter().zip(uv_layout.corners()) {
        buffer.append_vertex(position, normal, uv);
    }

    let base = (buffer.vertex_count() - QUAD_VERTEX_COUNT) as u32;
    buffer.append_triangle(base, base + 1, base + 2)?;
    buffer.append_triangle(base, base + 2, base + 3)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GEOMETRY_EPSILON, QUAD_INDEX_COUNT};

    #[test]
    fn test_quad_layout() {
        let mut buffer = MeshBuffer::new();
        build_quad(
            &mut buffer,
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 3.0),
        )
        .unwrap();

        assert_eq!(
            buffer.positions(),
            &[
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 3.0),
                Vec3::new(2.0, 0.0, 3.0),
                Vec3::new(2.0, 0.0, 0.0),
            ]
        );
        assert_eq!(buffer.indices(), &[0, 1, 2, 0, 2, 3]);
        assert!(buffer.normals().iter().all(|&n| n == Vec3::Y));
        assert_eq!(buffer.uvs(), &[Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::ONE]);
    }

    #[test]
    fn test_quad_counts_and_normals() {
        let cases = [
            (Vec3::X, Vec3::Y),
            (Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.0, 1.0, 3.0)),
            (Vec3::new(-4.0, 0.5, 1.0), Vec3::new(2.0, 2.0, -1.0)),
        ];

        for (width_dir, length_dir) in cases {
            let mut buffer = MeshBuffer::new();
            build_quad(&mut buffer, Vec3::ONE, width_dir, length_dir).unwrap();

            assert_eq!(buffer.vertex_count(), QUAD_VERTEX_COUNT);
            assert_eq!(buffer.indices().len(), QUAD_INDEX_COUNT);

            let expected = length_dir.cross(width_dir).normalize();
            for n in buffer.normals() {
                assert!(n.abs_diff_eq(expected, GEOMETRY_EPSILON));
            }
        }
    }

    #[test]
    fn test_quad_winding_matches_normal() {
        let mut buffer = MeshBuffer::new();
        build_quad(
            &mut buffer,
            Vec3::new(1.0, -1.0, 0.5),
            Vec3::new(0.0, 2.0, 1.0),
            Vec3::new(3.0, 0.0, 0.0),
        )
        .unwrap();

        let mesh = buffer.finalize("quad");
        for t in 0..mesh.triangle_count() {
            let geometric = mesh.triangle_normal(t).unwrap();
            assert!(geometric.dot(mesh.normals[0]) > 0.0);
        }
    }

    #[test]
    fn test_quad_appends_after_existing_vertices() {
        let mut buffer = MeshBuffer::new();
        build_quad(&mut buffer, Vec3::ZERO, Vec3::X, Vec3::Z).unwrap();
        build_quad(&mut buffer, Vec3::Y, Vec3::X, Vec3::Z).unwrap();

        assert_eq!(buffer.vertex_count(), 8);
        assert_eq!(&buffer.indices()[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_unit_square_uvs() {
        let mut buffer = MeshBuffer::new();
        build_quad_with_uvs(&mut buffer, Vec3::ZERO, Vec3::X, Vec3::Z, UvLayout::UnitSquare)
            .unwrap();
        assert_eq!(buffer.uvs(), &[Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y]);
    }

    #[test]
    fn test_layouts_agree_on_first_three_corners() {
        for &layout in UvLayout::ALL {
            let mut buffer = MeshBuffer::new();
            build_quad_with_uvs(&mut buffer, Vec3::ZERO, Vec3::X, Vec3::Z, layout).unwrap();

            let first_three = &buffer.uvs()[..3];
            assert_eq!(first_three, &[Vec2::ZERO, Vec2::X, Vec2::ONE]);
            assert!(!layout.name().is_empty());
        }
    }

    #[test]
    fn test_degenerate_quad() {
        let mut buffer = MeshBuffer::new();
        build_quad(&mut buffer, Vec3::ZERO, Vec3::ZERO, Vec3::Z).unwrap();

        assert_eq!(buffer.vertex_count(), 4);
        assert_eq!(buffer.triangle_count(), 2);
        assert!(buffer.normals().iter().all(|&n| n == Vec3::ZERO));
    }
}
