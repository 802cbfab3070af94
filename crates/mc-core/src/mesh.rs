//! Finished mesh data handed to a sink

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A finished triangle mesh.
///
/// `normals` and `uvs` are each either empty or exactly one entry per
/// position. `indices` holds one triangle per consecutive triple, wound
/// counter-clockwise when seen from the side its normal points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    /// Vertex positions in local space (pivot at the origin)
    pub positions: Vec<Vec3>,
    /// Per-vertex normals
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates
    pub uvs: Vec<Vec2>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Geometric normal of triangle `triangle`, derived from its winding.
    ///
    /// Returns `None` if the triangle does not exist. Degenerate triangles
    /// yield a zero vector.
    pub fn triangle_normal(&self, triangle: usize) -> Option<Vec3> {
        let [i0, i1, i2] = self.triangles().nth(triangle)?;
        let p0 = *self.positions.get(i0 as usize)?;
        let p1 = *self.positions.get(i1 as usize)?;
        let p2 = *self.positions.get(i2 as usize)?;
        Some((p1 - p0).cross(p2 - p0).normalize_or_zero())
    }

    /// Check the attribute and index invariants.
    pub fn validate(&self) -> Result<(), MeshError> {
        let expected = self.positions.len();

        if self.has_normals() && self.normals.len() != expected {
            return Err(MeshError::AttributeMismatch {
                attribute: "normals",
                len: self.normals.len(),
                expected,
            });
        }
        if self.has_uvs() && self.uvs.len() != expected {
            return Err(MeshError::AttributeMismatch {
                attribute: "uvs",
                len: self.uvs.len(),
                expected,
            });
        }
        if !self.indices.len().is_multiple_of(3) {
            return Err(MeshError::IncompleteTriangle {
                len: self.indices.len(),
            });
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= expected) {
            return Err(MeshError::InvalidIndex {
                index,
                vertex_count: expected,
            });
        }

        Ok(())
    }

    /// Recompute the axis-aligned bounds of all positions
    pub fn bounding_box(&self) -> BoundingBox {
        if self.positions.is_empty() {
            return BoundingBox::new(Vec3::ZERO, Vec3::ZERO);
        }
        BoundingBox::from_points(self.positions.iter().copied())
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an empty (inverted) bounding box.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Creates a bounding box that contains all given points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |bbox, point| bbox.expand_to_include(point))
    }

    /// Returns a box grown to contain `point`.
    pub fn expand_to_include(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns true if the point lies inside or on the boundary, with `epsilon`
    /// slack on every side.
    pub fn contains_point(&self, point: Vec3, epsilon: f32) -> bool {
        point.cmpge(self.min - Vec3::splat(epsilon)).all()
            && point.cmple(self.max + Vec3::splat(epsilon)).all()
    }
}

/// Mesh-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("Invalid index {index}: mesh has {vertex_count} vertices")]
    InvalidIndex { index: u32, vertex_count: usize },
    #[error("Attribute {attribute} has {len} entries, expected 0 or {expected}")]
    AttributeMismatch {
        attribute: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("Index count {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new("tri");
        mesh.positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        mesh.indices = vec![0, 1, 2];
        mesh
    }

    #[test]
    fn test_validate_positions_only() {
        assert_eq!(triangle_mesh().validate(), Ok(()));
    }

    #[test]
    fn test_validate_attribute_mismatch() {
        let mut mesh = triangle_mesh();
        mesh.normals = vec![Vec3::Z; 2];
        assert_eq!(
            mesh.validate(),
            Err(MeshError::AttributeMismatch {
                attribute: "normals",
                len: 2,
                expected: 3,
            })
        );

        let mut mesh = triangle_mesh();
        mesh.uvs = vec![Vec2::ZERO; 4];
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::AttributeMismatch { attribute: "uvs", .. })
        ));
    }

    #[test]
    fn test_validate_indices() {
        let mut mesh = triangle_mesh();
        mesh.indices.push(0);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IncompleteTriangle { len: 4 })
        );

        let mut mesh = triangle_mesh();
        mesh.indices = vec![0, 1, 3];
        assert_eq!(
            mesh.validate(),
            Err(MeshError::InvalidIndex {
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn test_triangle_normal() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.triangle_normal(0), Some(Vec3::Z));
        assert_eq!(mesh.triangle_normal(1), None);
    }

    #[test]
    fn test_bounding_box() {
        let mut mesh = Mesh::new("points");
        mesh.positions = vec![Vec3::new(-1.0, 2.0, 0.5), Vec3::new(3.0, -2.0, -0.5)];
        let bbox = mesh.bounding_box();
        assert_eq!(bbox.min, Vec3::new(-1.0, -2.0, -0.5));
        assert_eq!(bbox.max, Vec3::new(3.0, 2.0, 0.5));
        assert_eq!(bbox.center(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bbox.size(), Vec3::new(4.0, 4.0, 1.0));
        assert_eq!(bbox.half_extents(), Vec3::new(2.0, 2.0, 0.5));
        assert!(bbox.contains_point(Vec3::ZERO, 0.0));
        assert!(!bbox.contains_point(Vec3::new(0.0, 0.0, 1.0), 0.0));
    }

    #[test]
    fn test_bounding_box_empty_mesh() {
        let bbox = Mesh::new("empty").bounding_box();
        assert_eq!(bbox.min, Vec3::ZERO);
        assert_eq!(bbox.max, Vec3::ZERO);
    }
}
