//! Mesh consumers and the component that feeds them

use crate::config::MeshParams;
use crate::export::ExportError;
use crate::mesh::{Mesh, MeshError};
use crate::primitive::{PrimitiveBuilder, PrimitiveKind};

/// Receives finished meshes.
///
/// Implementations own whatever happens next: bounds, GPU upload, collision
/// registration, file output.
pub trait MeshSink {
    fn accept(&mut self, mesh: Mesh) -> Result<(), SinkError>;
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    fn accept(&mut self, mesh: Mesh) -> Result<(), SinkError> {
        (**self).accept(mesh)
    }
}

/// In-memory sink keeping every accepted mesh
#[derive(Debug, Default)]
pub struct MeshCollector {
    meshes: Vec<Mesh>,
}

impl MeshCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently accepted mesh
    pub fn last(&self) -> Option<&Mesh> {
        self.meshes.last()
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn into_meshes(self) -> Vec<Mesh> {
        self.meshes
    }
}

impl MeshSink for MeshCollector {
    fn accept(&mut self, mesh: Mesh) -> Result<(), SinkError> {
        self.meshes.push(mesh);
        Ok(())
    }
}

/// Sink that only reports what it receives
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl MeshSink for LogSink {
    fn accept(&mut self, mesh: Mesh) -> Result<(), SinkError> {
        let bbox = mesh.bounding_box();
        tracing::info!(
            "Mesh '{}': {} vertices, {} triangles, bounds {:?}..{:?}",
            mesh.name,
            mesh.vertex_count(),
            mesh.triangle_count(),
            bbox.min,
            bbox.max
        );
        Ok(())
    }
}

/// Owns the primitive parameters, a builder and the sink results go to.
///
/// Each `create_*` call rebuilds from the current parameters, validates the
/// mesh and hands it to the sink. A mesh failing validation is never passed on.
#[derive(Debug)]
pub struct MeshCreator<S: MeshSink> {
    pub params: MeshParams,
    builder: PrimitiveBuilder,
    sink: S,
}

impl<S: MeshSink> MeshCreator<S> {
    pub fn new(params: MeshParams, sink: S) -> Self {
        Self {
            params,
            builder: PrimitiveBuilder::with_uv_layout(params.uv_layout),
            sink,
        }
    }

    /// Build a quad from `width` and `length` and hand it to the sink
    pub fn create_quad_mesh(&mut self) -> Result<(), SinkError> {
        self.create(PrimitiveKind::Quad)
    }

    /// Build a box from `width`, `height` and `length` and hand it to the sink
    pub fn create_cube_mesh(&mut self) -> Result<(), SinkError> {
        self.create(PrimitiveKind::Cube)
    }

    pub fn create(&mut self, kind: PrimitiveKind) -> Result<(), SinkError> {
        let MeshParams {
            width,
            height,
            length,
            uv_layout,
        } = self.params;

        self.builder.set_uv_layout(uv_layout);
        let mesh = self.builder.create(kind, width, height, length)?;
        mesh.validate()?;

        tracing::debug!(
            "Built {} ({} x {} x {}, {} UVs): {} vertices, {} triangles",
            kind.name(),
            width,
            height,
            length,
            uv_layout.name(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        self.sink.accept(mesh)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Sink-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
    #[error("Sink rejected mesh: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::UvLayout;

    #[test]
    fn test_creator_hands_meshes_to_sink() {
        let mut creator = MeshCreator::new(MeshParams::new(2.0, 3.0, 4.0), MeshCollector::new());
        creator.create_quad_mesh().unwrap();
        creator.create_cube_mesh().unwrap();

        let sink = creator.into_sink();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.last().map(|m| m.name.as_str()), Some("Cube"));

        let meshes = sink.into_meshes();
        assert_eq!(meshes[0].name, "Quad");
        assert_eq!(meshes[0].vertex_count(), 4);

        let cube = &meshes[1];
        assert_eq!(cube.name, "Cube");
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.bounding_box().size(), glam::Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_creator_follows_param_changes() {
        let mut collector = MeshCollector::new();
        let mut creator = MeshCreator::new(MeshParams::default(), &mut collector);
        creator.create_cube_mesh().unwrap();

        creator.params.width = 5.0;
        creator.params.uv_layout = UvLayout::UnitSquare;
        creator.create_cube_mesh().unwrap();

        let meshes = collector.meshes();
        assert_eq!(meshes[0].bounding_box().size().x, 1.0);
        assert_eq!(meshes[1].bounding_box().size().x, 5.0);
        assert_eq!(meshes[1].uvs[3], glam::Vec2::Y);
    }

    #[test]
    fn test_sink_errors_propagate() {
        struct Rejecting;
        impl MeshSink for Rejecting {
            fn accept(&mut self, mesh: Mesh) -> Result<(), SinkError> {
                Err(SinkError::Rejected(mesh.name))
            }
        }

        let mut creator = MeshCreator::new(MeshParams::default(), Rejecting);
        assert!(matches!(
            creator.create_quad_mesh(),
            Err(SinkError::Rejected(name)) if name == "Quad"
        ));
    }

    #[test]
    fn test_log_sink_accepts() {
        let mut creator = MeshCreator::new(MeshParams::new(0.0, 0.0, 0.0), LogSink);
        creator.create_cube_mesh().unwrap();
    }
}
