//! Mesh file export (STL, RON)

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::mesh::{Mesh, MeshError};
use crate::sink::{MeshSink, SinkError};

/// Output format, detected from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Stl,
    Ron,
    Unknown,
}

impl ExportFormat {
    /// Detect format from file path
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("stl") => ExportFormat::Stl,
            Some("ron") => ExportFormat::Ron,
            _ => ExportFormat::Unknown,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ExportFormat::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Stl => "STL",
            ExportFormat::Ron => "RON",
            ExportFormat::Unknown => "Unknown",
        }
    }
}

/// Save a mesh as a binary STL file.
///
/// STL stores one normal per triangle: the first vertex's normal is used when
/// the mesh has normals, otherwise it is computed from the winding.
pub fn save_stl(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), ExportError> {
    mesh.validate()?;

    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles()
        .enumerate()
        .map(|(t, [i0, i1, i2])| {
            let normal = if mesh.has_normals() {
                mesh.normals[i0 as usize]
            } else {
                mesh.triangle_normal(t).unwrap_or_default()
            };

            stl_io::Triangle {
                normal: stl_io::Normal::new(normal.to_array()),
                vertices: [
                    stl_io::Vertex::new(mesh.positions[i0 as usize].to_array()),
                    stl_io::Vertex::new(mesh.positions[i1 as usize].to_array()),
                    stl_io::Vertex::new(mesh.positions[i2 as usize].to_array()),
                ],
            }
        })
        .collect();

    let file = std::fs::File::create(path.as_ref()).map_err(|e| ExportError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    stl_io::write_stl(&mut writer, triangles.iter())
        .map_err(|e| ExportError::Write(e.to_string()))?;

    Ok(())
}

/// Save a mesh with all attributes as RON
pub fn save_ron(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), ExportError> {
    mesh.validate()?;

    let content = ron::ser::to_string_pretty(mesh, ron::ser::PrettyConfig::default())
        .map_err(|e| ExportError::Serialize(e.to_string()))?;
    std::fs::write(path.as_ref(), content).map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(())
}

/// Load a mesh previously written by [`save_ron`]
pub fn load_ron(path: impl AsRef<Path>) -> Result<Mesh, ExportError> {
    let content =
        std::fs::read_to_string(path.as_ref()).map_err(|e| ExportError::Io(e.to_string()))?;
    let mesh: Mesh =
        ron::from_str(&content).map_err(|e| ExportError::Deserialize(e.to_string()))?;
    Ok(mesh)
}

/// Save a mesh in the format matching the file extension
pub fn save_mesh(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    match ExportFormat::from_path(path) {
        ExportFormat::Stl => save_stl(mesh, path),
        ExportFormat::Ron => save_ron(mesh, path),
        ExportFormat::Unknown => Err(unsupported_format(path)),
    }
}

fn unsupported_format(path: &Path) -> ExportError {
    ExportError::UnsupportedFormat(path.display().to_string())
}

/// Sink saving accepted meshes to one file.
///
/// Each `accept` rewrites the file, so it holds the most recently accepted
/// mesh. Use one sink per output path to keep several meshes.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink for `path`; fails early if the extension is not supported
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let path = path.into();
        let format = ExportFormat::from_path(&path);
        if !format.is_supported() {
            return Err(unsupported_format(&path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ExportFormat {
        ExportFormat::from_path(&self.path)
    }
}

impl MeshSink for FileSink {
    fn accept(&mut self, mesh: Mesh) -> Result<(), SinkError> {
        save_mesh(&mesh, &self.path)?;
        tracing::info!(
            "Wrote mesh '{}' as {} to {:?}",
            mesh.name,
            self.format().name(),
            self.path
        );
        Ok(())
    }
}

/// Export-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Write error: {0}")]
    Write(String),
    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
