//! Primitive parameter configuration
//!
//! The parameter surface a host (CLI, editor, scene file) fills in before
//! triggering a build. Serialized as RON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIMENSION;
use crate::primitive::{PrimitiveKind, UvLayout};

/// Size parameters for the generated primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshParams {
    /// Extent along X
    pub width: f32,
    /// Extent along Y (unused by quads)
    pub height: f32,
    /// Extent along Z
    pub length: f32,
    /// Per-face texture coordinate layout
    pub uv_layout: UvLayout,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            length: DEFAULT_DIMENSION,
            uv_layout: UvLayout::default(),
        }
    }
}

impl MeshParams {
    pub fn new(width: f32, height: f32, length: f32) -> Self {
        Self {
            width,
            height,
            length,
            ..Self::default()
        }
    }

    /// True if every dimension `kind` uses is strictly positive.
    ///
    /// Zero or negative sizes are still accepted by the builder; hosts that
    /// want a non-degenerate, outward-facing primitive check this first.
    pub fn has_positive_size(&self, kind: PrimitiveKind) -> bool {
        match kind {
            PrimitiveKind::Quad => self.width > 0.0 && self.length > 0.0,
            PrimitiveKind::Cube => self.width > 0.0 && self.height > 0.0 && self.length > 0.0,
        }
    }

    /// True if no dimension is infinite or NaN
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.length.is_finite()
    }

    /// Save parameters to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load parameters from a RON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

/// Config-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
