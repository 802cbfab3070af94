//! Mesh Creator command-line entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mc_core::{FileSink, LogSink, MeshCreator, MeshParams, PrimitiveKind, UvLayout};

/// Generate a quad or cube mesh
#[derive(Parser, Debug)]
#[command(name = "mc", version, about)]
struct Cli {
    /// Primitive to generate
    #[arg(value_enum)]
    shape: Shape,

    /// Extent along X (overrides the config file)
    #[arg(long)]
    width: Option<f32>,

    /// Extent along Y, cubes only (overrides the config file)
    #[arg(long)]
    height: Option<f32>,

    /// Extent along Z (overrides the config file)
    #[arg(long)]
    length: Option<f32>,

    /// RON file with default parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (.stl or .ron), replaced if it exists; logs a summary when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Map the full unit square onto every face
    #[arg(long)]
    unit_square_uvs: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Shape {
    Quad,
    Cube,
}

impl From<Shape> for PrimitiveKind {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Quad => PrimitiveKind::Quad,
            Shape::Cube => PrimitiveKind::Cube,
        }
    }
}

impl Cli {
    /// Config file values (or defaults) with command-line overrides applied
    fn params(&self) -> anyhow::Result<MeshParams> {
        let mut params = match &self.config {
            Some(path) => MeshParams::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MeshParams::default(),
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(length) = self.length {
            params.length = length;
        }
        if self.unit_square_uvs {
            params.uv_layout = UvLayout::UnitSquare;
        }

        anyhow::ensure!(
            params.is_finite(),
            "Dimensions must be finite, got {} x {} x {}",
            params.width,
            params.height,
            params.length
        );

        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mc_cli=info,mc_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let kind = PrimitiveKind::from(cli.shape);
    let params = cli.params()?;

    if !params.has_positive_size(kind) {
        tracing::warn!(
            "{} has a zero or negative dimension; the mesh will be degenerate",
            kind.name()
        );
    }

    match &cli.output {
        Some(path) => {
            let sink =
                FileSink::new(path).with_context(|| format!("Cannot write {}", path.display()))?;
            MeshCreator::new(params, sink)
                .create(kind)
                .with_context(|| format!("Failed to create {}", kind.name()))?;
        }
        None => {
            MeshCreator::new(params, LogSink)
                .create(kind)
                .with_context(|| format!("Failed to create {}", kind.name()))?;
        }
    }

    Ok(())
}
