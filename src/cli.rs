//! Command-line surface of `dagen`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::config::{
    ConfigError, Connectivity, DagModel, LayeredConfig, RandomConfig, WeightRange,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagen",
    version,
    about = "Generate a weighted directed acyclic graph as a `src dst weight` edge list.",
    long_about = None
)]
pub struct CliArgs {
    /// Type of DAG to generate.
    #[arg(long = "type", value_enum, default_value = "random")]
    pub dag_type: DagType,

    /// Number of vertices (random DAG).
    #[arg(long, value_name = "N")]
    pub vertices: Option<u32>,

    /// Number of layers (layered DAG).
    #[arg(long, value_name = "N")]
    pub layers: Option<u32>,

    /// Vertices in each layer (layered DAG).
    #[arg(long, value_name = "N")]
    pub vertices_per_layer: Option<u32>,

    /// Probability that an eligible vertex pair becomes an edge (0.0 to 1.0).
    #[arg(long, value_name = "P", allow_negative_numbers = true)]
    pub connectivity: Option<f64>,

    /// Minimum edge weight.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min_weight: i64,

    /// Maximum edge weight.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub max_weight: i64,

    /// Random seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the edge list to this file instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Logging level. Falls back to `DAGEN_LOG`, then `warn`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DagType {
    Random,
    Layered,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Validate the arguments and build the selected model.
    pub fn to_model(&self) -> Result<DagModel, ConfigError> {
        let model = match self.dag_type {
            DagType::Random => "random",
            DagType::Layered => "layered",
        };
        let required = |value: Option<u32>, name: &'static str| {
            value.ok_or(ConfigError::MissingParameter { name, model })
        };

        let connectivity = self
            .connectivity
            .ok_or(ConfigError::MissingParameter {
                name: "connectivity",
                model,
            })
            .and_then(Connectivity::new);

        match self.dag_type {
            DagType::Random => {
                let vertex_count = required(self.vertices, "vertices")?;
                let connectivity = connectivity?;
                let weights = WeightRange::new(self.min_weight, self.max_weight)?;
                Ok(DagModel::Random(RandomConfig {
                    vertex_count,
                    connectivity,
                    weights,
                    seed: self.seed,
                }))
            }
            DagType::Layered => {
                let layers = required(self.layers, "layers")?;
                let per_layer = required(self.vertices_per_layer, "vertices-per-layer")?;
                let connectivity = connectivity?;
                let weights = WeightRange::new(self.min_weight, self.max_weight)?;
                Ok(DagModel::Layered(LayeredConfig::new(
                    layers,
                    per_layer,
                    connectivity,
                    weights,
                    self.seed,
                )?))
            }
        }
    }
}

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
