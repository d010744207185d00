use crate::core::edge::{VertexId, Weight};
use thiserror::Error;

/// Usage errors detected before any random draw happens.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("connectivity must be between 0.0 and 1.0 (got {0})")]
    ConnectivityOutOfRange(f64),
    #[error("min weight cannot be greater than max weight ({min} > {max})")]
    InvertedWeightRange { min: Weight, max: Weight },
    #[error("--{name} is required for {model} DAG type")]
    MissingParameter {
        name: &'static str,
        model: &'static str,
    },
    #[error("{layers} layers of {per_layer} vertices exceed the vertex id limit")]
    TooManyVertices { layers: u32, per_layer: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connectivity(f64);

impl Connectivity {
    pub fn new(p: f64) -> Result<Self, ConfigError> {
        // `contains` is false for NaN
        if (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(ConfigError::ConnectivityOutOfRange(p))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Closed interval `[min, max]` of edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRange {
    min: Weight,
    max: Weight,
}

impl WeightRange {
    pub fn new(min: Weight, max: Weight) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(self) -> Weight {
        self.min
    }

    pub fn max(self) -> Weight {
        self.max
    }

    pub fn contains(self, weight: Weight) -> bool {
        (self.min..=self.max).contains(&weight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomConfig {
    pub vertex_count: VertexId,
    pub connectivity: Connectivity,
    pub weights: WeightRange,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayeredConfig {
    layer_count: u32,
    vertices_per_layer: u32,
    pub connectivity: Connectivity,
    pub weights: WeightRange,
    pub seed: Option<u64>,
}

impl LayeredConfig {
    pub fn new(
        layer_count: u32,
        vertices_per_layer: u32,
        connectivity: Connectivity,
        weights: WeightRange,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if layer_count.checked_mul(vertices_per_layer).is_none() {
            return Err(ConfigError::TooManyVertices {
                layers: layer_count,
                per_layer: vertices_per_layer,
            });
        }
        Ok(Self {
            layer_count,
            vertices_per_layer,
            connectivity,
            weights,
            seed,
        })
    }

    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    pub fn vertices_per_layer(&self) -> u32 {
        self.vertices_per_layer
    }

    pub fn vertex_count(&self) -> VertexId {
        // checked in `new`
        self.layer_count * self.vertices_per_layer
    }

    /// Layer holding `vertex`, or `None` for an empty layout.
    #[cfg(test)]
    pub fn layer_of(&self, vertex: VertexId) -> Option<u32> {
        vertex.checked_div(self.vertices_per_layer)
    }
}

/// Generation model together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DagModel {
    Random(RandomConfig),
    Layered(LayeredConfig),
}

impl DagModel {
    pub fn name(&self) -> &'static str {
        match self {
            DagModel::Random(_) => "random",
            DagModel::Layered(_) => "layered",
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            DagModel::Random(cfg) => cfg.seed,
            DagModel::Layered(cfg) => cfg.seed,
        }
    }

    pub fn vertex_count(&self) -> VertexId {
        match self {
            DagModel::Random(cfg) => cfg.vertex_count,
            DagModel::Layered(cfg) => cfg.vertex_count(),
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        match self {
            DagModel::Random(cfg) => cfg.connectivity,
            DagModel::Layered(cfg) => cfg.connectivity,
        }
    }

    pub fn weights(&self) -> WeightRange {
        match self {
            DagModel::Random(cfg) => cfg.weights,
            DagModel::Layered(cfg) => cfg.weights,
        }
    }
}
