use crate::core::config::DagModel;

#[derive(Debug)]
pub struct GenerationStats {
    pub vertices: u64,
    pub edges: u64,
    pub eligible_pairs: u64,
}

impl GenerationStats {
    pub fn new(model: &DagModel, edges: u64) -> Self {
        Self {
            vertices: model.vertex_count() as u64,
            edges,
            eligible_pairs: pair_count(model),
        }
    }

    /// Realised fraction of eligible pairs, 0 when there are none.
    pub fn density(&self) -> f64 {
        if self.eligible_pairs == 0 {
            return 0.0;
        }
        self.edges as f64 / self.eligible_pairs as f64
    }
}

/// Number of vertex pairs the model visits, one probability draw each.
pub fn pair_count(model: &DagModel) -> u64 {
    match model {
        DagModel::Random(cfg) => {
            let v = cfg.vertex_count as u64;
            v * v.saturating_sub(1) / 2
        }
        DagModel::Layered(cfg) => {
            let per_layer = cfg.vertices_per_layer() as u64;
            (cfg.layer_count() as u64)
                .saturating_sub(1)
                .saturating_mul(per_layer)
                .saturating_mul(per_layer)
        }
    }
}

pub fn expected_edges(model: &DagModel) -> f64 {
    pair_count(model) as f64 * model.connectivity().get()
}
