use crate::core::config::RandomConfig;
use crate::core::edge::{Edge, VertexId};
use crate::core::sampler::EdgeSampler;

/// Edges of a uniformly random DAG, pairs visited in ascending `(src, dst)`.
pub struct RandomDagEdges {
    sampler: EdgeSampler,
    vertex_count: VertexId,
    src: VertexId,
    dst: VertexId,
}

pub fn generate(cfg: &RandomConfig) -> RandomDagEdges {
    RandomDagEdges {
        sampler: EdgeSampler::new(cfg.connectivity, cfg.weights, cfg.seed),
        vertex_count: cfg.vertex_count,
        src: 0,
        dst: 1,
    }
}

impl Iterator for RandomDagEdges {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.dst < self.vertex_count {
            let (src, dst) = (self.src, self.dst);
            self.dst += 1;
            if self.dst == self.vertex_count {
                self.src += 1;
                self.dst = self.src + 1;
            }
            if let Some(weight) = self.sampler.sample() {
                return Some(Edge::new(src, dst, weight));
            }
        }
        None
    }
}
