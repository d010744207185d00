use crate::core::config::LayeredConfig;
use crate::core::edge::{Edge, VertexId};
use crate::core::sampler::EdgeSampler;

/// Edges between consecutive layers of a layered DAG.
///
/// Layer `l` holds vertices `[l * per_layer, (l + 1) * per_layer)`. Pairs are
/// visited by source layer, then source vertex, then destination vertex.
pub struct LayeredDagEdges {
    sampler: EdgeSampler,
    layer_count: u32,
    per_layer: u32,
    layer: u32,
    src_offset: u32,
    dst_offset: u32,
}

pub fn generate(cfg: &LayeredConfig) -> LayeredDagEdges {
    LayeredDagEdges {
        sampler: EdgeSampler::new(cfg.connectivity, cfg.weights, cfg.seed),
        layer_count: cfg.layer_count(),
        per_layer: cfg.vertices_per_layer(),
        layer: 0,
        src_offset: 0,
        dst_offset: 0,
    }
}

impl LayeredDagEdges {
    fn advance(&mut self) {
        self.dst_offset += 1;
        if self.dst_offset == self.per_layer {
            self.dst_offset = 0;
            self.src_offset += 1;
            if self.src_offset == self.per_layer {
                self.src_offset = 0;
                self.layer += 1;
            }
        }
    }
}

impl Iterator for LayeredDagEdges {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.per_layer == 0 {
            return None;
        }
        while self.layer + 1 < self.layer_count {
            let start: VertexId = self.layer * self.per_layer;
            let src = start + self.src_offset;
            let dst = start + self.per_layer + self.dst_offset;
            self.advance();
            if let Some(weight) = self.sampler.sample() {
                return Some(Edge::new(src, dst, weight));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Connectivity, WeightRange};

    fn config(layers: u32, per_layer: u32, p: f64, seed: Option<u64>) -> LayeredConfig {
        LayeredConfig::new(
            layers,
            per_layer,
            Connectivity::new(p).unwrap(),
            WeightRange::new(1, 1).unwrap(),
            seed,
        )
        .unwrap()
    }

    #[test]
    fn test_three_full_layers() {
        let edges: Vec<Edge> = generate(&config(3, 2, 1.0, None)).collect();
        assert_eq!(
            vec![
                Edge::new(0, 2, 1),
                Edge::new(0, 3, 1),
                Edge::new(1, 2, 1),
                Edge::new(1, 3, 1),
                Edge::new(2, 4, 1),
                Edge::new(2, 5, 1),
                Edge::new(3, 4, 1),
                Edge::new(3, 5, 1),
            ],
            edges
        );
    }

    #[test]
    fn test_degenerate_layouts() {
        assert_eq!(0, generate(&config(0, 3, 1.0, None)).count());
        assert_eq!(0, generate(&config(1, 3, 1.0, None)).count());
        assert_eq!(0, generate(&config(4, 0, 1.0, None)).count());
        assert_eq!(4, generate(&config(5, 1, 1.0, None)).count());
    }

    #[test]
    fn test_zero_connectivity() {
        assert_eq!(0, generate(&config(6, 5, 0.0, Some(3))).count());
    }

    #[test]
    fn test_only_adjacent_layers() {
        let cfg = LayeredConfig::new(
            8,
            5,
            Connectivity::new(0.5).unwrap(),
            WeightRange::new(2, 9).unwrap(),
            Some(11),
        )
        .unwrap();
        let edges: Vec<Edge> = generate(&cfg).collect();
        assert!(!edges.is_empty());
        for e in edges {
            assert!(e.src < e.dst);
            assert!(e.dst < cfg.vertex_count());
            assert!((2..=9).contains(&e.weight));
            let src_layer = cfg.layer_of(e.src).unwrap();
            let dst_layer = cfg.layer_of(e.dst).unwrap();
            assert_eq!(src_layer + 1, dst_layer);
        }
    }

    #[test]
    fn test_full_connectivity_count() {
        // (layers - 1) * per_layer^2
        assert_eq!(4 * 9, generate(&config(5, 3, 1.0, None)).count());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a: Vec<Edge> = generate(&config(6, 4, 0.5, Some(99))).collect();
        let b: Vec<Edge> = generate(&config(6, 4, 0.5, Some(99))).collect();
        assert_eq!(a, b);
    }
}
