use crate::core::config::{Connectivity, WeightRange};
use crate::core::edge::Weight;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single random stream shared by every draw of one generation call.
///
/// Each visited pair costs one probability draw, plus one weight draw when the
/// edge is kept. Generators must visit pairs in a fixed order for seeded runs
/// to be reproducible.
pub struct EdgeSampler {
    rng: StdRng,
    connectivity: f64,
    weights: WeightRange,
}

impl EdgeSampler {
    pub fn new(connectivity: Connectivity, weights: WeightRange, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            connectivity: connectivity.get(),
            weights,
        }
    }

    /// Weight of the next visited pair, or `None` if the pair is skipped.
    pub fn sample(&mut self) -> Option<Weight> {
        if self.rng.random::<f64>() < self.connectivity {
            let weight = self
                .rng
                .random_range(self.weights.min()..=self.weights.max());
            debug_assert!(self.weights.contains(weight));
            Some(weight)
        } else {
            None
        }
    }
}
