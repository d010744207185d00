pub mod layered;
pub mod random;

use crate::core::config::DagModel;
use crate::core::edge::Edge;

/// Lazily generate the edges of `model`, in emission order.
pub fn generate(model: &DagModel) -> Box<dyn Iterator<Item = Edge>> {
    match model {
        DagModel::Random(cfg) => Box::new(random::generate(cfg)),
        DagModel::Layered(cfg) => Box::new(layered::generate(cfg)),
    }
}
