pub mod config;
pub mod edge;
pub mod sampler;
pub mod stats;
