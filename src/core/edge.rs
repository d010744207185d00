pub type VertexId = u32;
pub type Weight = i64;

/// A weighted edge. Generators only emit edges with `src < dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: VertexId,
    pub dst: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: VertexId, dst: VertexId, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}
