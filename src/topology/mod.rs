pub mod dual_graph;
pub mod strip;

pub use dual_graph::{AdjacencyEdge, AdjacencyId, DualGraph};
pub use strip::{DecomposeStrips, Strip};
