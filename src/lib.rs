//! Approximate medial spines of polygons.
//!
//! A polygon is triangulated, the triangles' adjacency graph is split into
//! strips that keep the longest chain at every branch unbroken, and each
//! strip becomes a polyline through its triangles' centers.

pub mod error;
pub mod geojson;
pub mod math;
pub mod operations;
pub mod topology;
pub mod triangulation;

pub use error::{Result, SpineError};
