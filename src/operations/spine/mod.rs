mod mesh_spine;
mod poly_spine;
mod polygon_spine;

pub use mesh_spine::MeshSpine;
pub use poly_spine::PolySpine;
pub use polygon_spine::PolygonSpine;
