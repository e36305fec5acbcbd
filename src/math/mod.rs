pub mod triangle_center;

pub use triangle_center::{longest_side_midpoint, CenterKind, TriangleCenter};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix type.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Default relative tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
