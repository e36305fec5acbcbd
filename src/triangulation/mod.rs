mod pslg;
mod triangulate;

pub use pslg::{Pslg, Ring};
pub use triangulate::Triangulate;

use crate::error::TopologyError;
use crate::math::Point2;

/// Triangles over a shared point table.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Point table referenced by the triangles.
    pub points: Vec<Point2>,
    /// Point index triples, counter-clockwise.
    pub triangles: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Returns the vertex positions of triangle `t`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::PointOutOfRange`] if the triangle references a
    /// point outside the table.
    ///
    /// # Panics
    ///
    /// Panics if `t` is not a valid triangle index.
    pub fn vertices(&self, t: usize) -> Result<[Point2; 3], TopologyError> {
        let tri = self.triangles[t];
        let mut out = [Point2::origin(); 3];
        for (slot, &index) in out.iter_mut().zip(&tri) {
            *slot = *self
                .points
                .get(index)
                .ok_or(TopologyError::PointOutOfRange {
                    triangle: t,
                    index,
                    len: self.points.len(),
                })?;
        }
        Ok(out)
    }
}
