use crate::error::GeometryError;

use super::{Matrix2, Point2, Vector2, TOLERANCE};

/// Which point [`TriangleCenter`] chose as the representative center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterKind {
    /// The point equidistant from all three vertices (acute or right triangles).
    Circumcenter,
    /// The arithmetic mean of the vertices (obtuse triangles).
    Centroid,
}

/// Computes the representative center point of a triangle.
///
/// Acute and right triangles yield their circumcenter. Obtuse triangles yield
/// their centroid, since the circumcenter of an obtuse triangle lies outside it.
/// Collinear or coincident vertices are rejected with
/// [`GeometryError::DegenerateTriangle`].
///
/// Both the degeneracy and the obtuseness tests are relative to the squared
/// size of the triangle, scaled by `epsilon`.
#[derive(Debug, Clone, Copy)]
pub struct TriangleCenter {
    vertices: [Point2; 3],
    epsilon: f64,
}

impl TriangleCenter {
    /// Creates a new `TriangleCenter` for the triangle `(o, p1, p2)`.
    #[must_use]
    pub fn new(o: Point2, p1: Point2, p2: Point2) -> Self {
        Self {
            vertices: [o, p1, p2],
            epsilon: TOLERANCE,
        }
    }

    /// Sets the relative tolerance used by the degeneracy and obtuseness tests.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the center point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateTriangle`] if the vertices are
    /// collinear within tolerance.
    pub fn execute(&self) -> Result<Point2, GeometryError> {
        self.execute_with_kind().map(|(center, _)| center)
    }

    /// Returns the center point together with which kind of center it is.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateTriangle`] if the vertices are
    /// collinear within tolerance.
    pub fn execute_with_kind(&self) -> Result<(Point2, CenterKind), GeometryError> {
        let [o, p1, p2] = self.vertices;
        let h1: Vector2 = (p1 - o) / 2.0;
        let h2: Vector2 = (p2 - o) / 2.0;
        let (a, b, c, d) = (h1.x, h1.y, h2.x, h2.y);

        let s = h1.norm_squared();
        let t = h2.norm_squared();
        let u = (h1 - h2).norm_squared();
        let scale = s.max(t).max(u);

        // Twice the signed area of the half-size triangle.
        let det = a * d - b * c;
        if !det.is_finite() || det.abs() <= self.epsilon * scale {
            return Err(GeometryError::DegenerateTriangle);
        }

        let slack = self.epsilon * scale;
        if s + t < u - slack || t + u < s - slack || u + s < t - slack {
            let centroid = Point2::from((o.coords + p1.coords + p2.coords) / 3.0);
            return Ok((centroid, CenterKind::Centroid));
        }

        let center = Matrix2::new(a, b, c, d)
            .lu()
            .solve(&Vector2::new(s, t))
            .ok_or(GeometryError::DegenerateTriangle)?;

        Ok((o + center, CenterKind::Circumcenter))
    }
}

/// Returns the midpoint of the longest side of a triangle.
#[must_use]
pub fn longest_side_midpoint(vertices: &[Point2; 3]) -> Point2 {
    let mut best = (0, 1);
    let mut best_len = -1.0;
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        let len = (vertices[j] - vertices[i]).norm_squared();
        if len > best_len {
            best_len = len;
            best = (i, j);
        }
    }
    nalgebra::center(&vertices[best.0], &vertices[best.1])
}
