pub mod spine;

pub use spine::{MeshSpine, PolySpine, PolygonSpine};

use crate::math::{Point2, TOLERANCE};

/// What to do with a triangle whose vertices are collinear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Leave the triangle's point out of its spine, logging a warning.
    #[default]
    Skip,
    /// Use the midpoint of the triangle's longest side.
    LongestSideMidpoint,
    /// Fail the whole polygon.
    Fail,
}

/// What to do when one polygon of a larger input fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Propagate the error and stop.
    #[default]
    Abort,
    /// Log a warning, drop the polygon and continue with its siblings.
    Skip,
}

/// Parameters controlling spine extraction.
#[derive(Debug, Clone, Copy)]
pub struct SpineParams {
    /// Relative tolerance for the degeneracy and obtuseness tests.
    pub epsilon: f64,
    /// Handling of collinear triangles.
    pub degenerate: DegeneratePolicy,
    /// Track visited triangles during decomposition, so cyclic dual graphs
    /// (polygons with holes) still produce disjoint strips.
    pub track_visited: bool,
    /// Prefix each side-branch spine with the center of the triangle it
    /// branches off, so it touches its trunk.
    pub connect_branches: bool,
    /// Handling of failing polygons in multi-polygon inputs.
    pub on_failure: FailurePolicy,
}

impl Default for SpineParams {
    fn default() -> Self {
        Self {
            epsilon: TOLERANCE,
            degenerate: DegeneratePolicy::default(),
            track_visited: true,
            connect_branches: false,
            on_failure: FailurePolicy::default(),
        }
    }
}

/// A polyline through the centers of a strip's triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spine {
    /// The ordered vertices of the spine.
    pub points: Vec<Point2>,
}

impl Spine {
    /// Returns the spine as coordinate pairs.
    #[must_use]
    pub fn to_coordinates(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}
