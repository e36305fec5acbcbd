use std::collections::{HashMap, HashSet};

use crate::error::{GeometryError, Result, TriangulationError};
use crate::math::{Point2, TOLERANCE};

/// One ring of a polygon as coordinate pairs. The closing point may be
/// repeated or omitted.
pub type Ring = Vec<[f64; 2]>;

/// Planar straight-line graph of a polygon's outer ring and holes.
#[derive(Debug, Clone, Default)]
pub struct Pslg {
    /// Deduplicated point table.
    pub points: Vec<Point2>,
    /// Boundary edges as point index pairs.
    pub edges: Vec<[usize; 2]>,
    /// Each cleaned ring as a cycle of point indices.
    pub rings: Vec<Vec<usize>>,
}

impl Pslg {
    /// Builds a PSLG from polygon rings.
    ///
    /// Coordinates that are bit-identical share one point. Consecutive
    /// repeats and the explicit closing point are dropped, and every ring is
    /// closed by an edge from its last point back to its first.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite or a ring has fewer
    /// than three distinct points once cleaned.
    pub fn from_rings(rings: &[Ring]) -> Result<Self> {
        let mut pslg = Self::default();
        let mut lookup: HashMap<(u64, u64), usize> = HashMap::new();

        for (ring_index, ring) in rings.iter().enumerate() {
            let mut cycle: Vec<usize> = Vec::with_capacity(ring.len());
            for &[x, y] in ring {
                if !x.is_finite() || !y.is_finite() {
                    return Err(GeometryError::NonFiniteCoordinate { x, y }.into());
                }
                let key = ((x + 0.0).to_bits(), (y + 0.0).to_bits());
                let next = pslg.points.len();
                let index = *lookup.entry(key).or_insert(next);
                if index == next {
                    pslg.points.push(Point2::new(x, y));
                }
                if cycle.last() != Some(&index) {
                    cycle.push(index);
                }
            }
            while cycle.len() > 1 && cycle.first() == cycle.last() {
                cycle.pop();
            }

            let distinct = cycle.iter().collect::<HashSet<_>>().len();
            if distinct < 3 {
                return Err(TriangulationError::TooFewPoints {
                    ring: ring_index,
                    count: distinct,
                }
                .into());
            }
            if encloses_no_area(&pslg.points, &cycle) {
                return Err(TriangulationError::ZeroArea { ring: ring_index }.into());
            }

            for (i, &from) in cycle.iter().enumerate() {
                pslg.edges.push([from, cycle[(i + 1) % cycle.len()]]);
            }
            pslg.rings.push(cycle);
        }

        Ok(pslg)
    }
}

/// Returns `true` if the ring's signed area vanishes relative to the square
/// of its bounding box extent.
fn encloses_no_area(points: &[Point2], cycle: &[usize]) -> bool {
    let (mut min, mut max) = (points[cycle[0]], points[cycle[0]]);
    let mut twice_area = 0.0;
    for (i, &from) in cycle.iter().enumerate() {
        let a = points[from];
        let b = points[cycle[(i + 1) % cycle.len()]];
        twice_area += a.coords.perp(&b.coords);
        min = min.inf(&a);
        max = max.sup(&a);
    }
    let extent = (max - min).amax();
    twice_area.abs() <= TOLERANCE * extent * extent
}
