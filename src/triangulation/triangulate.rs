use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::TriangulationError;

use super::{Pslg, TriangleMesh};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the interior of a [`Pslg`] with a constrained Delaunay
/// triangulation.
///
/// Faces are kept when reaching them from outside crosses an odd number of
/// boundary edges, so holes are excluded and islands inside holes are kept.
pub struct Triangulate<'a> {
    pslg: &'a Pslg,
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(pslg: &'a Pslg) -> Self {
        Self { pslg }
    }

    /// Executes the triangulation, returning interior triangles indexed into
    /// the PSLG's point table.
    ///
    /// # Errors
    ///
    /// Returns an error if a point cannot be inserted or two boundary edges
    /// cross.
    pub fn execute(&self) -> Result<TriangleMesh, TriangulationError> {
        let mut cdt = Cdt::new();
        let mut handles = Vec::with_capacity(self.pslg.points.len());
        for p in &self.pslg.points {
            let h = cdt
                .insert(SpadePoint2::new(p.x, p.y))
                .map_err(|e: InsertionError| TriangulationError::Insertion(e.to_string()))?;
            handles.push(h);
        }
        let table: HashMap<usize, usize> = handles
            .iter()
            .enumerate()
            .map(|(i, h)| (h.index(), i))
            .collect();

        for &[a, b] in &self.pslg.edges {
            let (from, to) = (handles[a], handles[b]);
            if from == to {
                continue;
            }
            if let Some(existing) = cdt.get_edge_from_neighbors(from, to) {
                if cdt.is_constraint_edge(existing.as_undirected().fix()) {
                    continue;
                }
            }
            if !cdt.can_add_constraint(from, to) {
                return Err(TriangulationError::IntersectingConstraint { from: a, to: b });
            }
            cdt.add_constraint(from, to);
        }

        let interior = classify_interior_faces(&cdt);

        let mut triangles = Vec::with_capacity(interior.len());
        for face in cdt.inner_faces() {
            if !interior.contains(&face.fix().index()) {
                continue;
            }
            let mut tri = [0usize; 3];
            for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
                *slot = *table.get(&vh.fix().index()).ok_or_else(|| {
                    TriangulationError::Failed("face references an unknown vertex".into())
                })?;
            }
            triangles.push(tri);
        }

        tracing::debug!(
            points = self.pslg.points.len(),
            faces = cdt.num_inner_faces(),
            interior = triangles.len(),
            "triangulated polygon"
        );

        Ok(TriangleMesh {
            points: self.pslg.points.clone(),
            triangles,
        })
    }
}

/// Flood-fills the CDT from the outer face, counting constraint crossings.
/// Faces at odd depth lie inside the polygon.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let n_idx = neighbor.fix().index();
            if depth_map.contains_key(&n_idx) {
                continue;
            }
            let crossed = cdt.is_constraint_edge(edge.as_undirected().fix());
            let new_depth = depth + u32::from(crossed);
            depth_map.insert(n_idx, new_depth);
            if new_depth % 2 == 1 {
                interior.insert(n_idx);
            }
            queue.push_back((neighbor.fix(), new_depth));
        }
    }

    interior
}
