use crate::error::{Result, TopologyError};
use crate::math::{longest_side_midpoint, Point2, TriangleCenter};
use crate::topology::{DecomposeStrips, DualGraph, Strip};
use crate::triangulation::TriangleMesh;

use crate::operations::{DegeneratePolicy, Spine, SpineParams};

/// Extracts spines from an existing triangulation.
pub struct MeshSpine<'a> {
    mesh: &'a TriangleMesh,
    params: SpineParams,
}

impl<'a> MeshSpine<'a> {
    /// Creates a new `MeshSpine` with default parameters.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self {
            mesh,
            params: SpineParams::default(),
        }
    }

    /// Sets custom spine parameters.
    #[must_use]
    pub fn with_params(mut self, params: SpineParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the dual graph of the mesh and decomposes it into strips.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh has inconsistent winding or repeats a
    /// directed edge.
    pub fn strips(&self) -> std::result::Result<Vec<Strip>, TopologyError> {
        let mut graph = DualGraph::build(&self.mesh.triangles)?;
        Ok(DecomposeStrips::new()
            .with_visited_tracking(self.params.track_visited)
            .execute(&mut graph))
    }

    /// Executes the extraction, returning one spine per strip.
    ///
    /// Strips whose triangles are all skipped as degenerate produce no spine.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is malformed, or if a triangle is
    /// degenerate under [`DegeneratePolicy::Fail`].
    pub fn execute(&self) -> Result<Vec<Spine>> {
        let strips = self.strips()?;
        let mut spines = Vec::with_capacity(strips.len());
        let mut centers: Vec<Option<Option<Point2>>> = vec![None; self.mesh.triangles.len()];

        for strip in &strips {
            let mut points = Vec::with_capacity(strip.len() + 1);
            for &t in &strip.triangles {
                if let Some(p) = self.cached_center(t, &mut centers)? {
                    points.push(p);
                }
            }
            if points.is_empty() {
                tracing::warn!(triangles = strip.len(), "strip has no usable triangles");
                continue;
            }
            if let Some(j) = strip.junction.filter(|_| self.params.connect_branches) {
                if let Some(p) = self.cached_center(j, &mut centers)? {
                    points.insert(0, p);
                }
            }
            spines.push(Spine { points });
        }

        Ok(spines)
    }

    /// Computes the center of `t` at most once, so junctions shared by several
    /// branches are evaluated and reported once.
    fn cached_center(
        &self,
        t: usize,
        centers: &mut [Option<Option<Point2>>],
    ) -> Result<Option<Point2>> {
        if let Some(center) = centers[t] {
            return Ok(center);
        }
        let center = self.center(t)?;
        centers[t] = Some(center);
        Ok(center)
    }

    fn center(&self, t: usize) -> Result<Option<Point2>> {
        let vertices = self.mesh.vertices(t)?;
        let [o, p1, p2] = vertices;
        match TriangleCenter::new(o, p1, p2)
            .with_epsilon(self.params.epsilon)
            .execute()
        {
            Ok(p) => Ok(Some(p)),
            Err(e) => match self.params.degenerate {
                DegeneratePolicy::Skip => {
                    tracing::warn!(triangle = t, error = %e, "skipping triangle");
                    Ok(None)
                }
                DegeneratePolicy::LongestSideMidpoint => Ok(Some(longest_side_midpoint(&vertices))),
                DegeneratePolicy::Fail => Err(e.into()),
            },
        }
    }
}
