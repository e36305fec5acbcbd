use crate::error::Result;
use crate::operations::{Spine, SpineParams};
use crate::triangulation::{Pslg, Ring, Triangulate};

use super::MeshSpine;

/// Computes the spines of one polygon given as an outer ring and holes.
///
/// # Examples
///
/// ```
/// use polyspine::operations::PolygonSpine;
///
/// let square = vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]];
/// let spines = PolygonSpine::new(&[square]).execute().unwrap();
/// assert_eq!(spines.len(), 1);
/// ```
pub struct PolygonSpine<'a> {
    rings: &'a [Ring],
    params: SpineParams,
}

impl<'a> PolygonSpine<'a> {
    /// Creates a new `PolygonSpine` with default parameters.
    #[must_use]
    pub fn new(rings: &'a [Ring]) -> Self {
        Self {
            rings,
            params: SpineParams::default(),
        }
    }

    /// Sets custom spine parameters.
    #[must_use]
    pub fn with_params(mut self, params: SpineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the extraction. A polygon without rings has no spines.
    ///
    /// # Errors
    ///
    /// Returns an error if the rings are invalid, cannot be triangulated, or
    /// the triangulation is malformed.
    pub fn execute(&self) -> Result<Vec<Spine>> {
        if self.rings.is_empty() {
            return Ok(Vec::new());
        }

        let pslg = Pslg::from_rings(self.rings)?;
        let mesh = Triangulate::new(&pslg).execute()?;
        let spines = MeshSpine::new(&mesh).with_params(self.params).execute()?;

        tracing::debug!(
            rings = self.rings.len(),
            triangles = mesh.triangles.len(),
            spines = spines.len(),
            "computed polygon spine"
        );
        Ok(spines)
    }
}
