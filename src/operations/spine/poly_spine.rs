use crate::error::{InputError, Result};
use crate::geojson::{GeoJson, Position};
use crate::operations::{FailurePolicy, SpineParams};
use crate::triangulation::Ring;

use super::PolygonSpine;

/// Computes spines for every polygon in a GeoJSON object.
///
/// Collections and multi-polygons are flattened in order. Line strings pass
/// through unchanged and points contribute nothing. Under
/// [`FailurePolicy::Skip`] a polygon that fails is logged and dropped while
/// its siblings are still processed; unsupported geometry types always fail.
pub struct PolySpine<'a> {
    input: &'a GeoJson,
    params: SpineParams,
}

impl<'a> PolySpine<'a> {
    /// Creates a new `PolySpine` with default parameters.
    #[must_use]
    pub fn new(input: &'a GeoJson) -> Self {
        Self {
            input,
            params: SpineParams::default(),
        }
    }

    /// Sets custom spine parameters.
    #[must_use]
    pub fn with_params(mut self, params: SpineParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the extraction, returning one polyline per spine.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported geometry types, and for failing
    /// polygons under [`FailurePolicy::Abort`].
    pub fn execute(&self) -> Result<Vec<Vec<Position>>> {
        let mut out = Vec::new();
        self.collect(self.input, &mut out)?;
        Ok(out)
    }

    fn collect(&self, geo: &GeoJson, out: &mut Vec<Vec<Position>>) -> Result<()> {
        match geo {
            GeoJson::FeatureCollection { features } => {
                for feature in features {
                    self.collect(feature, out)?;
                }
            }
            GeoJson::Feature { geometry, .. } => {
                if let Some(geometry) = geometry {
                    self.collect(geometry, out)?;
                }
            }
            GeoJson::MultiPolygon { coordinates } => {
                for (i, rings) in coordinates.iter().enumerate() {
                    self.polygon(rings, i, out)?;
                }
            }
            GeoJson::Polygon { coordinates } => self.polygon(coordinates, 0, out)?,
            GeoJson::MultiLineString { coordinates } => out.extend(coordinates.iter().cloned()),
            GeoJson::LineString { coordinates } => out.push(coordinates.clone()),
            GeoJson::Point { .. } => {}
            GeoJson::Unsupported => {
                return Err(InputError::UnsupportedGeometry(
                    "unrecognized geometry type".into(),
                )
                .into());
            }
        }
        Ok(())
    }

    fn polygon(&self, rings: &[Ring], index: usize, out: &mut Vec<Vec<Position>>) -> Result<()> {
        match PolygonSpine::new(rings).with_params(self.params).execute() {
            Ok(spines) => out.extend(spines.iter().map(crate::operations::Spine::to_coordinates)),
            Err(e) => match self.params.on_failure {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Skip => {
                    tracing::warn!(polygon = index, error = %e, "skipping polygon");
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SpineError;

    fn parse(s: &str) -> GeoJson {
        s.parse().unwrap()
    }

    #[test]
    fn point_yields_nothing() {
        let geo = parse(r#"{"type":"Point","coordinates":[1,2]}"#);
        assert!(PolySpine::new(&geo).execute().unwrap().is_empty());
    }

    #[test]
    fn line_strings_pass_through() {
        let geo = parse(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#);
        assert_eq!(
            PolySpine::new(&geo).execute().unwrap(),
            vec![vec![[0.0, 0.0], [1.0, 1.0]]]
        );

        let geo = parse(r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]]}"#);
        assert_eq!(PolySpine::new(&geo).execute().unwrap().len(), 2);
    }

    #[test]
    fn empty_polygon_yields_nothing() {
        let geo = parse(r#"{"type":"Polygon","coordinates":[]}"#);
        assert!(PolySpine::new(&geo).execute().unwrap().is_empty());
    }

    #[test]
    fn unsupported_geometry_fails() {
        let geo = parse(r#"{"type":"Feature","properties":{},"geometry":{"type":"MultiPoint","coordinates":[]}}"#);
        let err = PolySpine::new(&geo).execute().unwrap_err();
        assert!(matches!(
            err,
            SpineError::Input(InputError::UnsupportedGeometry(_))
        ));
    }

    #[test]
    fn feature_without_geometry_yields_nothing() {
        let geo = parse(r#"{"type":"Feature","properties":{},"geometry":null}"#);
        assert!(PolySpine::new(&geo).execute().unwrap().is_empty());
    }
}
