use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::triangulation::Ring;

/// A coordinate pair.
pub type Position = [f64; 2];

/// The subset of GeoJSON that spine extraction understands.
///
/// Unknown `type` tags deserialize to [`GeoJson::Unsupported`] and are
/// rejected when a spine is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Point {
        coordinates: Vec<f64>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    /// Outer ring followed by hole rings.
    Polygon {
        coordinates: Vec<Ring>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Ring>>,
    },
    Feature {
        #[serde(default)]
        geometry: Option<Box<GeoJson>>,
        #[serde(default)]
        properties: serde_json::Value,
    },
    FeatureCollection {
        features: Vec<GeoJson>,
    },
    #[serde(other)]
    Unsupported,
}

impl GeoJson {
    /// Wraps a polyline as a `LineString` feature with empty properties.
    #[must_use]
    pub fn line_string_feature(coordinates: Vec<Position>) -> Self {
        Self::Feature {
            geometry: Some(Box::new(Self::LineString { coordinates })),
            properties: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Wraps polylines as a `FeatureCollection` of `LineString` features.
    #[must_use]
    pub fn line_string_collection(lines: Vec<Vec<Position>>) -> Self {
        Self::FeatureCollection {
            features: lines.into_iter().map(Self::line_string_feature).collect(),
        }
    }

    /// Appends polylines as `LineString` features to this object's features
    /// and reverses the result, so the added lines come first.
    ///
    /// A lone geometry is wrapped as a feature first.
    #[must_use]
    pub fn merge_line_strings(self, lines: Vec<Vec<Position>>) -> Self {
        let mut features = match self {
            Self::FeatureCollection { features } => features,
            feature @ Self::Feature { .. } => vec![feature],
            geometry => vec![Self::Feature {
                geometry: Some(Box::new(geometry)),
                properties: serde_json::Value::Object(serde_json::Map::new()),
            }],
        };
        features.extend(lines.into_iter().map(Self::line_string_feature));
        features.reverse();
        Self::FeatureCollection { features }
    }

    /// Serializes this object as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate cannot be represented in JSON.
    pub fn to_json(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for GeoJson {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_polygon() {
        let geo: GeoJson = r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,1],[0,0]]]}"#
            .parse()
            .unwrap();
        assert_eq!(
            geo,
            GeoJson::Polygon {
                coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]
            }
        );
    }

    #[test]
    fn parses_feature_collection_with_properties() {
        let geo: GeoJson = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "a"},
                 "geometry": {"type": "Point", "coordinates": [1, 2]}},
                {"type": "Feature", "properties": null, "geometry": null}
            ]
        }"#
        .parse()
        .unwrap();
        let GeoJson::FeatureCollection { features } = geo else {
            panic!("expected a collection");
        };
        assert_eq!(features.len(), 2);
        assert!(matches!(
            &features[1],
            GeoJson::Feature { geometry: None, .. }
        ));
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let geo: GeoJson = r#"{"type":"GeometryCollection","geometries":[]}"#
            .parse()
            .unwrap();
        assert_eq!(geo, GeoJson::Unsupported);
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let err = "{\"type\":".parse::<GeoJson>().unwrap_err();
        assert!(matches!(err, InputError::Json(_)));
    }

    #[test]
    fn merged_lines_precede_reversed_input_features() {
        let a = GeoJson::line_string_feature(vec![[0.0, 0.0], [1.0, 0.0]]);
        let b = GeoJson::line_string_feature(vec![[2.0, 0.0], [3.0, 0.0]]);
        let input = GeoJson::FeatureCollection {
            features: vec![a.clone(), b.clone()],
        };
        let spine = vec![[5.0, 5.0], [6.0, 6.0]];
        let merged = input.merge_line_strings(vec![spine.clone()]);
        assert_eq!(
            merged,
            GeoJson::FeatureCollection {
                features: vec![GeoJson::line_string_feature(spine), b, a]
            }
        );
    }

    #[test]
    fn merging_into_a_geometry_wraps_it() {
        let point = GeoJson::Point {
            coordinates: vec![1.0, 2.0],
        };
        let GeoJson::FeatureCollection { features } = point.clone().merge_line_strings(vec![])
        else {
            panic!("expected a collection");
        };
        assert!(matches!(
            &features[..],
            [GeoJson::Feature { geometry: Some(g), .. }] if **g == point
        ));
    }

    #[test]
    fn line_string_collection_serializes_as_features() {
        let out = GeoJson::line_string_collection(vec![vec![[0.0, 0.0], [1.0, 1.0]]])
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(value["features"][0]["geometry"]["coordinates"][1][0], 1.0);
    }
}
