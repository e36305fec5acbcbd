use thiserror::Error;

/// Top-level error type for spine extraction.
#[derive(Debug, Error)]
pub enum SpineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Errors related to per-triangle geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate triangle: vertices are collinear or coincident")]
    DegenerateTriangle,

    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors raised while building the triangle adjacency graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error(
        "directed edge ({from}, {to}) registered by triangle {first} and again by triangle {second}"
    )]
    DuplicateDirectedEdge {
        from: usize,
        to: usize,
        first: usize,
        second: usize,
    },

    #[error("triangle {triangle} repeats a vertex index")]
    RepeatedVertex { triangle: usize },

    #[error("triangle {triangle} references point {index}, but the point table has {len} points")]
    PointOutOfRange {
        triangle: usize,
        index: usize,
        len: usize,
    },
}

/// Errors related to building or triangulating the planar straight-line graph.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("ring {ring} has {count} distinct points, at least 3 are required")]
    TooFewPoints { ring: usize, count: usize },

    #[error("ring {ring} encloses no area")]
    ZeroArea { ring: usize },

    #[error("CDT insert: {0}")]
    Insertion(String),

    #[error("boundary edge ({from}, {to}) crosses another boundary edge")]
    IntersectingConstraint { from: usize, to: usize },

    #[error("triangulation failed: {0}")]
    Failed(String),
}

/// Errors related to the input shape.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`SpineError`].
pub type Result<T> = std::result::Result<T, SpineError>;
