#![allow(clippy::unwrap_used)]

use polyspine::geojson::GeoJson;
use polyspine::operations::{FailurePolicy, MeshSpine, PolySpine, PolygonSpine, SpineParams};
use polyspine::topology::{DecomposeStrips, DualGraph};
use polyspine::triangulation::{Pslg, Ring, Triangulate, TriangleMesh};
use polyspine::SpineError;

fn square(x0: f64, y0: f64, size: f64) -> Ring {
    vec![
        [x0, y0],
        [x0 + size, y0],
        [x0 + size, y0 + size],
        [x0, y0 + size],
        [x0, y0],
    ]
}

fn plus() -> Ring {
    vec![
        [-1.0, -3.0],
        [1.0, -3.0],
        [1.0, -1.0],
        [3.0, -1.0],
        [3.0, 1.0],
        [1.0, 1.0],
        [1.0, 3.0],
        [-1.0, 3.0],
        [-1.0, 1.0],
        [-3.0, 1.0],
        [-3.0, -1.0],
        [-1.0, -1.0],
    ]
}

fn mesh(rings: &[Ring]) -> TriangleMesh {
    let pslg = Pslg::from_rings(rings).unwrap();
    Triangulate::new(&pslg).execute().unwrap()
}

fn strip_lengths(mesh: &TriangleMesh, track_visited: bool) -> (Vec<usize>, DualGraph) {
    let mut graph = DualGraph::build(&mesh.triangles).unwrap();
    let strips = DecomposeStrips::new()
        .with_visited_tracking(track_visited)
        .execute(&mut graph);
    (strips.iter().map(|s| s.len()).collect(), graph)
}

#[test]
fn strips_partition_a_branching_polygon() {
    let mesh = mesh(&[plus()]);
    assert_eq!(mesh.triangles.len(), 10);

    let mut graph = DualGraph::build(&mesh.triangles).unwrap();
    let strips = DecomposeStrips::new().execute(&mut graph);

    let mut seen = vec![0; mesh.triangles.len()];
    for strip in &strips {
        for &t in &strip.triangles {
            seen[t] += 1;
        }
        for pair in strip.triangles.windows(2) {
            assert!(graph.are_adjacent(pair[0], pair[1]));
        }
    }
    assert!(seen.iter().all(|&n| n == 1), "coverage {seen:?}");
    assert!(graph.is_exhausted());
    assert!(strips[0].len() > 1);
}

#[test]
fn square_with_hole_forms_a_cyclic_dual() {
    let mesh = mesh(&[square(0.0, 0.0, 10.0), square(3.0, 3.0, 4.0)]);
    assert_eq!(mesh.triangles.len(), 8);

    let (tracked, graph) = strip_lengths(&mesh, true);
    assert_eq!(graph.edge_count(), 8);
    assert_eq!(tracked, vec![8]);

    // Used-edge-only traversal re-enters the triangle that closes the cycle.
    let (untracked, graph) = strip_lengths(&mesh, false);
    assert_eq!(untracked.iter().sum::<usize>(), 9);
    assert!(graph.is_exhausted());
}

#[test]
fn pipeline_is_deterministic() {
    let rings = vec![plus()];
    let first = PolygonSpine::new(&rings).execute().unwrap();
    let second = PolygonSpine::new(&rings).execute().unwrap();
    assert_eq!(first, second);

    let mesh = mesh(&rings);
    let strips_a = MeshSpine::new(&mesh).strips().unwrap();
    let strips_b = MeshSpine::new(&mesh).strips().unwrap();
    assert_eq!(strips_a, strips_b);
}

#[test]
fn feature_collection_is_flattened_in_order() {
    let geo: GeoJson = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {},
             "geometry": {"type": "LineString", "coordinates": [[9, 9], [8, 8]]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Polygon",
                          "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
                                          [[3, 3], [7, 3], [7, 7], [3, 7], [3, 3]]]}},
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Point", "coordinates": [1, 1]}}
        ]
    }"#
    .parse()
    .unwrap();

    let lines = PolySpine::new(&geo).execute().unwrap();
    assert_eq!(lines[0], vec![[9.0, 9.0], [8.0, 8.0]]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].len(), 8);
}

fn multi_polygon_with_bad_member() -> GeoJson {
    GeoJson::MultiPolygon {
        coordinates: vec![
            vec![square(0.0, 0.0, 4.0)],
            vec![vec![[20.0, 20.0], [21.0, 21.0]]],
            vec![vec![[30.0, 0.0], [34.0, 0.0], [32.0, 3.0]]],
        ],
    }
}

#[test]
fn failing_polygon_aborts_by_default() {
    let geo = multi_polygon_with_bad_member();
    let err = PolySpine::new(&geo).execute().unwrap_err();
    assert!(matches!(err, SpineError::Triangulation(_)));
}

#[test]
fn failing_polygon_can_be_skipped() {
    let geo = multi_polygon_with_bad_member();
    let params = SpineParams {
        on_failure: FailurePolicy::Skip,
        ..SpineParams::default()
    };
    let lines = PolySpine::new(&geo).with_params(params).execute().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 2);
    assert_eq!(lines[1].len(), 1);
}

#[test]
fn spines_serialize_as_line_strings() {
    let rings = vec![square(0.0, 0.0, 4.0)];
    let lines: Vec<_> = PolygonSpine::new(&rings)
        .execute()
        .unwrap()
        .iter()
        .map(polyspine::operations::Spine::to_coordinates)
        .collect();
    let json = GeoJson::line_string_collection(lines).to_json().unwrap();
    let back: GeoJson = json.parse().unwrap();
    let GeoJson::FeatureCollection { features } = back else {
        panic!("expected a collection");
    };
    assert_eq!(features.len(), 1);
}
