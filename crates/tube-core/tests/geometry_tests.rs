// Host-side tests for the tube geometry builder.

use std::f32::consts::{PI, TAU};
use tube_core::{build_tube_geometry, GeometryError};

/// Distance between two angles measured on the circle, ignoring the
/// branch cut at +-pi.
fn circular_delta(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % TAU;
    d.min(TAU - d)
}

#[test]
fn rejects_invalid_arguments() {
    assert_eq!(
        build_tube_geometry(2, 10, false).unwrap_err(),
        GeometryError::TooFewSides(2)
    );
    assert_eq!(
        build_tube_geometry(0, 10, true).unwrap_err(),
        GeometryError::TooFewSides(0)
    );
    assert_eq!(
        build_tube_geometry(8, 0, false).unwrap_err(),
        GeometryError::TooFewSubdivisions(0)
    );
}

#[test]
fn wall_vertex_count_matches_tessellation() {
    for (sides, subdivisions) in [(3, 1), (4, 2), (8, 50), (12, 7)] {
        let geo = build_tube_geometry(sides, subdivisions, true).unwrap();
        let expected = (sides * subdivisions * 2 * 3) as usize;
        assert_eq!(geo.vertex_count(), expected, "sides={sides} sub={subdivisions}");
        assert_eq!(geo.vertex_count() % 3, 0);
    }
}

#[test]
fn capped_vertex_count_adds_cap_fans() {
    // 8x3 capped cylinder: walls 8*3*2 triangles, plus 8 per cap fan
    let geo = build_tube_geometry(8, 3, false).unwrap();
    let walls = 8 * 3 * 2 * 3;
    let caps = 2 * 8 * 3;
    assert_eq!(geo.vertex_count(), walls + caps);
}

#[test]
fn arc_position_spans_exactly_half_unit() {
    for subdivisions in [1, 3, 50] {
        let geo = build_tube_geometry(8, subdivisions, true).unwrap();
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for v in geo.vertices() {
            min = min.min(v.arc_position);
            max = max.max(v.arc_position);
        }
        assert_eq!(min, -0.5, "subdivisions={subdivisions}");
        assert_eq!(max, 0.5, "subdivisions={subdivisions}");
    }
}

#[test]
fn angles_stay_in_principal_range() {
    let geo = build_tube_geometry(8, 3, false).unwrap();
    for v in geo.vertices() {
        assert!(
            v.radial_angle > -PI && v.radial_angle <= PI,
            "angle {} out of (-pi, pi]",
            v.radial_angle
        );
    }
}

#[test]
fn wall_triangles_are_angularly_tight() {
    // No triangle may merge across the wraparound: its three angles must sit
    // within 1.5 ring steps of each other on the circle. Odd side counts
    // place ring columns right next to the branch cut, so check those too.
    for sides in [3u32, 5, 8, 12] {
        let geo = build_tube_geometry(sides, 4, true).unwrap();
        let limit = TAU / sides as f32 * 1.5;
        for tri in geo.vertices().chunks(3) {
            let spread = circular_delta(tri[0].radial_angle, tri[1].radial_angle)
                .max(circular_delta(tri[1].radial_angle, tri[2].radial_angle))
                .max(circular_delta(tri[0].radial_angle, tri[2].radial_angle));
            assert!(
                spread <= limit + 1e-5,
                "sides={sides}: triangle spans {spread} > {limit}"
            );
        }
    }
}

#[test]
fn uvs_stay_in_unit_square() {
    let geo = build_tube_geometry(6, 5, false).unwrap();
    for v in geo.vertices() {
        assert!((0.0..=1.0).contains(&v.uv[0]), "u {} out of range", v.uv[0]);
        assert!((0.0..=1.0).contains(&v.uv[1]), "v {} out of range", v.uv[1]);
    }
}

#[test]
fn buffer_bytes_match_vertex_layout() {
    let geo = build_tube_geometry(4, 2, true).unwrap();
    // 4 floats per vertex: arc_position, radial_angle, uv.xy
    assert_eq!(geo.as_bytes().len(), geo.vertex_count() * 4 * 4);
}
