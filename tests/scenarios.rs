//! End-to-end coverage of the three public entry points against literal,
//! hand-picked coordinates.

use polyclip::{fsize, sweep_of_edges, sweep_of_polygons, BooleanOp, Edge, Geometry, Polygon, Vertex};

fn v(x: fsize, y: fsize) -> Vertex {
    Vertex::new(x, y)
}

fn square(x0: fsize, y0: fsize, side: fsize) -> Polygon {
    Polygon::new(vec![v(x0, y0), v(x0 + side, y0), v(x0 + side, y0 + side), v(x0, y0 + side)])
}

#[test]
fn two_crossing_segments() {
    let edges = vec![Edge::new(v(0.0, 0.0), v(10.0, 10.0)), Edge::new(v(0.0, 10.0), v(10.0, 0.0))];
    let sweep = sweep_of_edges(edges.clone()).unwrap();
    assert!(sweep.has_intersection().unwrap());

    let sweep = sweep_of_edges(edges).unwrap();
    assert_eq!(sweep.get_intersections().unwrap(), vec![Geometry::Vertex(v(5.0, 5.0))]);
}

#[test]
fn shared_endpoint_only() {
    let edges = vec![Edge::new(v(0.0, 0.0), v(5.0, 5.0)), Edge::new(v(5.0, 5.0), v(10.0, 0.0))];
    let sweep = sweep_of_edges(edges.clone()).unwrap();
    assert!(!sweep.has_intersection().unwrap());

    let sweep = sweep_of_edges(edges).unwrap();
    assert_eq!(sweep.get_intersections().unwrap(), Vec::new());
}

#[test]
fn collinear_overlap() {
    let edges = vec![Edge::new(v(0.0, 0.0), v(10.0, 0.0)), Edge::new(v(4.0, 0.0), v(14.0, 0.0))];
    let sweep = sweep_of_edges(edges).unwrap();
    let result = sweep.get_intersections().unwrap();
    assert_eq!(result, vec![Geometry::Edge(Edge::new(v(4.0, 0.0), v(10.0, 0.0)))]);
}

#[test]
fn square_intersect_square() {
    let subject = square(0.0, 0.0, 10.0);
    let clip = square(5.0, 5.0, 10.0);
    let result = sweep_of_polygons(subject, clip)
        .unwrap()
        .compute_boolean(BooleanOp::Intersection)
        .unwrap();

    assert_eq!(result.len(), 1);
    let bbox = result[0].bounding_box();
    assert_eq!((bbox.left, bbox.bottom, bbox.right, bbox.top), (5.0, 5.0, 10.0, 10.0));
}

#[test]
fn square_union_disjoint_square() {
    let subject = square(0.0, 0.0, 10.0);
    let clip = square(20.0, 20.0, 10.0);
    let result = sweep_of_polygons(subject, clip).unwrap().compute_boolean(BooleanOp::Union).unwrap();
    assert_eq!(result.len(), 2);
}

#[test]
fn square_minus_contained_square_leaves_a_hole() {
    let subject = square(0.0, 0.0, 10.0);
    let clip = square(2.0, 2.0, 6.0);
    let result =
        sweep_of_polygons(subject, clip).unwrap().compute_boolean(BooleanOp::Difference).unwrap();

    assert_eq!(result.len(), 2, "outer ring plus one hole ring");
    assert_ne!(result[0].winding_order(), result[1].winding_order());
}

#[test]
fn disjoint_polygons_intersection_is_empty_not_subject() {
    let subject = square(0.0, 0.0, 10.0);
    let clip = square(100.0, 100.0, 10.0);
    let result =
        sweep_of_polygons(subject, clip).unwrap().compute_boolean(BooleanOp::Intersection).unwrap();
    assert!(result.is_empty());
}
