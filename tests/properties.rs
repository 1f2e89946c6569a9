//! Property-based coverage for the quantified invariants: random bags of
//! axis-aligned and diagonal segments, and random simple (convex, so
//! trivially simple) polygons.

use polyclip::{fsize, sweep_of_edges, sweep_of_polygons, BooleanOp, Edge, Polygon, Vertex};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = fsize> {
    (-50i32..50i32).prop_map(|n| n as fsize)
}

fn segment() -> impl Strategy<Value = Edge> {
    (coord(), coord(), coord(), coord()).prop_filter_map("non-degenerate", |(x0, y0, x1, y1)| {
        let u = Vertex::new(x0, y0);
        let v = Vertex::new(x1, y1);
        (!u.is_close_default(&v)).then(|| Edge::new(u, v))
    })
}

/// An axis-aligned square, always simple by construction.
fn square(x0: fsize, y0: fsize, side: fsize) -> Polygon {
    Polygon::new(vec![
        Vertex::new(x0, y0),
        Vertex::new(x0 + side, y0),
        Vertex::new(x0 + side, y0 + side),
        Vertex::new(x0, y0 + side),
    ])
}

fn square_strategy() -> impl Strategy<Value = Polygon> {
    (coord(), coord(), (1i32..40i32).prop_map(|n| n as fsize)).prop_map(|(x0, y0, side)| square(x0, y0, side))
}

proptest! {
    /// `get_intersections` is idempotent: running it twice on the same
    /// input edges produces the same result.
    #[test]
    fn get_intersections_is_idempotent(edges in prop::collection::vec(segment(), 2..8)) {
        let first = sweep_of_edges(edges.clone()).unwrap().get_intersections().unwrap();
        let second = sweep_of_edges(edges).unwrap().get_intersections().unwrap();
        prop_assert_eq!(first, second);
    }

    /// Union is commutative.
    #[test]
    fn union_is_commutative(a in square_strategy(), b in square_strategy()) {
        let ab = sweep_of_polygons(a.clone(), b.clone()).unwrap().compute_boolean(BooleanOp::Union).unwrap();
        let ba = sweep_of_polygons(b, a).unwrap().compute_boolean(BooleanOp::Union).unwrap();
        prop_assert_eq!(ab.len(), ba.len());
    }

    /// Intersection is commutative.
    #[test]
    fn intersection_is_commutative(a in square_strategy(), b in square_strategy()) {
        let ab = sweep_of_polygons(a.clone(), b.clone())
            .unwrap()
            .compute_boolean(BooleanOp::Intersection)
            .unwrap();
        let ba = sweep_of_polygons(b, a).unwrap().compute_boolean(BooleanOp::Intersection).unwrap();
        prop_assert_eq!(ab.len(), ba.len());
    }

    /// `A \ A == ∅`.
    #[test]
    fn difference_with_self_is_empty(a in square_strategy()) {
        let result = sweep_of_polygons(a.clone(), a).unwrap().compute_boolean(BooleanOp::Difference).unwrap();
        prop_assert!(result.is_empty());
    }

    /// `A ∩ ∅ == ∅`, `A ∪ ∅ == A`.
    #[test]
    fn identities_with_the_empty_polygon(a in square_strategy()) {
        let empty = Polygon::new(Vec::new());

        let intersection = sweep_of_polygons(a.clone(), empty.clone())
            .unwrap()
            .compute_boolean(BooleanOp::Intersection)
            .unwrap();
        prop_assert!(intersection.is_empty());

        let union = sweep_of_polygons(a, empty).unwrap().compute_boolean(BooleanOp::Union).unwrap();
        prop_assert_eq!(union.len(), 1);
    }
}
