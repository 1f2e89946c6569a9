use polyclip::{sweep_of_polygons, BooleanOp, Polygon, Vertex};

fn main() {
    // Triangle structure.
    let subject_polygon = Polygon::new(vec![
        Vertex::new(5.0, 5.0),
        Vertex::new(10.0, 10.0),
        Vertex::new(10.0, 5.0),
    ]);

    // Same as subject_polygon but offset by 2.0 in x.
    let clip_polygon = Polygon::new(vec![
        Vertex::new(7.0, 5.0),
        Vertex::new(12.0, 10.0),
        Vertex::new(12.0, 5.0),
    ]);

    let sweep = sweep_of_polygons(subject_polygon, clip_polygon).expect("valid input polygons");
    let difference = sweep.compute_boolean(BooleanOp::Difference).expect("sweep succeeds");
    println!("subject minus clip: {difference:?}");
}
