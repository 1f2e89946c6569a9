//! A Bentley-Ottmann plane-sweep engine for 2D straight-line segments.
//!
//! Three entry points, all synchronous and single-threaded:
//!
//! - [`sweep_of_edges`] — does any pair of segments properly cross
//!   ([`SweepOfEdges::has_intersection`]), or what are all of their
//!   intersections ([`SweepOfEdges::get_intersections`])?
//! - [`sweep_of_polygons`] — compute the [intersection, union, difference]
//!   of two simple polygons as a flat list of simple polygons
//!   ([`SweepOfPolygons::compute_boolean`]).
//!
//! The geometric primitives (`Vertex`, `Edge`, `Polygon`) live in this crate
//! alongside the sweep core rather than in a separate dependency, but the
//! core never reaches past their public contract.

#[cfg(not(feature = "use_double_precision"))]
pub type fsize = f32;
#[cfg(feature = "use_double_precision")]
pub type fsize = f64;

mod bbox;
mod chainer;
mod edge;
mod error;
mod event;
mod event_queue;
mod polygon;
mod resolver;
mod status;
mod sweep;
mod utils;
mod vertex;

pub use bbox::Bbox;
pub use edge::{Edge, Intersection};
pub use error::SweepError;
pub use polygon::{calculate_bounding_box, calculate_winding_order, Polygon, WindingOrder};
pub use sweep::{sweep_of_edges, sweep_of_polygons, BooleanOp, Geometry, SweepOfEdges, SweepOfPolygons};
pub use utils::{calculate_signed_area2, calculate_signed_area3};
pub use vertex::{Vertex, DEFAULT_TOLERANCE};
