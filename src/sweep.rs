//! The sweep driver: pops events off the queue, keeps the status structure
//! current, calls the resolver on newly adjacent neighbours, and — in
//! overlay mode — computes in/out flags and feeds surviving edges to the
//! chainer.

use crate::chainer::EventChainer;
use crate::edge::Edge;
use crate::error::{Result, SweepError};
use crate::event::{EventArena, EventId, Label, PolygonType};
use crate::event_queue::EventQueue;
use crate::polygon::Polygon;
use crate::resolver::{resolve, ResolvedGeometry};
use crate::status::Status;
use crate::vertex::Vertex;
use log::{debug, trace};

/// A single piece of intersection geometry reported by [`SweepOfEdges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Vertex(Vertex),
    Edge(Edge),
}

/// The three boolean operations [`SweepOfPolygons::compute_boolean`] supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Intersection,
    Union,
    Difference,
}

fn validate_edges(edges: &[Edge]) -> Result<()> {
    for (index, edge) in edges.iter().enumerate() {
        if !edge.is_finite() {
            return Err(SweepError::NonFiniteCoordinate { index });
        }
        if edge.is_degenerate() {
            return Err(SweepError::DegenerateEdge { index });
        }
    }
    Ok(())
}

fn build_arena(edges: &[Edge], polygon_type: Option<PolygonType>) -> (EventArena, EventQueue) {
    let mut arena = EventArena::new();
    let mut queue = EventQueue::new();
    for edge in edges {
        let (l, r) = arena.insert_edge(edge.u, edge.v, polygon_type);
        queue.push(&arena, l);
        queue.push(&arena, r);
    }
    (arena, queue)
}

/// A bag of segments, queued up for existence/enumeration queries.
pub struct SweepOfEdges {
    arena: EventArena,
    queue: EventQueue,
}

/// Validate and queue `edges` for a segment-only sweep.
pub fn sweep_of_edges(edges: Vec<Edge>) -> Result<SweepOfEdges> {
    validate_edges(&edges)?;
    let (arena, queue) = build_arena(&edges, None);
    Ok(SweepOfEdges { arena, queue })
}

impl SweepOfEdges {
    /// Does any pair of input edges properly cross? A shared endpoint
    /// between two edges that otherwise don't overlap does not count.
    pub fn has_intersection(mut self) -> Result<bool> {
        let mut found = false;
        drive(&mut self.arena, &mut self.queue, |arena, _queue, geom| {
            let proper = match geom {
                ResolvedGeometry::None => false,
                ResolvedGeometry::Vertex { proper, .. } => proper,
                ResolvedGeometry::Edge(_) => true,
            };
            if proper {
                found = true;
            }
            let _ = arena;
            Ok(found)
        })?;
        Ok(found)
    }

    /// Every proper intersection among the input edges: single points for
    /// crossings and shared vertices, edges for collinear overlaps.
    /// Consecutive duplicates (the resolver's B5 flow can emit the same
    /// trailing sub-segment twice) are suppressed.
    pub fn get_intersections(mut self) -> Result<Vec<Geometry>> {
        let mut results: Vec<Geometry> = Vec::new();
        drive(&mut self.arena, &mut self.queue, |_arena, _queue, geom| {
            let next = match geom {
                ResolvedGeometry::None => None,
                ResolvedGeometry::Vertex { vertex, proper } if proper => {
                    Some(Geometry::Vertex(vertex))
                }
                ResolvedGeometry::Vertex { .. } => None,
                ResolvedGeometry::Edge(edge) => Some(Geometry::Edge(edge)),
            };
            if let Some(geom) = next {
                if results.last() != Some(&geom) {
                    results.push(geom);
                }
            }
            Ok(false)
        })?;
        Ok(results)
    }
}

/// A pair of polygons queued up for a boolean overlay.
pub struct SweepOfPolygons {
    subject: Polygon,
    clip: Polygon,
}

/// Validate and queue `subject`/`clip` for a boolean overlay.
pub fn sweep_of_polygons(subject: Polygon, clip: Polygon) -> Result<SweepOfPolygons> {
    validate_edges(&subject.edges().collect::<Vec<_>>())?;
    validate_edges(&clip.edges().collect::<Vec<_>>())?;
    Ok(SweepOfPolygons { subject, clip })
}

impl SweepOfPolygons {
    /// Compute the intersection, union, or difference of `subject` and
    /// `clip`, as a flat list of simple polygons (a hole is its own
    /// `Polygon` entry, wound opposite to its enclosing ring).
    pub fn compute_boolean(self, op: BooleanOp) -> Result<Vec<Polygon>> {
        if let Some(short_circuit) = empty_short_circuit(&self.subject, &self.clip, op) {
            return Ok(short_circuit);
        }
        if !self.subject.intersects(&self.clip) {
            return Ok(disjoint_short_circuit(self.subject, self.clip, op));
        }

        let subject_edges: Vec<Edge> = self.subject.edges().collect();
        let clip_edges: Vec<Edge> = self.clip.edges().collect();

        let mut arena = EventArena::new();
        let mut queue = EventQueue::new();
        for edge in &subject_edges {
            let (l, r) = arena.insert_edge(edge.u, edge.v, Some(PolygonType::Subject));
            queue.push(&arena, l);
            queue.push(&arena, r);
        }
        for edge in &clip_edges {
            let (l, r) = arena.insert_edge(edge.u, edge.v, Some(PolygonType::Clip));
            queue.push(&arena, l);
            queue.push(&arena, r);
        }

        let mut chainer = EventChainer::new();
        drive_overlay(&mut arena, &mut queue, op, &mut chainer)?;
        Ok(chainer.into_polygons())
    }
}

fn empty_short_circuit(subject: &Polygon, clip: &Polygon, op: BooleanOp) -> Option<Vec<Polygon>> {
    match (subject.is_empty(), clip.is_empty()) {
        (true, true) => Some(Vec::new()),
        (true, false) => Some(match op {
            BooleanOp::Difference | BooleanOp::Intersection => Vec::new(),
            BooleanOp::Union => vec![clip.clone()],
        }),
        (false, true) => Some(match op {
            BooleanOp::Intersection => Vec::new(),
            BooleanOp::Difference | BooleanOp::Union => vec![subject.clone()],
        }),
        (false, false) => None,
    }
}

/// `subject` and `clip` are known not to intersect at all.
fn disjoint_short_circuit(subject: Polygon, clip: Polygon, op: BooleanOp) -> Vec<Polygon> {
    match op {
        // A historically common bug returns `subject` here; two disjoint
        // regions share no area, so the correct result is empty.
        BooleanOp::Intersection => Vec::new(),
        BooleanOp::Union => vec![subject, clip],
        BooleanOp::Difference => vec![subject],
    }
}

/// Shared event-loop skeleton. `on_resolved` is called once per resolved
/// neighbour pair (including non-intersecting ones, as `ResolvedGeometry::None`)
/// and returns whether the driver should stop early.
fn drive(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    mut on_resolved: impl FnMut(&mut EventArena, &mut EventQueue, ResolvedGeometry) -> Result<bool>,
) -> Result<()> {
    let mut status = Status::new();
    while let Some(ev) = queue.pop(arena) {
        trace!("pop event {ev} vertex={:?} left={}", arena.get(ev).vertex, arena.get(ev).is_left);
        if arena.get(ev).is_left {
            status.insert(arena, ev);
            let below = status.below(ev);
            let above = status.above(ev);
            if let Some(b) = below {
                let geom = resolve(arena, queue, ev, b)?;
                if !matches!(geom, ResolvedGeometry::None) {
                    debug!("resolved intersection between {ev} and {b}");
                }
                if on_resolved(arena, queue, geom)? {
                    return Ok(());
                }
            }
            if let Some(a) = above {
                let geom = resolve(arena, queue, ev, a)?;
                if !matches!(geom, ResolvedGeometry::None) {
                    debug!("resolved intersection between {ev} and {a}");
                }
                if on_resolved(arena, queue, geom)? {
                    return Ok(());
                }
            }
        } else {
            let partner = arena.get(ev).pair;
            let below = status.below(partner);
            let above = status.above(partner);
            status.remove(partner);
            if let (Some(b), Some(a)) = (below, above) {
                let geom = resolve(arena, queue, b, a)?;
                if on_resolved(arena, queue, geom)? {
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

/// The overlay variant of the driver skeleton: computes `in_out`/`is_inside`
/// on left-event insertion and feeds contributing edges to `chainer` when
/// their right partner is removed.
fn drive_overlay(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    op: BooleanOp,
    chainer: &mut EventChainer,
) -> Result<()> {
    let mut status = Status::new();
    while let Some(ev) = queue.pop(arena) {
        if arena.get(ev).is_left {
            status.insert(arena, ev);
            let below = status.below(ev);
            classify(arena, ev, below);

            let above = status.above(ev);
            if let Some(b) = below {
                resolve(arena, queue, ev, b)?;
            }
            if let Some(a) = above {
                resolve(arena, queue, ev, a)?;
            }
        } else {
            let partner = arena.get(ev).pair;
            let below = status.below(partner);
            let above = status.above(partner);

            if contributes(arena, partner, op) {
                chainer.add_edge(arena.edge_of(partner));
            }

            status.remove(partner);
            if let (Some(b), Some(a)) = (below, above) {
                resolve(arena, queue, b, a)?;
            }
        }
    }
    Ok(())
}

/// Sets `in_out`/`is_inside` on `ev` (a just-inserted left event) from its
/// `below` neighbour, per the overlay classification table.
fn classify(arena: &mut EventArena, ev: EventId, below: Option<EventId>) {
    let (is_inside, in_out) = match below {
        None => (false, false),
        Some(b) => {
            let below_event = arena.get(b);
            let (below_is_inside, below_in_out, below_polygon) =
                (below_event.is_inside, below_event.in_out, below_event.polygon_type);
            if below_polygon == arena.get(ev).polygon_type {
                (below_is_inside, !below_in_out)
            } else {
                (!below_in_out, below_is_inside)
            }
        }
    };
    let event = arena.get_mut(ev);
    event.is_inside = is_inside;
    event.in_out = in_out;
}

/// Does `ev` (a left event about to be removed, i.e. its edge is final)
/// contribute to the output of `op`?
fn contributes(arena: &EventArena, ev: EventId, op: BooleanOp) -> bool {
    let event = arena.get(ev);
    if event.label == Label::NoContributing {
        return false;
    }
    match event.label {
        Label::SameTransition => return matches!(op, BooleanOp::Intersection | BooleanOp::Union),
        Label::DifferentTransition => return matches!(op, BooleanOp::Difference),
        Label::Normal | Label::NoContributing => {}
    }

    match op {
        BooleanOp::Intersection => event.is_inside,
        BooleanOp::Union => !event.is_inside,
        BooleanOp::Difference => match event.polygon_type {
            Some(PolygonType::Subject) => !event.is_inside,
            Some(PolygonType::Clip) => event.is_inside,
            None => false,
        },
    }
}
