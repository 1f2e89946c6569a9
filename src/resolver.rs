//! The intersection resolver: given two active
//! left events whose edges overlap or cross, restores the "no two active
//! edges properly cross" invariant by splitting edges at the intersection
//! point, or by labelling collinear duplicates.

use crate::edge::Intersection;
use crate::error::SweepError;
use crate::event::{EventArena, EventId, Label, PolygonType, SweepEvent};
use crate::event_queue::EventQueue;
use crate::vertex::Vertex;
use log::debug;
use std::cmp::Ordering;

/// The geometry produced by a single `resolve` call, handed back to the
/// driver for `get_intersections`'s deduplicated result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedGeometry {
    None,
    /// A single-point crossing. `proper` is false when `v` was already an
    /// endpoint of *both* edges (the two segments merely touch tip-to-tip),
    /// which `has_intersection` does not count as an intersection.
    Vertex { vertex: Vertex, proper: bool },
    Edge(crate::edge::Edge),
}

/// Split `ev`'s edge at `v` (the `update_pair_vertex` operation).
///
/// `ev` must be a left event and `v` must lie strictly between `ev.vertex`
/// and `ev`'s current pair vertex. Returns the `EventId` of the freshly
/// created left event for the far half (`v -> old_pair_vertex`), so the
/// caller can chain a second split onto it (B5's "split the new right
/// half again").
pub fn split_edge(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    ev: EventId,
    v: Vertex,
) -> Result<EventId, SweepError> {
    debug_assert!(arena.get(ev).is_left, "split_edge expects a left event");

    let old_pair = arena.get(ev).pair;
    let polygon_type = arena.get(ev).polygon_type;
    let old_pair_vertex = arena.get(old_pair).vertex;

    debug!("splitting edge {ev} at far point, far-half to {old_pair}");

    // ev's new right half: ev -> v.
    let new_right_is_left = false;
    let new_right_id = push_event(arena, v, new_right_is_left, ev, polygon_type);
    arena.get_mut(ev).pair = new_right_id;
    queue.push(arena, new_right_id);

    // The far half, as a brand-new edge: v -> old_pair_vertex.
    let new_left_id = push_event(arena, v, true, old_pair, polygon_type);
    let _ = old_pair_vertex;
    arena.get_mut(old_pair).pair = new_left_id;
    queue.push(arena, new_left_id);
    queue.update(arena, old_pair)?;

    Ok(new_left_id)
}

fn push_event(
    arena: &mut EventArena,
    vertex: Vertex,
    is_left: bool,
    pair: EventId,
    polygon_type: Option<PolygonType>,
) -> EventId {
    arena.push_raw(SweepEvent::new(vertex, is_left, pair, polygon_type))
}

/// Resolve a pair of active left events whose edges were found to overlap
/// or cross. Returns the geometry of the intersection, for callers that
/// need to report it (`get_intersections`).
pub fn resolve(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    a: EventId,
    b: EventId,
) -> Result<ResolvedGeometry, SweepError> {
    let edge_a = arena.edge_of(a);
    let edge_b = arena.edge_of(b);

    match edge_a.intersection(&edge_b) {
        Intersection::None => Ok(ResolvedGeometry::None),
        Intersection::Point(v) => {
            let split_a = resolve_point(arena, queue, a, v)?;
            let split_b = resolve_point(arena, queue, b, v)?;
            Ok(ResolvedGeometry::Vertex { vertex: v, proper: split_a || split_b })
        }
        Intersection::Overlap(s) => {
            resolve_overlap(arena, queue, a, b)?;
            Ok(ResolvedGeometry::Edge(s))
        }
    }
}

/// Case A: split `ev` at `v` unless `v` is already one of its own two
/// endpoints. Returns whether a split actually happened.
fn resolve_point(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    ev: EventId,
    v: Vertex,
) -> Result<bool, SweepError> {
    let vertex = arena.get(ev).vertex;
    let pair_vertex = arena.pair_vertex(ev);
    if v.is_close_default(&vertex) || v.is_close_default(&pair_vertex) {
        return Ok(false);
    }
    split_edge(arena, queue, ev, v)?;
    Ok(true)
}

/// Case B: the two edges share a collinear sub-segment. Five sub-cases,
/// keyed on how the four endpoints (each edge's own left/right, since both
/// `a` and `b` are left events and therefore `vertex < pair.vertex`)
/// interleave, plus the mirror image of each named case (the status
/// structure's below/above relationship doesn't guarantee which of `a`, `b`
/// plays which role, so both orderings are handled explicitly here).
fn resolve_overlap(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    a: EventId,
    b: EventId,
) -> Result<(), SweepError> {
    let a0 = arena.get(a).vertex;
    let a1 = arena.pair_vertex(a);
    let b0 = arena.get(b).vertex;
    let b1 = arena.pair_vertex(b);

    let start_cmp = cmp_close(&a0, &b0);
    let end_cmp = cmp_close(&a1, &b1);

    match (start_cmp, end_cmp) {
        (Ordering::Equal, Ordering::Equal) => {
            // B1: identical edges.
            let same_transition = arena.get(a).in_out == arena.get(b).in_out;
            arena.get_mut(a).label = Label::NoContributing;
            arena.get_mut(b).label = if same_transition {
                Label::SameTransition
            } else {
                Label::DifferentTransition
            };
            Ok(())
        }
        (Ordering::Equal, Ordering::Less) => {
            // B2: shared start, a shorter -> split b at a1.
            split_edge(arena, queue, b, a1)?;
            Ok(())
        }
        (Ordering::Equal, Ordering::Greater) => {
            // B2 mirror: shared start, b shorter -> split a at b1.
            split_edge(arena, queue, a, b1)?;
            Ok(())
        }
        (Ordering::Less, Ordering::Equal) => {
            // B3: shared end, b shorter -> split a at b0.
            split_edge(arena, queue, a, b0)?;
            Ok(())
        }
        (Ordering::Greater, Ordering::Equal) => {
            // B3 mirror: shared end, a shorter -> split b at a0.
            split_edge(arena, queue, b, a0)?;
            Ok(())
        }
        (Ordering::Less, Ordering::Less) => {
            // B4: straddle, a0 < b0 < a1 < b1 -> split a at b0, b at a1.
            split_edge(arena, queue, a, b0)?;
            split_edge(arena, queue, b, a1)?;
            Ok(())
        }
        (Ordering::Greater, Ordering::Greater) => {
            // B4 mirror: straddle, b0 < a0 < b1 < a1.
            split_edge(arena, queue, b, a0)?;
            split_edge(arena, queue, a, b1)?;
            Ok(())
        }
        (Ordering::Less, Ordering::Greater) => {
            // B5: a fully contains b (a0 < b0 < b1 < a1).
            arena.get_mut(b).label = Label::NoContributing;
            let far_half = split_edge(arena, queue, a, b0)?;
            split_edge(arena, queue, far_half, b1)?;
            Ok(())
        }
        (Ordering::Greater, Ordering::Less) => {
            // B5 mirror: b fully contains a (b0 < a0 < a1 < b1).
            arena.get_mut(a).label = Label::NoContributing;
            let far_half = split_edge(arena, queue, b, a0)?;
            split_edge(arena, queue, far_half, a1)?;
            Ok(())
        }
    }
}

fn cmp_close(u: &Vertex, v: &Vertex) -> Ordering {
    if u.is_close_default(v) {
        Ordering::Equal
    } else {
        u.cmp(v)
    }
}
