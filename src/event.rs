//! The event model: `SweepEvent`, its pairing, and
//! the comparator that gives the event set a strict total order.
//!
//! Events live in an append-only arena (`EventArena`): each event's `pair`
//! is a stable `EventId` index into the arena rather than a raw pointer, so
//! pairing survives the arena's `Vec` reallocating as it grows. The arena
//! never frees a slot (the resolver only ever *adds* new half-edges via
//! `update_pair_vertex`), so indices handed out over the lifetime of
//! a sweep remain valid for that whole lifetime.

use crate::edge::Edge;
use crate::utils::calculate_signed_area3;
use crate::vertex::Vertex;
use std::cmp::Ordering;

/// A stable handle into an [`EventArena`].
pub type EventId = usize;

/// Which polygon (subject or clip) an edge belongs to; `None` in
/// segment-only modes (`has_intersection`, `get_intersections`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PolygonType {
    Subject,
    Clip,
}

/// Classification assigned by the resolver to collinear-overlap events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Normal,
    NoContributing,
    SameTransition,
    DifferentTransition,
}

/// A directed endpoint of an edge.
#[derive(Debug, Clone)]
pub struct SweepEvent {
    id: EventId,
    pub vertex: Vertex,
    pub pair: EventId,
    pub polygon_type: Option<PolygonType>,
    pub is_left: bool,
    pub label: Label,
    pub in_out: bool,
    pub is_inside: bool,
}

impl SweepEvent {
    /// Is the edge `(self.vertex, pair.vertex)` below `other`?
    #[inline]
    pub fn below(&self, pair_vertex: Vertex, other: &Vertex) -> bool {
        if self.is_left {
            calculate_signed_area3(&self.vertex, &pair_vertex, other) > 0.0
        } else {
            calculate_signed_area3(&pair_vertex, &self.vertex, other) > 0.0
        }
    }

    #[inline]
    pub fn above(&self, pair_vertex: Vertex, other: &Vertex) -> bool {
        !self.below(pair_vertex, other)
    }

    #[inline]
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Construct a standalone event. Its `id` is assigned when it is
    /// pushed into an [`EventArena`] via [`EventArena::push_raw`].
    pub fn new(vertex: Vertex, is_left: bool, pair: EventId, polygon_type: Option<PolygonType>) -> Self {
        Self {
            id: 0,
            vertex,
            pair,
            polygon_type,
            is_left,
            label: Label::Normal,
            in_out: false,
            is_inside: false,
        }
    }
}

/// An append-only store of events. Indices (`EventId`) handed out by
/// [`EventArena::push`] are stable for the lifetime of the arena.
#[derive(Debug, Default)]
pub struct EventArena {
    events: Vec<SweepEvent>,
}

impl EventArena {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    #[inline]
    pub fn get(&self, id: EventId) -> &SweepEvent {
        &self.events[id]
    }

    #[inline]
    pub fn get_mut(&mut self, id: EventId) -> &mut SweepEvent {
        &mut self.events[id]
    }

    #[inline]
    pub fn pair_vertex(&self, id: EventId) -> Vertex {
        self.events[self.events[id].pair].vertex
    }

    /// The edge this event's endpoint belongs to: `(self.vertex, pair.vertex)`.
    #[inline]
    pub fn edge_of(&self, id: EventId) -> Edge {
        Edge::new(self.events[id].vertex, self.pair_vertex(id))
    }

    #[inline]
    pub fn below(&self, id: EventId, other: &Vertex) -> bool {
        self.events[id].below(self.pair_vertex(id), other)
    }

    #[inline]
    pub fn above(&self, id: EventId, other: &Vertex) -> bool {
        !self.below(id, other)
    }

    /// Push an already-constructed event (its `pair` field must already be
    /// set to a valid or soon-to-be-patched `EventId`); returns its id.
    pub fn push_raw(&mut self, mut event: SweepEvent) -> EventId {
        let id = self.events.len();
        event.id = id;
        self.events.push(event);
        id
    }

    /// Insert a brand-new edge `u -> v` as a paired left/right event; returns
    /// `(left_id, right_id)`. Whichever of `u`, `v` sorts lexicographically
    /// smaller becomes the left endpoint.
    pub fn insert_edge(&mut self, u: Vertex, v: Vertex, polygon_type: Option<PolygonType>) -> (EventId, EventId) {
        let u_is_left = u <= v;
        let (left_vertex, right_vertex) = if u_is_left { (u, v) } else { (v, u) };

        let left_id = self.events.len();
        self.events.push(SweepEvent {
            id: left_id,
            vertex: left_vertex,
            pair: left_id + 1,
            polygon_type,
            is_left: true,
            label: Label::Normal,
            in_out: false,
            is_inside: false,
        });

        let right_id = self.events.len();
        self.events.push(SweepEvent {
            id: right_id,
            vertex: right_vertex,
            pair: left_id,
            polygon_type,
            is_left: false,
            label: Label::Normal,
            in_out: false,
            is_inside: false,
        });

        (left_id, right_id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The event ordering. A strict total
/// order: `Ordering::Equal` is returned only for `a == b`.
pub fn compare_events(arena: &EventArena, a: EventId, b: EventId) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let ea = arena.get(a);
    let eb = arena.get(b);

    if let Some(ord) = ea.vertex.x.partial_cmp(&eb.vertex.x) {
        if ord != Ordering::Equal {
            return ord;
        }
    }
    if let Some(ord) = ea.vertex.y.partial_cmp(&eb.vertex.y) {
        if ord != Ordering::Equal {
            return ord;
        }
    }

    // Same point: a right event precedes a left event.
    if ea.is_left != eb.is_left {
        return if ea.is_left { Ordering::Greater } else { Ordering::Less };
    }

    // Same point, same side: the event of the vertically lower edge (at the
    // current x) precedes. Order by the signed area sign of
    // (this.vertex, this.pair.vertex, other.pair.vertex).
    let ea_pair_vertex = arena.pair_vertex(a);
    let eb_pair_vertex = arena.pair_vertex(b);
    let area = if ea.is_left {
        calculate_signed_area3(&ea.vertex, &ea_pair_vertex, &eb_pair_vertex)
    } else {
        calculate_signed_area3(&ea_pair_vertex, &ea.vertex, &eb_pair_vertex)
    };
    match crate::utils::Sign::of(area) {
        crate::utils::Sign::Positive => Ordering::Less,
        crate::utils::Sign::Negative => Ordering::Greater,
        // Truly collinear: fall back to a deterministic tie-break.
        crate::utils::Sign::Equal => tie_break(ea, eb),
    }
}

fn tie_break(ea: &SweepEvent, eb: &SweepEvent) -> Ordering {
    ea.polygon_type
        .cmp(&eb.polygon_type)
        .then_with(|| ea.id().cmp(&eb.id()))
}
