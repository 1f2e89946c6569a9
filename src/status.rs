//! The status structure: the vertically ordered
//! sequence of currently active left events.
//!
//! Kept as a sorted `Vec`: `O(n)` insertion is fine for the edge counts a
//! boolean overlay sweep typically deals with. `insert`/`remove` are `O(n)`;
//! `below`/`above` are `O(1)` once the index is known.

use crate::event::{EventArena, EventId};
use crate::utils::{calculate_signed_area3, Sign};
use crate::vertex::Vertex;
use std::cmp::Ordering;

#[derive(Debug, Default)]
pub struct Status {
    active: Vec<EventId>,
}

impl Status {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Insert `id` in vertical order; returns its new index.
    pub fn insert(&mut self, arena: &EventArena, id: EventId) -> usize {
        let idx = self
            .active
            .binary_search_by(|&existing| vertical_order(arena, existing, id))
            .unwrap_or_else(|i| i);
        self.active.insert(idx, id);
        idx
    }

    /// Remove `id` from the status, by identity.
    pub fn remove(&mut self, id: EventId) -> Option<usize> {
        let idx = self.active.iter().position(|&x| x == id)?;
        self.active.remove(idx);
        Some(idx)
    }

    fn index_of(&self, id: EventId) -> Option<usize> {
        self.active.iter().position(|&x| x == id)
    }

    /// Immediate neighbour below `id`, if any.
    pub fn below(&self, id: EventId) -> Option<EventId> {
        let idx = self.index_of(id)?;
        idx.checked_sub(1).map(|i| self.active[i])
    }

    /// Immediate neighbour above `id`, if any.
    pub fn above(&self, id: EventId) -> Option<EventId> {
        let idx = self.index_of(id)?;
        self.active.get(idx + 1).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.active.iter().copied()
    }
}

/// Vertical comparator for the status structure: `a < b` iff the edge of
/// `a`, evaluated at the larger of the
/// two starting x's, is strictly below the edge of `b`.
fn vertical_order(arena: &EventArena, a: EventId, b: EventId) -> Ordering {
    let va = arena.get(a).vertex;
    let vb = arena.get(b).vertex;

    if va == vb {
        let pa = arena.pair_vertex(a);
        let pb = arena.pair_vertex(b);
        return match Sign::of(calculate_signed_area3(&va, &pa, &pb)) {
            Sign::Positive => Ordering::Less,
            Sign::Negative => Ordering::Greater,
            Sign::Equal => a.cmp(&b),
        };
    }

    if va > vb {
        reference_order(arena, b, va).reverse()
    } else {
        reference_order(arena, a, vb)
    }
}

/// Is `older`'s edge below the point `reference`? `Less` if so.
fn reference_order(arena: &EventArena, older: EventId, reference: Vertex) -> Ordering {
    if arena.below(older, &reference) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventArena;

    #[test]
    fn inserts_in_vertical_order() {
        let mut arena = EventArena::new();
        let (low, _) = arena.insert_edge(Vertex::new(0.0, 0.0), Vertex::new(10.0, 0.0), None);
        let (high, _) = arena.insert_edge(Vertex::new(0.0, 5.0), Vertex::new(10.0, 5.0), None);

        let mut status = Status::new();
        status.insert(&arena, high);
        status.insert(&arena, low);

        assert_eq!(status.below(high), Some(low));
        assert_eq!(status.above(low), Some(high));
        assert_eq!(status.below(low), None);
        assert_eq!(status.above(high), None);
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut arena = EventArena::new();
        let (a, _) = arena.insert_edge(Vertex::new(0.0, 0.0), Vertex::new(10.0, 0.0), None);
        let (b, _) = arena.insert_edge(Vertex::new(0.0, 1.0), Vertex::new(10.0, 1.0), None);
        let (c, _) = arena.insert_edge(Vertex::new(0.0, 2.0), Vertex::new(10.0, 2.0), None);

        let mut status = Status::new();
        status.insert(&arena, a);
        status.insert(&arena, b);
        status.insert(&arena, c);

        status.remove(b);
        assert_eq!(status.below(c), Some(a));
        assert_eq!(status.above(a), Some(c));
    }
}
