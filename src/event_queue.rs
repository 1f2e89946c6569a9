//! The event queue: a min-priority queue over the
//! event ordering, realized as a handle-indexed binary heap so that
//! `update_at`/`update` can re-key an already-queued event in `O(log n)`
//! after the resolver shrinks its pair.

use crate::error::SweepError;
use crate::event::{compare_events, EventArena, EventId};
use log::error;
use std::cmp::Ordering;

const ABSENT: usize = usize::MAX;

/// Min-heap of [`EventId`]s, ordered by [`compare_events`].
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: Vec<EventId>,
    /// `position[event_id]` = index into `heap`, or `ABSENT`.
    position: Vec<usize>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { heap: Vec::new(), position: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn peek(&self) -> Option<EventId> {
        self.heap.first().copied()
    }

    #[inline]
    pub fn contains(&self, id: EventId) -> bool {
        self.position.get(id).is_some_and(|&p| p != ABSENT)
    }

    fn ensure_capacity(&mut self, id: EventId) {
        if self.position.len() <= id {
            self.position.resize(id + 1, ABSENT);
        }
    }

    /// Insert a brand-new event into the queue.
    pub fn push(&mut self, arena: &EventArena, id: EventId) {
        self.ensure_capacity(id);
        let idx = self.heap.len();
        self.heap.push(id);
        self.position[id] = idx;
        self.sift_up(arena, idx);
    }

    /// Remove and return the minimum event.
    pub fn pop(&mut self, arena: &EventArena) -> Option<EventId> {
        if self.heap.is_empty() {
            return None;
        }
        let root = self.heap[0];
        self.position[root] = ABSENT;
        let last = self.heap.pop().unwrap();
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.position[last] = 0;
            self.sift_down(arena, 0);
        }
        Some(root)
    }

    /// Re-key `id` after its sort-relevant fields (reached through its
    /// `pair`) changed. Runs in `O(log n)`.
    pub fn update(&mut self, arena: &EventArena, id: EventId) -> Result<(), SweepError> {
        let idx = match self.position.get(id) {
            Some(&p) if p != ABSENT => p,
            _ => {
                error!("re-key requested for absent event {id}");
                return Err(SweepError::QueueRekeyMissing(id));
            }
        };
        let moved_up = self.sift_up(arena, idx);
        if !moved_up {
            self.sift_down(arena, idx);
        }
        Ok(())
    }

    fn less(&self, arena: &EventArena, i: usize, j: usize) -> bool {
        compare_events(arena, self.heap[i], self.heap[j]) == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = i;
        self.position[self.heap[j]] = j;
    }

    /// Returns true if the element actually moved up.
    fn sift_up(&mut self, arena: &EventArena, mut idx: usize) -> bool {
        let start = idx;
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(arena, idx, parent) {
                self.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
        idx != start
    }

    fn sift_down(&mut self, arena: &EventArena, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;
            if left < len && self.less(arena, left, smallest) {
                smallest = left;
            }
            if right < len && self.less(arena, right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;

    #[test]
    fn pops_in_sweep_order() {
        let mut arena = EventArena::new();
        let mut queue = EventQueue::new();

        let (l1, r1) = arena.insert_edge(Vertex::new(5.0, 0.0), Vertex::new(10.0, 0.0), None);
        let (l2, r2) = arena.insert_edge(Vertex::new(0.0, 0.0), Vertex::new(3.0, 0.0), None);

        for id in [l1, r1, l2, r2] {
            queue.push(&arena, id);
        }

        let first = queue.pop(&arena).unwrap();
        assert_eq!(arena.get(first).vertex, Vertex::new(0.0, 0.0));
    }

    #[test]
    fn update_rekeys_after_pair_mutation() {
        let mut arena = EventArena::new();
        let mut queue = EventQueue::new();

        let (l1, r1) = arena.insert_edge(Vertex::new(0.0, 0.0), Vertex::new(10.0, 0.0), None);
        let (l2, r2) = arena.insert_edge(Vertex::new(1.0, 0.0), Vertex::new(2.0, 0.0), None);
        for id in [l1, r1, l2, r2] {
            queue.push(&arena, id);
        }

        // Shrink edge 1's right endpoint down to x=3, simulating a split,
        // and re-key it.
        arena.get_mut(r1).vertex = Vertex::new(3.0, 0.0);
        queue.update(&arena, r1).unwrap();

        let mut popped = Vec::new();
        while let Some(id) = queue.pop(&arena) {
            popped.push(arena.get(id).vertex.x);
        }
        let mut expected = vec![0.0, 1.0, 2.0, 3.0];
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(popped, expected);
    }

    #[test]
    fn update_on_absent_event_is_an_error() {
        let arena = EventArena::new();
        let mut queue = EventQueue::new();
        assert!(queue.update(&arena, 42).is_err());
    }
}
