//! The polygon chainer: reconstructs closed rings
//! from the surviving, labelled half-edges the boolean sweep hands it.

use crate::edge::Edge;
use crate::polygon::Polygon;
use crate::vertex::Vertex;
use std::collections::VecDeque;

/// An in-progress chain of linked vertices, built by repeatedly linking
/// edges that share an endpoint with the chain's current ends.
#[derive(Clone, Debug)]
struct PointChain {
    nodes: VecDeque<Vertex>,
    is_closed: bool,
}

impl PointChain {
    fn init(edge: Edge) -> Self {
        let mut nodes = VecDeque::with_capacity(4);
        nodes.push_back(edge.u);
        nodes.push_back(edge.v);
        Self { nodes, is_closed: false }
    }

    /// Try to extend this chain with `edge`; returns whether it linked.
    fn link_edge(&mut self, edge: Edge) -> bool {
        let first = *self.nodes.front().unwrap();
        let last = *self.nodes.back().unwrap();

        if edge.u.is_close_default(&first) {
            if edge.v.is_close_default(&last) {
                self.is_closed = true;
            } else {
                self.nodes.push_front(edge.v);
            }
            true
        } else if edge.v.is_close_default(&last) {
            if edge.u.is_close_default(&first) {
                self.is_closed = true;
            } else {
                self.nodes.push_back(edge.u);
            }
            true
        } else if edge.v.is_close_default(&first) {
            if edge.u.is_close_default(&last) {
                self.is_closed = true;
            } else {
                self.nodes.push_front(edge.u);
            }
            true
        } else if edge.u.is_close_default(&last) {
            if edge.v.is_close_default(&first) {
                self.is_closed = true;
            } else {
                self.nodes.push_back(edge.v);
            }
            true
        } else {
            false
        }
    }

    /// Try to splice `other` onto this chain; returns whether it linked.
    fn link_chain(&mut self, mut other: PointChain) -> bool {
        let other_first = *other.nodes.front().unwrap();
        let other_last = *other.nodes.back().unwrap();
        let self_first = *self.nodes.front().unwrap();
        let self_last = *self.nodes.back().unwrap();

        if other_first.is_close_default(&self_last) {
            other.nodes.pop_front();
            self.nodes.extend(other.nodes);
            true
        } else if other_last.is_close_default(&self_first) {
            self.nodes.pop_front();
            for node in other.nodes.into_iter().rev() {
                self.nodes.push_front(node);
            }
            true
        } else if other_first.is_close_default(&self_first) {
            self.nodes.pop_front();
            for node in other.nodes.into_iter() {
                self.nodes.push_front(node);
            }
            true
        } else if other_last.is_close_default(&self_last) {
            self.nodes.pop_back();
            for node in other.nodes.into_iter().rev() {
                self.nodes.push_back(node);
            }
            true
        } else {
            false
        }
    }

    fn into_polygon(self) -> Polygon {
        Polygon::new(self.nodes.into_iter().collect())
    }
}

/// Accumulates surviving half-edges from a completed boolean sweep and
/// emits closed polygons. Kept isolated from the sweep driver so it can be
/// unit-tested against synthetic edge streams.
#[derive(Default)]
pub struct EventChainer {
    open: Vec<PointChain>,
    closed: Vec<PointChain>,
}

impl EventChainer {
    pub fn new() -> Self {
        Self { open: Vec::new(), closed: Vec::new() }
    }

    /// Feed one surviving, contributing edge into the chainer.
    pub fn add_edge(&mut self, edge: Edge) {
        let mut linked_at = None;
        for (i, chain) in self.open.iter_mut().enumerate() {
            if chain.link_edge(edge) {
                linked_at = Some(i);
                break;
            }
        }

        let Some(i) = linked_at else {
            self.open.push(PointChain::init(edge));
            return;
        };

        if self.open[i].is_closed {
            self.closed.push(self.open.remove(i));
            return;
        }

        // The chain at `i` may now be linkable to some other open chain.
        let mut j = 0;
        while j < self.open.len() {
            if j == i {
                j += 1;
                continue;
            }
            let other = self.open[j].clone();
            if self.open[i].link_chain(other) {
                self.open.remove(j);
                if j < i {
                    // indices shifted; `i` moved down by one
                    if self.open[i - 1].is_closed {
                        self.closed.push(self.open.remove(i - 1));
                    }
                    return;
                }
            } else {
                j += 1;
            }
        }

        if self.open[i].is_closed {
            self.closed.push(self.open.remove(i));
        }
    }

    /// Consume the chainer, returning every closed ring as a [`Polygon`].
    /// Open (unclosed) chains indicate a malformed or degenerate input and
    /// are dropped; a well-formed boolean overlay never produces one.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.closed
            .into_iter()
            .filter(|c| c.nodes.len() >= 3)
            .map(PointChain::into_polygon)
            .collect()
    }
}
