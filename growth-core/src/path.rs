//! The closed polyline being grown.

use crate::geometry;
use crate::types::NodeIndex;
use glam::Vec2;

/// An ordered sequence of nodes interpreted as a closed cycle: the
/// successor of the last node is the first, and vice versa.
///
/// Adjacency in the sequence defines connectedness for the attraction and
/// alignment forces; beyond that, position in the sequence only reflects
/// insertion order from past splits. The engine mutates the path in place
/// every step.
#[derive(Debug, Clone)]
pub struct Path {
    pub nodes: Vec<Vec2>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a regular polygon seed path.
    pub fn regular(sides: usize, center: Vec2, radius: f32) -> Self {
        Self {
            nodes: geometry::regular_polygon(sides, center, radius),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cycle predecessor of node `i`.
    #[inline]
    pub fn prev_index(&self, i: NodeIndex) -> NodeIndex {
        if i == 0 { self.nodes.len() - 1 } else { i - 1 }
    }

    /// Cycle successor of node `i`.
    #[inline]
    pub fn next_index(&self, i: NodeIndex) -> NodeIndex {
        if i + 1 == self.nodes.len() { 0 } else { i + 1 }
    }

    /// Length of the edge from node `i` back to its cycle predecessor.
    #[inline]
    pub fn edge_to_prev(&self, i: NodeIndex) -> f32 {
        self.nodes[self.prev_index(i)].distance(self.nodes[i])
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}
