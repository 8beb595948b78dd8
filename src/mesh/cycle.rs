//! Cyclic neighbor rings.

use super::index::{MeshIndex, VertexId};

/// The ordered ring of vertices adjacent to a center vertex.
///
/// Positions wrap around: `prev(0)` is the last neighbor and `next(len - 1)`
/// is the first. Weight formulas use this to find the two neighbors that
/// close the triangles on either side of an edge.
///
/// ```
/// use discmap::mesh::{NeighborCycle, VertexId};
///
/// let ids: Vec<VertexId> = (1..=4).map(VertexId::new).collect();
/// let cycle = NeighborCycle::new(VertexId::new(0), ids);
/// assert_eq!(cycle.prev(0), VertexId::new(4));
/// assert_eq!(cycle.next(3), VertexId::new(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCycle<I: MeshIndex = u32> {
    center: VertexId<I>,
    neighbors: Vec<VertexId<I>>,
}

impl<I: MeshIndex> NeighborCycle<I> {
    /// Create a cycle around `center`.
    pub fn new(center: VertexId<I>, neighbors: Vec<VertexId<I>>) -> Self {
        Self { center, neighbors }
    }

    /// The vertex the ring is centered on.
    #[inline]
    pub fn center(&self) -> VertexId<I> {
        self.center
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if the ring has no neighbors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// The neighbor at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    #[inline]
    pub fn get(&self, pos: usize) -> VertexId<I> {
        self.neighbors[pos]
    }

    /// The neighbor before the one at `pos`.
    #[inline]
    pub fn prev(&self, pos: usize) -> VertexId<I> {
        let n = self.neighbors.len();
        self.neighbors[(pos + n - 1) % n]
    }

    /// The neighbor after the one at `pos`.
    #[inline]
    pub fn next(&self, pos: usize) -> VertexId<I> {
        self.neighbors[(pos + 1) % self.neighbors.len()]
    }

    /// Position of `v` in the ring, if it is a neighbor.
    pub fn position_of(&self, v: VertexId<I>) -> Option<usize> {
        self.neighbors.iter().position(|&n| n == v)
    }

    /// Iterate over the neighbors in ring order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        self.neighbors.iter().copied()
    }

    /// The neighbors as a slice.
    pub fn as_slice(&self) -> &[VertexId<I>] {
        &self.neighbors
    }
}
