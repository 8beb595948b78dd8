//! The read-only mesh interface consumed by parameterization.

use nalgebra::Point3;

use super::cycle::NeighborCycle;
use super::halfedge::HalfEdgeMesh;
use super::index::{FaceId, MeshIndex, VertexId};

/// Topology and geometry queries needed to parameterize a surface.
///
/// Implementors expose vertex positions, boundary information and the cyclic
/// ring of neighbors around each vertex. Vertex IDs must be dense in
/// `0..num_vertices()`.
pub trait MeshAdaptor: Sync {
    /// Integer type backing the vertex indices.
    type Index: MeshIndex;

    /// Number of vertices.
    fn num_vertices(&self) -> usize;

    /// Number of undirected edges.
    fn num_edges(&self) -> usize;

    /// Number of faces.
    fn num_faces(&self) -> usize;

    /// Number of sides of a face.
    fn face_degree(&self, face: FaceId<Self::Index>) -> usize;

    /// The corners of a triangular face in face order.
    ///
    /// For larger faces the first three corners.
    fn face_triangle(&self, face: FaceId<Self::Index>) -> [VertexId<Self::Index>; 3];

    /// 3D position of a vertex.
    fn vertex_position(&self, v: VertexId<Self::Index>) -> Point3<f64>;

    /// Whether a vertex lies on the boundary.
    fn is_border_vertex(&self, v: VertexId<Self::Index>) -> bool;

    /// All boundary loops, each in cyclic order.
    fn border_loops(&self) -> Vec<Vec<VertexId<Self::Index>>>;

    /// The neighbors of `v` in cyclic order.
    fn neighbor_cycle(&self, v: VertexId<Self::Index>) -> NeighborCycle<Self::Index>;

    /// `V - E + F`.
    fn euler_characteristic(&self) -> i64 {
        self.num_vertices() as i64 - self.num_edges() as i64 + self.num_faces() as i64
    }
}

impl<I: MeshIndex> MeshAdaptor for HalfEdgeMesh<I> {
    type Index = I;

    fn num_vertices(&self) -> usize {
        HalfEdgeMesh::num_vertices(self)
    }

    fn num_edges(&self) -> usize {
        HalfEdgeMesh::num_edges(self)
    }

    fn num_faces(&self) -> usize {
        HalfEdgeMesh::num_faces(self)
    }

    fn face_degree(&self, face: FaceId<I>) -> usize {
        HalfEdgeMesh::face_degree(self, face)
    }

    fn face_triangle(&self, face: FaceId<I>) -> [VertexId<I>; 3] {
        HalfEdgeMesh::face_triangle(self, face)
    }

    fn vertex_position(&self, v: VertexId<I>) -> Point3<f64> {
        *self.position(v)
    }

    fn is_border_vertex(&self, v: VertexId<I>) -> bool {
        self.is_boundary_vertex(v)
    }

    fn border_loops(&self) -> Vec<Vec<VertexId<I>>> {
        self.boundary_loops()
    }

    fn neighbor_cycle(&self, v: VertexId<I>) -> NeighborCycle<I> {
        HalfEdgeMesh::neighbor_cycle(self, v)
    }

    fn euler_characteristic(&self) -> i64 {
        HalfEdgeMesh::euler_characteristic(self)
    }
}
