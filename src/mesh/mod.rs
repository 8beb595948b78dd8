//! Core mesh data structures.
//!
//! The primary type is [`HalfEdgeMesh`], a half-edge (doubly-connected edge
//! list) representation with O(1) adjacency queries. Algorithms do not use it
//! directly; they read surfaces through the [`MeshAdaptor`] trait, which
//! `HalfEdgeMesh` implements and which other mesh types can implement too.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`HalfEdgeId`] - Identifies a half-edge
//! - [`FaceId`] - Identifies a face
//!
//! These are generic over the underlying integer type ([`MeshIndex`]), so a mesh
//! can use `u16`, `u32` or `u64` indices.
//!
//! # Construction
//!
//! ```
//! use discmap::mesh::{HalfEdgeMesh, build_from_triangles};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
//! assert_eq!(mesh.boundary_loops().len(), 1);
//! ```

mod adaptor;
mod builder;
mod cycle;
mod halfedge;
mod index;

pub use adaptor::MeshAdaptor;
pub use builder::{build_from_polygons, build_from_triangles, to_polygons};
pub use cycle::NeighborCycle;
pub use halfedge::{
    Face, FaceHalfEdgeIter, HalfEdge, HalfEdgeMesh, Vertex, VertexHalfEdgeIter,
};
pub use index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
