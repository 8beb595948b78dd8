//! # discmap
//!
//! Fixed-border parameterization of disc-shaped triangle meshes.
//!
//! discmap flattens a 3D surface with one boundary loop onto the plane. The
//! boundary is pinned to a convex shape and every interior vertex is placed at
//! a weighted average of its neighbors. With Floater's mean-value coordinates
//! the weights are always positive, so the result is guaranteed to be
//! one-to-one.
//!
//! ## Features
//!
//! - **Half-edge data structure**: O(1) adjacency queries with type-safe indices
//! - **Flexible indexing**: Support for 16-bit, 32-bit, and 64-bit indices
//! - **Pluggable pieces**: weights, border shape and linear solver are type
//!   parameters of [`FixedBorderParameterizer`](algo::parameterize::FixedBorderParameterizer)
//! - **Bring your own mesh**: algorithms read surfaces through the
//!   [`MeshAdaptor`](mesh::MeshAdaptor) trait
//! - **File formats**: OBJ, PLY, STL in; OBJ and PLY with UVs out
//!
//! ## Quick Start
//!
//! ```no_run
//! use discmap::prelude::*;
//! use discmap::algo::parameterize::mean_value_coordinates;
//!
//! let mesh: HalfEdgeMesh = discmap::io::load("face.obj").unwrap();
//!
//! let result = mean_value_coordinates(&mesh).unwrap();
//! assert!(result.one_to_one);
//!
//! discmap::io::save_with_uvs(&mesh, &result.uv, "face_uv.obj").unwrap();
//! ```
//!
//! ## Building Meshes Programmatically
//!
//! ```
//! use discmap::prelude::*;
//! use nalgebra::Point3;
//!
//! // a pyramid without its base: one boundary loop around four faces
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];
//!
//! let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
//! assert_eq!(mesh.boundary_loops().len(), 1);
//! assert_eq!(mesh.euler_characteristic(), 1);
//!
//! // neighbors of the apex, in circulation order
//! let ring = mesh.neighbor_cycle(VertexId::new(4));
//! assert_eq!(ring.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use discmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, ParamError, ParamResult, Result};
    pub use crate::mesh::{
        build_from_polygons, build_from_triangles, FaceId, HalfEdgeId, HalfEdgeMesh, MeshAdaptor,
        MeshIndex, NeighborCycle, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
