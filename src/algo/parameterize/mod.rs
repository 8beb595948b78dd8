//! Fixed-border UV parameterization.
//!
//! This module maps a disc-shaped triangle mesh onto the plane. The boundary
//! is pinned to a convex curve and the interior is solved from a sparse
//! linear system built from per-edge weights, one system per planar axis.
//!
//! # Available Algorithms
//!
//! - [`mean_value_coordinates`]: Floater's mean-value coordinates onto the
//!   unit circle, always one-to-one
//! - [`FixedBorderParameterizer`]: the general form, combining any
//!   [`WeightStrategy`], [`BorderMapper`] and [`SparseSolver`]
//!
//! # Requirements
//!
//! The mesh must be a triangulated topological disc: exactly one boundary
//! loop and Euler characteristic 1. Closed meshes must first be cut.
//!
//! # Example
//!
//! ```no_run
//! use discmap::prelude::*;
//! use discmap::algo::parameterize::mean_value_coordinates;
//!
//! let mesh: HalfEdgeMesh = discmap::io::load("input.obj").unwrap();
//!
//! let result = mean_value_coordinates(&mesh).unwrap();
//! assert!(result.one_to_one);
//!
//! for vid in mesh.vertex_ids() {
//!     let uv = result.uv.get(vid);
//!     println!("Vertex {:?}: u={:.3}, v={:.3}", vid, uv.x, uv.y);
//! }
//! ```
//!
//! # References
//!
//! - Floater, M. S. (2003). "Mean value coordinates." Computer Aided
//!   Geometric Design 20(1).
//! - Floater, M. S., & Hormann, K. (2005). "Surface parameterization: a
//!   tutorial and survey." Advances in Multiresolution for Geometric
//!   Modelling.

mod bijectivity;
mod border;
mod fixed_border;
mod mean_value;
mod sparse;
mod uv;
mod weights;

#[cfg(test)]
mod fixtures;

pub use bijectivity::{count_folded_faces, is_guaranteed_one_to_one};
pub use border::{BorderMapper, BorderSpacing, CircularBorder, SquareBorder};
pub use fixed_border::{FixedBorderOptions, FixedBorderParameterizer, Parameterization};
pub use mean_value::{mean_value_coordinates, MeanValueCoordinates, MeanValueParameterizer};
pub use sparse::{BiCgStab, CsrMatrix, DenseLu, SparseSolver, TripletMatrix};
pub use uv::UVMap;
pub use weights::{AuthalicWeights, CotangentWeights, UniformWeights, WeightStrategy};
