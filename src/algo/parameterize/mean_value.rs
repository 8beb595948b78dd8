//! Mean-value coordinates.
//!
//! Floater's mean-value coordinates weight the edge from an interior vertex
//! `i` to its neighbor `j` by
//!
//! ```text
//! w_ij = (tan(γ/2) + tan(δ/2)) / |Pi - Pj|
//! ```
//!
//! where γ and δ are the corner angles at `i` between `j` and the neighbors
//! before and after it. Corner angles of a valid triangle lie in `(0, π)`, so
//! every weight is strictly positive regardless of the triangle shapes. With
//! a convex border the resulting map is therefore guaranteed to be
//! one-to-one.
//!
//! # References
//!
//! - Floater, M. S. (2003). "Mean value coordinates." Computer Aided
//!   Geometric Design 20(1).

use crate::error::ParamResult;
use crate::mesh::{MeshAdaptor, NeighborCycle};

use super::border::CircularBorder;
use super::fixed_border::{FixedBorderParameterizer, Parameterization};
use super::sparse::BiCgStab;
use super::weights::{angle_between, EdgeStar, WeightStrategy};

/// Floater's mean-value coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanValueCoordinates;

impl WeightStrategy for MeanValueCoordinates {
    fn weight<M: MeshAdaptor>(
        &self,
        mesh: &M,
        cycle: &NeighborCycle<M::Index>,
        j: usize,
    ) -> ParamResult<f64> {
        let EdgeStar { pi, pj, pk, pl } = EdgeStar::new(mesh, cycle, j)?;
        let to_j = pj - pi;
        let gamma = angle_between(&to_j, &(pk - pi));
        let delta = angle_between(&(pl - pi), &to_j);
        Ok(((gamma / 2.0).tan() + (delta / 2.0).tan()) / to_j.norm())
    }

    fn guarantees_positive(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "mean-value"
    }
}

/// Fixed-border parameterizer with mean-value weights.
pub type MeanValueParameterizer<B = CircularBorder, S = BiCgStab> =
    FixedBorderParameterizer<MeanValueCoordinates, B, S>;

/// Parameterize a disc onto the unit circle with mean-value coordinates.
///
/// Border vertices are spaced by arc length and the system is solved with
/// the default [`BiCgStab`] settings. Use [`FixedBorderParameterizer`] to
/// change any of these.
///
/// # Example
///
/// ```
/// use discmap::algo::parameterize::mean_value_coordinates;
/// use discmap::mesh::{build_from_triangles, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// // a square split into four triangles around its center
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.5, 0.5, 0.2),
/// ];
/// let faces = vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];
/// let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
///
/// let result = mean_value_coordinates(&mesh).unwrap();
/// assert!(result.one_to_one);
/// assert_eq!(result.uv.len(), 5);
/// ```
pub fn mean_value_coordinates<M: MeshAdaptor>(mesh: &M) -> ParamResult<Parameterization<M::Index>> {
    let parameterizer: MeanValueParameterizer = Default::default();
    parameterizer.parameterize(mesh)
}
