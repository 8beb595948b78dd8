//! Per-edge weights for fixed-border parameterization.
//!
//! A [`WeightStrategy`] assigns a weight to the ordered pair (interior vertex
//! `i`, neighbor `j`). Weights are not assumed to be symmetric: the weight of
//! `(i, j)` generally differs from the weight of `(j, i)`.
//!
//! Every formula here looks at the *star* of the edge: the neighbor `k`
//! before `j` and the neighbor `l` after `j` in the cycle around `i`, which
//! close the two triangles sharing the edge `(i, j)`.
//!
//! # Available Strategies
//!
//! - [`MeanValueCoordinates`](super::MeanValueCoordinates): Floater's
//!   mean-value coordinates, always positive
//! - [`UniformWeights`]: Tutte's barycentric mapping
//! - [`CotangentWeights`]: discrete harmonic (conformal) weights
//! - [`AuthalicWeights`]: discrete authalic (area-preserving) weights

use nalgebra::{Point3, Vector3};

use crate::error::{ParamError, ParamResult};
use crate::mesh::{MeshAdaptor, NeighborCycle};

/// Computes the weight of one edge around an interior vertex.
pub trait WeightStrategy: Sync {
    /// Weight of the edge from `cycle.center()` to the neighbor at position
    /// `j` of `cycle`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::DegenerateEdge`] if the center coincides with
    /// any vertex of the edge's star.
    fn weight<M: MeshAdaptor>(
        &self,
        mesh: &M,
        cycle: &NeighborCycle<M::Index>,
        j: usize,
    ) -> ParamResult<f64>;

    /// Whether the strategy promises strictly positive weights on valid
    /// geometry. A non-positive weight from such a strategy is a defect.
    fn guarantees_positive(&self) -> bool;

    /// Short human-readable name.
    fn name(&self) -> &'static str;
}

/// The center of a cycle together with one neighbor and the two neighbors
/// around it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeStar {
    pub pi: Point3<f64>,
    pub pj: Point3<f64>,
    pub pk: Point3<f64>,
    pub pl: Point3<f64>,
}

impl EdgeStar {
    /// Gather the star of neighbor `j`, rejecting zero-length edges from the
    /// center.
    pub fn new<M: MeshAdaptor>(
        mesh: &M,
        cycle: &NeighborCycle<M::Index>,
        j: usize,
    ) -> ParamResult<Self> {
        let center = cycle.center();
        let pi = mesh.vertex_position(center);

        let mut corners = [Point3::origin(); 3];
        for (slot, v) in corners
            .iter_mut()
            .zip([cycle.get(j), cycle.prev(j), cycle.next(j)])
        {
            let p = mesh.vertex_position(v);
            if p == pi {
                return Err(ParamError::DegenerateEdge {
                    vertex: center.index(),
                    neighbor: v.index(),
                });
            }
            *slot = p;
        }

        let [pj, pk, pl] = corners;
        Ok(Self { pi, pj, pk, pl })
    }
}

/// Angle between two vectors, in `[0, π]`.
#[inline]
pub(crate) fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Cotangent of the angle between two vectors.
///
/// Infinite when the vectors are parallel.
#[inline]
pub(crate) fn cot_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b) / a.cross(b).norm()
}

/// Tutte's barycentric mapping: every edge has weight one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformWeights;

impl WeightStrategy for UniformWeights {
    fn weight<M: MeshAdaptor>(
        &self,
        mesh: &M,
        cycle: &NeighborCycle<M::Index>,
        j: usize,
    ) -> ParamResult<f64> {
        EdgeStar::new(mesh, cycle, j)?;
        Ok(1.0)
    }

    fn guarantees_positive(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "uniform"
    }
}

/// Discrete harmonic weights `cot α + cot β`.
///
/// α and β are the angles at `k` and `l` opposite the edge `(i, j)`. These
/// weights turn negative when an opposite angle is obtuse enough, so the
/// resulting map is not guaranteed to be one-to-one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CotangentWeights;

impl WeightStrategy for CotangentWeights {
    fn weight<M: MeshAdaptor>(
        &self,
        mesh: &M,
        cycle: &NeighborCycle<M::Index>,
        j: usize,
    ) -> ParamResult<f64> {
        let EdgeStar { pi, pj, pk, pl } = EdgeStar::new(mesh, cycle, j)?;
        let alpha = cot_between(&(pi - pk), &(pj - pk));
        let beta = cot_between(&(pi - pl), &(pj - pl));
        Ok(alpha + beta)
    }

    fn guarantees_positive(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "cotangent"
    }
}

/// Discrete authalic weights `(cot ψ + cot θ) / |Pi - Pj|²`.
///
/// ψ and θ are the angles at `j` in the triangles `(i, j, k)` and `(i, j, l)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthalicWeights;

impl WeightStrategy for AuthalicWeights {
    fn weight<M: MeshAdaptor>(
        &self,
        mesh: &M,
        cycle: &NeighborCycle<M::Index>,
        j: usize,
    ) -> ParamResult<f64> {
        let EdgeStar { pi, pj, pk, pl } = EdgeStar::new(mesh, cycle, j)?;
        let psi = cot_between(&(pi - pj), &(pk - pj));
        let theta = cot_between(&(pi - pj), &(pl - pj));
        Ok((psi + theta) / (pj - pi).norm_squared())
    }

    fn guarantees_positive(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "authalic"
    }
}
