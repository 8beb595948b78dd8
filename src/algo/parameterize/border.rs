//! Border policies for fixed-border parameterization.
//!
//! A [`BorderMapper`] places every vertex of the boundary loop on a planar
//! curve before the interior is solved. The loop is taken in the order the
//! mesh reports it, and its first vertex anchors the placement.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};

use crate::error::{ParamError, ParamResult};
use crate::mesh::{MeshAdaptor, VertexId};

use super::uv::UVMap;

/// Places boundary vertices on a planar curve.
pub trait BorderMapper: Sync {
    /// Write a UV coordinate for every vertex of `border` into `uv`.
    ///
    /// `border` is the single boundary loop of `mesh` in cyclic order. Only
    /// the entries of border vertices are touched.
    fn map_border<M: MeshAdaptor>(
        &self,
        mesh: &M,
        border: &[VertexId<M::Index>],
        uv: &mut UVMap<M::Index>,
    ) -> ParamResult<()>;

    /// Whether every border this policy produces is a convex polygon.
    fn is_border_convex(&self) -> bool;
}

/// How border vertices are spread along the target curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderSpacing {
    /// Proportional to the 3D length of the boundary edges.
    #[default]
    ArcLength,
    /// Equal steps regardless of edge lengths.
    Uniform,
}

/// Normalized position of each border vertex along the loop, in `[0, 1)`.
fn loop_parameters<M: MeshAdaptor>(
    mesh: &M,
    border: &[VertexId<M::Index>],
    spacing: BorderSpacing,
) -> ParamResult<Vec<f64>> {
    let n = border.len();
    if spacing == BorderSpacing::Uniform {
        return Ok((0..n).map(|k| k as f64 / n as f64).collect());
    }

    let mut params = Vec::with_capacity(n);
    let mut total = 0.0;
    for k in 0..n {
        params.push(total);
        let a = mesh.vertex_position(border[k]);
        let b = mesh.vertex_position(border[(k + 1) % n]);
        total += (b - a).norm();
    }

    if !(total > 0.0 && total.is_finite()) {
        return Err(ParamError::DegenerateBorder);
    }
    for s in &mut params {
        *s /= total;
    }
    Ok(params)
}

fn check_length(border_len: usize, minimum: usize) -> ParamResult<()> {
    if border_len < minimum {
        return Err(ParamError::BorderTooShort {
            vertices: border_len,
            minimum,
        });
    }
    Ok(())
}

/// Maps the border onto a circle.
///
/// Border vertex `k` lands at angle `2π·s_k`, where `s_k` is its normalized
/// position along the loop. The first loop vertex sits at angle zero.
///
/// # Example
///
/// ```
/// use discmap::algo::parameterize::{BorderSpacing, CircularBorder};
///
/// let border = CircularBorder::new(BorderSpacing::Uniform).with_radius(0.5);
/// assert_eq!(border.radius, 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CircularBorder {
    /// Spacing of the border vertices along the circle.
    pub spacing: BorderSpacing,

    /// Center of the circle.
    pub center: Point2<f64>,

    /// Radius of the circle.
    pub radius: f64,
}

impl Default for CircularBorder {
    fn default() -> Self {
        Self {
            spacing: BorderSpacing::ArcLength,
            center: Point2::origin(),
            radius: 1.0,
        }
    }
}

impl CircularBorder {
    /// Unit circle at the origin with the given spacing.
    pub fn new(spacing: BorderSpacing) -> Self {
        Self {
            spacing,
            ..Default::default()
        }
    }

    /// Set the center of the circle.
    pub fn with_center(mut self, center: Point2<f64>) -> Self {
        self.center = center;
        self
    }

    /// Set the radius of the circle.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl BorderMapper for CircularBorder {
    fn map_border<M: MeshAdaptor>(
        &self,
        mesh: &M,
        border: &[VertexId<M::Index>],
        uv: &mut UVMap<M::Index>,
    ) -> ParamResult<()> {
        check_length(border.len(), 3)?;
        let params = loop_parameters(mesh, border, self.spacing)?;

        for (&v, s) in border.iter().zip(params) {
            let (sin, cos) = (TAU * s).sin_cos();
            uv.set(v, self.center + self.radius * Vector2::new(cos, sin));
        }
        Ok(())
    }

    fn is_border_convex(&self) -> bool {
        true
    }
}

/// Maps the border onto the unit square `[0, 1]²`.
///
/// The four corners are pinned to the border vertices whose arc-length
/// position is closest to 0, ¼, ½ and ¾. Vertices between two corners are
/// spread along that side by arc length. Needs at least four border vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareBorder;

const SQUARE_CORNERS: [Point2<f64>; 4] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(1.0, 1.0),
    Point2::new(0.0, 1.0),
];

impl SquareBorder {
    /// Loop positions of the four corner vertices, strictly increasing and
    /// starting at 0.
    fn corner_positions(params: &[f64]) -> [usize; 4] {
        let n = params.len();
        let mut corners = [0usize; 4];
        for c in 1..4 {
            let target = c as f64 / 4.0;
            // leave room for the remaining corners
            let lo = corners[c - 1] + 1;
            let hi = n - (4 - c);
            corners[c] = (lo..=hi)
                .min_by(|&a, &b| {
                    let da = (params[a] - target).abs();
                    let db = (params[b] - target).abs();
                    da.total_cmp(&db)
                })
                .unwrap_or(lo);
        }
        corners
    }
}

impl BorderMapper for SquareBorder {
    fn map_border<M: MeshAdaptor>(
        &self,
        mesh: &M,
        border: &[VertexId<M::Index>],
        uv: &mut UVMap<M::Index>,
    ) -> ParamResult<()> {
        check_length(border.len(), 4)?;
        let params = loop_parameters(mesh, border, BorderSpacing::ArcLength)?;
        let corners = Self::corner_positions(&params);
        let n = border.len();

        for side in 0..4 {
            let start = corners[side];
            let end = if side == 3 { n } else { corners[side + 1] };
            let s_start = params[start];
            let s_end = if side == 3 { 1.0 } else { params[end] };
            let a = SQUARE_CORNERS[side];
            let b = SQUARE_CORNERS[(side + 1) % 4];

            for k in start..end {
                let t = if s_end > s_start {
                    (params[k] - s_start) / (s_end - s_start)
                } else {
                    (k - start) as f64 / (end - start) as f64
                };
                uv.set(border[k], a + (b - a) * t);
            }
        }
        Ok(())
    }

    fn is_border_convex(&self) -> bool {
        true
    }
}
