//! One-to-one checks for fixed-border maps.
//!
//! Tutte's theorem, extended by Floater to arbitrary positive weights: if the
//! border of a disc is mapped onto a convex polygon and every interior vertex
//! is a convex combination of its neighbors (all weights positive), the map
//! is one-to-one. [`is_guaranteed_one_to_one`] is that guarantee;
//! [`count_folded_faces`] inspects an actual result.

use crate::mesh::{FaceId, MeshAdaptor};

use super::uv::UVMap;

/// Whether a fixed-border map is guaranteed to be one-to-one.
///
/// ```
/// use discmap::algo::parameterize::is_guaranteed_one_to_one;
///
/// assert!(is_guaranteed_one_to_one(true, true));
/// assert!(!is_guaranteed_one_to_one(false, true));
/// assert!(!is_guaranteed_one_to_one(true, false));
/// ```
#[inline]
pub fn is_guaranteed_one_to_one(border_convex: bool, all_weights_positive: bool) -> bool {
    border_convex && all_weights_positive
}

/// Count faces that are flipped or collapsed in UV space.
///
/// A face counts as folded when its signed UV area is zero or has the
/// opposite sign of the total signed area. The border orientation is
/// arbitrary, so a uniformly mirrored map has no folded faces. Polygons are
/// judged by their first three corners.
pub fn count_folded_faces<M: MeshAdaptor>(mesh: &M, uv: &UVMap<M::Index>) -> usize {
    let areas: Vec<f64> = (0..mesh.num_faces())
        .map(|f| {
            let [a, b, c] = mesh.face_triangle(FaceId::new(f));
            uv.signed_area2(a, b, c)
        })
        .collect();

    let orientation = areas.iter().sum::<f64>().signum();
    areas.iter().filter(|&&area| area * orientation <= 0.0).count()
}
