//! UV coordinate storage.
//!
//! [`UVMap`] holds one planar coordinate per mesh vertex, indexed by
//! [`VertexId`].

use std::marker::PhantomData;

use nalgebra::Point2;

use crate::mesh::{MeshIndex, VertexId};

/// UV coordinates for mesh vertices.
///
/// Coordinates are indexed by vertex ID. A fixed-border parameterization onto
/// the default circle produces values in `[-1, 1]²`; call [`normalize`] to
/// move them into the unit square.
///
/// # Example
///
/// ```
/// use discmap::algo::parameterize::UVMap;
/// use discmap::mesh::VertexId;
/// use nalgebra::Point2;
///
/// let mut uv: UVMap = UVMap::zeros(2);
/// uv.set(VertexId::new(1), Point2::new(0.25, 0.75));
/// assert_eq!(uv.get(VertexId::new(1)), Point2::new(0.25, 0.75));
/// ```
///
/// [`normalize`]: UVMap::normalize
#[derive(Debug, Clone, PartialEq)]
pub struct UVMap<I: MeshIndex = u32> {
    coords: Vec<Point2<f64>>,
    _marker: PhantomData<I>,
}

impl<I: MeshIndex> UVMap<I> {
    /// Create a UV map from coordinates indexed by vertex.
    pub fn new(coords: Vec<Point2<f64>>) -> Self {
        Self {
            coords,
            _marker: PhantomData,
        }
    }

    /// Create a UV map filled with zeros.
    pub fn zeros(n: usize) -> Self {
        Self::new(vec![Point2::origin(); n])
    }

    /// Get the UV coordinates for a vertex.
    #[inline]
    pub fn get(&self, v: VertexId<I>) -> Point2<f64> {
        self.coords[v.index()]
    }

    /// Set the UV coordinates for a vertex.
    #[inline]
    pub fn set(&mut self, v: VertexId<I>, uv: Point2<f64>) {
        self.coords[v.index()] = uv;
    }

    /// Number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterate over all UV coordinates with their vertex IDs.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId<I>, Point2<f64>)> + '_ {
        self.coords
            .iter()
            .enumerate()
            .map(|(i, &uv)| (VertexId::new(i), uv))
    }

    /// The raw coordinates.
    pub fn as_slice(&self) -> &[Point2<f64>] {
        &self.coords
    }

    /// Compute the bounding box of the UV coordinates.
    ///
    /// Returns `None` if the UV map is empty.
    pub fn bounding_box(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let first = *self.coords.first()?;
        Some(self.coords.iter().fold((first, first), |(min, max), uv| {
            (
                Point2::new(min.x.min(uv.x), min.y.min(uv.y)),
                Point2::new(max.x.max(uv.x), max.y.max(uv.y)),
            )
        }))
    }

    /// Map the coordinates into `[0, 1]²`, keeping the aspect ratio.
    pub fn normalize(&mut self) {
        if let Some((min, max)) = self.bounding_box() {
            let scale = (max.x - min.x).max(max.y - min.y);
            if scale > 1e-10 {
                for uv in &mut self.coords {
                    uv.x = (uv.x - min.x) / scale;
                    uv.y = (uv.y - min.y) / scale;
                }
            }
        }
    }

    /// Twice the signed area of the UV triangle `(a, b, c)`.
    ///
    /// Positive when the corners run counter-clockwise.
    #[inline]
    pub fn signed_area2(&self, a: VertexId<I>, b: VertexId<I>, c: VertexId<I>) -> f64 {
        let (p0, p1, p2) = (self.get(a), self.get(b), self.get(c));
        (p1 - p0).perp(&(p2 - p0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_map_basic() {
        let uv_map: UVMap = UVMap::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ]);

        assert_eq!(uv_map.len(), 3);
        assert!(!uv_map.is_empty());
        assert_eq!(uv_map.get(VertexId::new(2)), Point2::new(0.5, 1.0));
        assert_eq!(uv_map.iter().count(), 3);
    }

    #[test]
    fn test_uv_map_bounding_box() {
        let uv_map: UVMap = UVMap::new(vec![
            Point2::new(-1.0, 0.5),
            Point2::new(2.0, -0.5),
            Point2::new(0.5, 3.0),
        ]);

        let (min, max) = uv_map.bounding_box().unwrap();
        assert_eq!(min, Point2::new(-1.0, -0.5));
        assert_eq!(max, Point2::new(2.0, 3.0));
        assert!(UVMap::<u32>::zeros(0).bounding_box().is_none());
    }

    #[test]
    fn test_uv_map_normalize() {
        let mut uv_map: UVMap = UVMap::new(vec![
            Point2::new(-1.0, -1.0),
            Point2::new(3.0, -1.0),
            Point2::new(1.0, 1.0),
        ]);
        uv_map.normalize();

        let (min, max) = uv_map.bounding_box().unwrap();
        assert!(min.x.abs() < 1e-12 && min.y.abs() < 1e-12);
        assert!((max.x - 1.0).abs() < 1e-12);
        assert!((max.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_signed_area() {
        let uv_map: UVMap = UVMap::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
        assert!((uv_map.signed_area2(a, b, c) - 1.0).abs() < 1e-12);
        assert!((uv_map.signed_area2(a, c, b) + 1.0).abs() < 1e-12);
    }
}
