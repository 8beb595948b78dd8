//! Meshes shared by the parameterization tests.

use std::f64::consts::PI;

use nalgebra::Point3;

use crate::mesh::{build_from_polygons, build_from_triangles, HalfEdgeMesh};

fn tri(vertices: &[Point3<f64>], faces: &[[usize; 3]]) -> HalfEdgeMesh {
    build_from_triangles(vertices, faces).unwrap()
}

fn on_circle(radius: f64, angle: f64) -> Point3<f64> {
    Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// Regular hexagon around vertex 0 at the origin, unit radius.
pub fn hexagon_fan() -> HalfEdgeMesh {
    let mut vertices = vec![Point3::origin()];
    vertices.extend((0..6).map(|k| on_circle(1.0, k as f64 * PI / 3.0)));
    let faces: Vec<[usize; 3]> = (1..=6).map(|k| [0, k, k % 6 + 1]).collect();
    tri(&vertices, &faces)
}

/// Hexagon fan with vertex 3 moved onto the center.
pub fn fan_with_coincident_neighbor() -> HalfEdgeMesh {
    let (mut vertices, faces) = crate::mesh::to_polygons(&hexagon_fan());
    vertices[3] = vertices[0];
    build_from_polygons(&vertices, &faces).unwrap()
}

/// A five-neighbor fan whose edge to vertex 1 sees two obtuse opposite angles.
pub fn thin_fan() -> HalfEdgeMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(1.0, 0.1, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -0.1, 0.0),
    ];
    let faces = vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5], [0, 5, 1]];
    tri(&vertices, &faces)
}

pub const WHEEL_CENTER: usize = 0;

pub fn wheel_inner(i: usize) -> usize {
    1 + i % 6
}

pub fn wheel_outer(j: usize) -> usize {
    7 + j % 12
}

/// Planar disc with an irregular inner ring of six and an outer ring of
/// twelve evenly spaced on the unit circle.
pub fn wheel() -> HalfEdgeMesh {
    let mut vertices = vec![Point3::origin()];
    vertices.extend((0..6).map(|i| on_circle(0.45 + 0.02 * i as f64, i as f64 * PI / 3.0 + 0.1)));
    vertices.extend((0..12).map(|j| on_circle(1.0, j as f64 * PI / 6.0)));

    let mut faces = Vec::new();
    for i in 0..6 {
        let (a, b) = (wheel_inner(i), wheel_inner(i + 1));
        faces.push([WHEEL_CENTER, a, b]);
        faces.push([a, wheel_outer(2 * i), wheel_outer(2 * i + 1)]);
        faces.push([a, wheel_outer(2 * i + 1), b]);
        faces.push([b, wheel_outer(2 * i + 1), wheel_outer(2 * i + 2)]);
    }
    tri(&vertices, &faces)
}

/// Regular grid of `nx` by `ny` vertices over the unit square, lifted by `height`.
pub fn grid_with(nx: usize, ny: usize, height: impl Fn(f64, f64) -> Point3<f64>) -> HalfEdgeMesh {
    let mut vertices = Vec::with_capacity(nx * ny);
    for iy in 0..ny {
        for ix in 0..nx {
            let x = ix as f64 / (nx - 1) as f64;
            let y = iy as f64 / (ny - 1) as f64;
            vertices.push(height(x, y));
        }
    }

    let mut faces = Vec::new();
    for iy in 0..ny - 1 {
        for ix in 0..nx - 1 {
            let a = iy * nx + ix;
            let (b, c, d) = (a + 1, a + nx + 1, a + nx);
            faces.push([a, b, c]);
            faces.push([a, c, d]);
        }
    }
    tri(&vertices, &faces)
}

/// Flat grid over the unit square.
pub fn grid(nx: usize, ny: usize) -> HalfEdgeMesh {
    grid_with(nx, ny, |x, y| Point3::new(x, y, 0.0))
}

/// Paraboloid `z = x² + y²` sampled over `[-1, 1]²`.
pub fn bowl(n: usize) -> HalfEdgeMesh {
    grid_with(n, n, |x, y| {
        let (x, y) = (2.0 * x - 1.0, 2.0 * y - 1.0);
        Point3::new(x, y, x * x + y * y)
    })
}

/// Two rows of three vertices, four units apart along x and one along y.
pub fn stretched_strip() -> HalfEdgeMesh {
    grid_with(3, 2, |x, y| Point3::new(8.0 * x, y, 0.0))
}

pub fn single_triangle() -> HalfEdgeMesh {
    tri(
        &[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        &[[0, 1, 2]],
    )
}

/// A triangle whose corners all sit at the same point.
pub fn collapsed_triangle() -> HalfEdgeMesh {
    tri(&[Point3::new(1.0, 1.0, 1.0); 3], &[[0, 1, 2]])
}

pub fn tetrahedron() -> HalfEdgeMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    tri(&vertices, &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]])
}

/// Unit square as a single polygon.
pub fn quad() -> HalfEdgeMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    build_from_polygons(&vertices, &[vec![0, 1, 2, 3]]).unwrap()
}

pub fn two_triangles_apart() -> HalfEdgeMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(5.0, 0.0, 0.0),
        Point3::new(6.0, 0.0, 0.0),
        Point3::new(5.0, 1.0, 0.0),
    ];
    tri(&vertices, &[[0, 1, 2], [3, 4, 5]])
}

/// Vertices and triangles of a torus over an `n` by `m` grid of quads,
/// centered at `(cx, 0, 0)` with vertex indices starting at `first`.
fn torus_parts(n: usize, m: usize, cx: f64, first: usize) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
    let (major, minor) = (2.0, 0.5);
    let mut vertices = Vec::with_capacity(n * m);
    for j in 0..m {
        let phi = 2.0 * PI * j as f64 / m as f64;
        for i in 0..n {
            let theta = 2.0 * PI * i as f64 / n as f64;
            let r = major + minor * phi.cos();
            vertices.push(Point3::new(cx + r * theta.cos(), r * theta.sin(), minor * phi.sin()));
        }
    }

    let at = |i: usize, j: usize| first + (j % m) * n + i % n;
    let mut faces = Vec::with_capacity(2 * n * m);
    for j in 0..m {
        for i in 0..n {
            let (a, b, c, d) = (at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1));
            faces.push([a, b, c]);
            faces.push([a, c, d]);
        }
    }
    (vertices, faces)
}

/// Closed torus with one triangle removed: one border loop, genus one.
pub fn torus_with_hole(n: usize, m: usize) -> HalfEdgeMesh {
    let (vertices, faces) = torus_parts(n, m, 0.0, 0);
    tri(&vertices, &faces[1..])
}

/// The hexagon fan next to a separate closed torus.
pub fn disc_plus_torus() -> HalfEdgeMesh {
    let (mut vertices, mut faces) = crate::mesh::to_polygons(&hexagon_fan());
    let (torus_vertices, torus_faces) = torus_parts(4, 4, 5.0, vertices.len());
    vertices.extend(torus_vertices);
    faces.extend(torus_faces.iter().map(|f| f.to_vec()));
    build_from_polygons(&vertices, &faces).unwrap()
}
