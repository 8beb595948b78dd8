//! Mesh construction utilities.
//!
//! Half-edge meshes are built from face-vertex lists as found in mesh files.
//! Half-edges are created in face order and boundary half-edges in the order
//! their interior twins were created, so the same input always produces the
//! same indices.

use std::collections::HashMap;

use nalgebra::Point3;

use super::halfedge::{Face, HalfEdge, HalfEdgeMesh};
use super::index::{FaceId, HalfEdgeId, MeshIndex, VertexId};
use crate::error::{MeshError, Result};

/// Build a half-edge mesh from vertices and triangle faces.
///
/// # Example
/// ```
/// use discmap::mesh::{build_from_triangles, HalfEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![[0, 1, 2]];
///
/// let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
pub fn build_from_triangles<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[[usize; 3]],
) -> Result<HalfEdgeMesh<I>> {
    build(vertices, faces)
}

/// Build a half-edge mesh from vertices and polygonal faces of any size.
///
/// Faces are kept as given; nothing is triangulated.
pub fn build_from_polygons<I: MeshIndex>(
    vertices: &[Point3<f64>],
    faces: &[Vec<usize>],
) -> Result<HalfEdgeMesh<I>> {
    build(vertices, faces)
}

fn build<I: MeshIndex, F: AsRef<[usize]>>(
    vertices: &[Point3<f64>],
    faces: &[F],
) -> Result<HalfEdgeMesh<I>> {
    if faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let mut num_corners = 0;
    for (fi, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        if face.len() < 3 {
            return Err(MeshError::DegenerateFace { face: fi });
        }
        for (k, &vi) in face.iter().enumerate() {
            if vi >= vertices.len() {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            if face[k + 1..].contains(&vi) {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }
        num_corners += face.len();
    }

    let mut mesh = HalfEdgeMesh::with_capacity(vertices.len(), faces.len(), num_corners);
    for &pos in vertices {
        mesh.add_vertex(pos);
    }

    // Directed edge (from, to) -> interior half-edge
    let mut edge_map: HashMap<(usize, usize), HalfEdgeId<I>> = HashMap::with_capacity(num_corners);

    for face in faces {
        let face = face.as_ref();
        let n = face.len();
        let first = mesh.num_halfedges();
        let face_id = FaceId::<I>::new(mesh.num_faces());
        mesh.faces.push(Face {
            halfedge: HalfEdgeId::new(first),
        });

        for k in 0..n {
            let he_id = HalfEdgeId::<I>::new(first + k);
            let origin = VertexId::<I>::new(face[k]);
            mesh.halfedges.push(HalfEdge {
                origin,
                twin: HalfEdgeId::invalid(),
                next: HalfEdgeId::new(first + (k + 1) % n),
                prev: HalfEdgeId::new(first + (k + n - 1) % n),
                face: face_id,
            });
            mesh.vertex_mut(origin).halfedge = he_id;

            let key = (face[k], face[(k + 1) % n]);
            if edge_map.insert(key, he_id).is_some() {
                return Err(MeshError::NonManifoldEdge { v0: key.0, v1: key.1 });
            }
        }
    }

    link_twins(&mut mesh, &edge_map);
    link_boundary_loops(&mut mesh)?;

    Ok(mesh)
}

/// Pair interior half-edges and create boundary twins where a partner is missing.
fn link_twins<I: MeshIndex>(
    mesh: &mut HalfEdgeMesh<I>,
    edge_map: &HashMap<(usize, usize), HalfEdgeId<I>>,
) {
    let num_interior = mesh.num_halfedges();
    for i in 0..num_interior {
        let he = HalfEdgeId::<I>::new(i);
        if mesh.twin(he).is_valid() {
            continue;
        }

        let from = mesh.origin(he).index();
        let to = mesh.origin(mesh.next(he)).index();

        match edge_map.get(&(to, from)) {
            Some(&twin) => {
                mesh.halfedge_mut(he).twin = twin;
                mesh.halfedge_mut(twin).twin = he;
            }
            None => {
                let boundary = HalfEdgeId::<I>::new(mesh.num_halfedges());
                mesh.halfedges.push(HalfEdge {
                    origin: VertexId::new(to),
                    twin: he,
                    ..HalfEdge::new()
                });
                mesh.halfedge_mut(he).twin = boundary;
            }
        }
    }
}

/// Link boundary half-edges into loops and point boundary vertices at them.
fn link_boundary_loops<I: MeshIndex>(mesh: &mut HalfEdgeMesh<I>) -> Result<()> {
    let mut outgoing = vec![HalfEdgeId::<I>::invalid(); mesh.num_vertices()];

    for he in mesh.halfedge_ids().collect::<Vec<_>>() {
        if !mesh.is_boundary_halfedge(he) {
            continue;
        }
        let origin = mesh.origin(he);
        if outgoing[origin.index()].is_valid() {
            return Err(MeshError::NonManifoldVertex {
                vertex: origin.index(),
            });
        }
        outgoing[origin.index()] = he;
        mesh.vertex_mut(origin).halfedge = he;
    }

    for (v, &he) in outgoing.iter().enumerate() {
        if !he.is_valid() {
            continue;
        }
        // Rotate through v's fan until the outgoing edge whose twin is on the
        // boundary; that twin is the boundary half-edge arriving at v.
        let mut h = mesh.next(mesh.twin(he));
        let mut steps = 0;
        while !mesh.is_boundary_halfedge(mesh.twin(h)) {
            h = mesh.next(mesh.twin(h));
            steps += 1;
            if steps > mesh.num_halfedges() {
                return Err(MeshError::NonManifoldVertex { vertex: v });
            }
        }
        let incoming = mesh.twin(h);
        mesh.halfedge_mut(incoming).next = he;
        mesh.halfedge_mut(he).prev = incoming;
    }

    Ok(())
}

/// Convert a half-edge mesh back to vertex positions and polygon index lists.
pub fn to_polygons<I: MeshIndex>(mesh: &HalfEdgeMesh<I>) -> (Vec<Point3<f64>>, Vec<Vec<usize>>) {
    let vertices = mesh.vertex_ids().map(|v| *mesh.position(v)).collect();
    let faces = mesh
        .face_ids()
        .map(|f| mesh.face_vertices(f).map(|v| v.index()).collect())
        .collect();
    (vertices, faces)
}
