//! Wavefront OBJ format support.
//!
//! Only geometry is read: `v` positions and `f` faces. Face corners may use
//! any of the `v`, `v/vt`, `v//vn` and `v/vt/vn` forms, and negative indices
//! count back from the most recent vertex. Everything else is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;

use crate::algo::parameterize::UVMap;
use crate::error::{MeshError, Result};
use crate::mesh::{build_from_polygons, to_polygons, HalfEdgeMesh, MeshIndex};

/// Load a mesh from an OBJ file.
///
/// # Example
///
/// ```no_run
/// use discmap::io::obj;
/// use discmap::mesh::HalfEdgeMesh;
///
/// let mesh: HalfEdgeMesh = obj::load("model.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>, I: MeshIndex>(path: P) -> Result<HalfEdgeMesh<I>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let (vertices, faces) = parse(reader).map_err(|message| MeshError::LoadError {
        path: path.to_path_buf(),
        message,
    })?;

    if faces.is_empty() {
        return Err(MeshError::LoadError {
            path: path.to_path_buf(),
            message: "OBJ file contains no faces".to_string(),
        });
    }

    build_from_polygons(&vertices, &faces)
}

type Polygons = (Vec<Point3<f64>>, Vec<Vec<usize>>);

fn parse<R: BufRead>(reader: R) -> std::result::Result<Polygons, String> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| e.to_string())?;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let mut coord = || -> std::result::Result<f64, String> {
                    tokens
                        .next()
                        .ok_or_else(|| format!("line {}: vertex needs three coordinates", line_no + 1))?
                        .parse::<f64>()
                        .map_err(|e| format!("line {}: {}", line_no + 1, e))
                };
                let (x, y, z) = (coord()?, coord()?, coord()?);
                vertices.push(Point3::new(x, y, z));
            }
            Some("f") => {
                let face = tokens
                    .map(|corner| resolve_index(corner, vertices.len()))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| format!("line {}: {}", line_no + 1, e))?;
                faces.push(face);
            }
            _ => {}
        }
    }

    Ok((vertices, faces))
}

/// Turn the vertex part of a face corner into a zero-based index.
fn resolve_index(corner: &str, num_vertices: usize) -> std::result::Result<usize, String> {
    let raw = corner.split('/').next().unwrap_or_default();
    let index: i64 = raw
        .parse()
        .map_err(|_| format!("invalid face index '{corner}'"))?;

    let resolved = match index {
        i if i > 0 => i - 1,
        i if i < 0 => num_vertices as i64 + i,
        _ => return Err("face index 0 is not allowed".to_string()),
    };
    usize::try_from(resolved).map_err(|_| format!("face index {index} is out of range"))
}

/// Save a mesh with per-vertex texture coordinates.
///
/// Each vertex gets one `vt` line with the same index as its `v` line, and
/// faces reference both as `v/vt`.
pub fn save_with_uvs<P: AsRef<Path>, I: MeshIndex>(
    mesh: &HalfEdgeMesh<I>,
    uv: &UVMap<I>,
    path: P,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let (vertices, faces) = to_polygons(mesh);

    writeln!(writer, "# Generated by discmap")?;
    for v in &vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for (_, t) in uv.iter() {
        writeln!(writer, "vt {} {}", t.x, t.y)?;
    }
    for face in &faces {
        write!(writer, "f")?;
        for &i in face {
            write!(writer, " {0}/{0}", i + 1)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use nalgebra::Point2;

    use super::*;
    use crate::io::test_util::temp_path;

    #[test]
    fn test_parse_corner_forms() {
        let text = "\
# comment
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0.5 0.5
vn 0 0 1
f 1/1/1 2//1 3/1
f -4 -2 -1
";
        let (vertices, faces) = parse(Cursor::new(text)).unwrap();
        assert_eq!(vertices.len(), 4);
        assert_eq!(faces, vec![vec![0, 1, 2], vec![0, 2, 3]]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(Cursor::new("v 1 2\n")).is_err());
        assert!(parse(Cursor::new("v 1 2 x\n")).is_err());
        assert!(parse(Cursor::new("v 0 0 0\nf 0 1 1\n")).is_err());
        assert!(parse(Cursor::new("v 0 0 0\nf -2 1 1\n")).is_err());
    }

    #[test]
    fn test_polygons_are_kept() {
        let path = temp_path("quad.obj");
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
        let mesh: HalfEdgeMesh = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.num_faces(), 1);
        assert!(!mesh.is_triangle_mesh());
    }

    #[test]
    fn test_save_with_uvs() {
        let path = temp_path("uv.obj");
        std::fs::write(&path, "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n").unwrap();
        let mesh: HalfEdgeMesh = load(&path).unwrap();

        let uv = UVMap::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.5),
        ]);
        save_with_uvs(&mesh, &uv, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let reloaded: HalfEdgeMesh = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(text.contains("vt 0 0.5"));
        assert!(text.contains("f 1/1 2/2 3/3"));
        assert_eq!(reloaded.num_vertices(), 3);
        assert_eq!(reloaded.position(crate::mesh::VertexId::new(1)), &Point3::new(2.0, 0.0, 0.0));
    }
}
