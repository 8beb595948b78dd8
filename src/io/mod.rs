//! Mesh file I/O.
//!
//! Meshes are loaded as they are stored: polygon faces stay polygons, so a
//! quad mesh is rejected by parameterization instead of being silently
//! triangulated. Results are written together with their UV coordinates.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save with UVs | Notes |
//! |--------|-----------|------|---------------|-------|
//! | Wavefront OBJ | `.obj` | ✓ | ✓ | UVs as `vt` lines |
//! | PLY | `.ply` | ✓ | ✓ | UVs as `u`/`v` vertex properties |
//! | STL | `.stl` | ✓ | ✗ | Binary and ASCII, no texture coordinates |
//!
//! # Usage
//!
//! ```no_run
//! use discmap::algo::parameterize::mean_value_coordinates;
//! use discmap::io::{load, save_with_uvs};
//! use discmap::mesh::HalfEdgeMesh;
//!
//! let mesh: HalfEdgeMesh = load("disc.ply").unwrap();
//! let result = mean_value_coordinates(&mesh).unwrap();
//! save_with_uvs(&mesh, &result.uv, "disc_uv.obj").unwrap();
//! ```

pub mod obj;
pub mod ply;
pub mod stl;

use std::path::Path;

use crate::algo::parameterize::UVMap;
use crate::error::{MeshError, Result};
use crate::mesh::{HalfEdgeMesh, MeshIndex};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// STL (stereolithography) format.
    Stl,
    /// PLY (Stanford polygon) format.
    Ply,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "stl" => Some(Format::Stl),
            "ply" => Some(Format::Ply),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// Whether the format can store per-vertex texture coordinates.
    pub fn supports_uvs(self) -> bool {
        !matches!(self, Format::Stl)
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
///
/// # Example
///
/// ```no_run
/// use discmap::io::load;
/// use discmap::mesh::HalfEdgeMesh;
///
/// let mesh: HalfEdgeMesh = load("model.obj").unwrap();
/// ```
pub fn load<P: AsRef<Path>, I: MeshIndex>(path: P) -> Result<HalfEdgeMesh<I>> {
    let path = path.as_ref();
    let mesh = match detect(path)? {
        Format::Obj => obj::load(path),
        Format::Stl => stl::load(path),
        Format::Ply => ply::load(path),
    }?;
    log::debug!(
        "loaded {}: {} vertices, {} faces",
        path.display(),
        mesh.num_vertices(),
        mesh.num_faces()
    );
    Ok(mesh)
}

/// Save a mesh and its UV coordinates with automatic format detection.
///
/// # Errors
///
/// Returns [`MeshError::SaveError`] for formats that cannot store texture
/// coordinates and [`MeshError::InvalidParameter`] if `uv` does not have one
/// entry per vertex.
pub fn save_with_uvs<P: AsRef<Path>, I: MeshIndex>(
    mesh: &HalfEdgeMesh<I>,
    uv: &UVMap<I>,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    if uv.len() != mesh.num_vertices() {
        return Err(MeshError::invalid_param(
            "uv",
            uv.len(),
            "must have one coordinate per vertex",
        ));
    }

    match detect(path)? {
        Format::Obj => obj::save_with_uvs(mesh, uv, path),
        Format::Ply => ply::save_with_uvs(mesh, uv, path),
        Format::Stl => Err(MeshError::SaveError {
            path: path.to_path_buf(),
            message: "STL cannot store texture coordinates".to_string(),
        }),
    }
}
