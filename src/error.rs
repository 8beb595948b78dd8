//! Error types for discmap.
//!
//! [`MeshError`] covers mesh construction and file I/O. [`ParamError`] is the
//! closed set of outcomes a parameterization attempt can fail with, and
//! [`SolverError`] describes why a sparse solve did not produce a solution.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Result type alias using [`ParamError`].
pub type ParamResult<T> = std::result::Result<T, ParamError>;

/// Errors that can occur while building or loading meshes.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has fewer than three corners or repeats a vertex.
    #[error("face {face} is degenerate (fewer than 3 corners or duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// A directed edge is used by more than one face.
    #[error("edge ({v0}, {v1}) is shared by more than two faces or has inconsistent orientation")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: usize,
        /// Second vertex of the edge.
        v1: usize,
    },

    /// A vertex touches the boundary more than once.
    #[error("vertex {vertex} is non-manifold (several boundary fans meet there)")]
    NonManifoldVertex {
        /// The vertex index.
        vertex: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: fmt::Display>(name: &'static str, value: T, reason: &'static str) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// One of the two planar axes solved by a fixed-border parameterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The first texture coordinate.
    U,
    /// The second texture coordinate.
    V,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::U => f.write_str("u"),
            Axis::V => f.write_str("v"),
        }
    }
}

/// Reasons a sparse linear solve can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Matrix and right-hand side do not have compatible shapes.
    #[error("dimension mismatch: {rows}x{cols} matrix with right-hand side of length {rhs}")]
    DimensionMismatch {
        /// Matrix rows.
        rows: usize,
        /// Matrix columns.
        cols: usize,
        /// Right-hand side length.
        rhs: usize,
    },

    /// A diagonal entry needed by the preconditioner is zero.
    #[error("zero diagonal entry in row {row}")]
    ZeroDiagonal {
        /// The offending row.
        row: usize,
    },

    /// The matrix is singular.
    #[error("matrix is singular")]
    Singular,

    /// The iteration broke down (a scalar denominator vanished).
    #[error("iteration broke down after {iterations} iterations")]
    Breakdown {
        /// Iterations completed before the breakdown.
        iterations: usize,
    },

    /// The iteration did not reach the requested tolerance.
    #[error("did not converge after {iterations} iterations (relative residual {residual:e})")]
    DidNotConverge {
        /// Iterations performed.
        iterations: usize,
        /// Final relative residual.
        residual: f64,
    },

    /// The solution contains NaN or infinite values.
    #[error("solution contains non-finite values")]
    NonFinite,
}

/// Errors reported by a fixed-border parameterization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    /// The mesh has no vertices or no faces.
    #[error("mesh is empty")]
    EmptyMesh,

    /// A face is not a triangle.
    #[error("face {face} has {sides} sides; only triangle meshes can be parameterized")]
    NonTriangular {
        /// The face index.
        face: usize,
        /// Number of sides of the face.
        sides: usize,
    },

    /// The surface is not a topological disc.
    #[error(
        "mesh is not a topological disc ({boundary_loops} boundary loops, Euler characteristic {euler_characteristic})"
    )]
    NotADisc {
        /// Number of boundary loops found.
        boundary_loops: usize,
        /// V - E + F of the mesh.
        euler_characteristic: i64,
    },

    /// The boundary loop has too few vertices for the border policy.
    #[error("border has {vertices} vertices, at least {minimum} are required")]
    BorderTooShort {
        /// Number of border vertices.
        vertices: usize,
        /// Minimum required.
        minimum: usize,
    },

    /// The boundary loop has zero total length.
    #[error("border has zero length")]
    DegenerateBorder,

    /// The linear solver failed for one axis.
    #[error("linear solve for axis {axis} failed: {source}")]
    Solver {
        /// The axis being solved.
        axis: Axis,
        /// Underlying solver failure.
        #[source]
        source: SolverError,
    },

    /// Two adjacent vertices share the same position.
    #[error("vertices {vertex} and {neighbor} coincide (zero-length edge)")]
    DegenerateEdge {
        /// The interior vertex whose row was being assembled.
        vertex: usize,
        /// The coincident neighbor.
        neighbor: usize,
    },

    /// A weight violated its strategy's contract.
    #[error("invalid weight {weight} for vertex {vertex} and neighbor {neighbor}")]
    InvalidWeight {
        /// The interior vertex.
        vertex: usize,
        /// The neighbor.
        neighbor: usize,
        /// The computed weight.
        weight: f64,
    },
}
