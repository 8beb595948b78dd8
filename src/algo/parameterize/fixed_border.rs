//! Fixed-border parameterization.
//!
//! The border of a disc is pinned to a convex curve and every interior vertex
//! is placed at the weighted average of its neighbors. Writing that for all
//! vertices gives one sparse linear system per planar axis:
//!
//! ```text
//! border vertex i:    x_i = border_i
//! interior vertex i:  Σ_j w_ij · (x_i - x_j) = 0
//! ```
//!
//! The matrix is shared by the `u` and `v` solves. Weights come from a
//! [`WeightStrategy`], the border from a [`BorderMapper`] and the solve from a
//! [`SparseSolver`], all chosen statically through type parameters.
//!
//! # Example
//!
//! ```no_run
//! use discmap::prelude::*;
//! use discmap::algo::parameterize::{
//!     CotangentWeights, DenseLu, FixedBorderParameterizer, SquareBorder,
//! };
//!
//! let mesh: HalfEdgeMesh = discmap::io::load("disc.obj").unwrap();
//!
//! let harmonic = FixedBorderParameterizer::new(CotangentWeights, SquareBorder, DenseLu);
//! let result = harmonic.parameterize(&mesh).unwrap();
//! if !result.one_to_one {
//!     eprintln!("negative weights, the map may fold");
//! }
//! ```
//!
//! # References
//!
//! - Tutte, W. T. (1963). "How to draw a graph." Proc. London Math. Society.
//! - Floater, M. S. (1997). "Parametrization and smooth approximation of
//!   surface triangulations." Computer Aided Geometric Design 14(3).

use nalgebra::{DVector, Point2};
use rayon::prelude::*;

use crate::error::{Axis, ParamError, ParamResult};
use crate::mesh::{FaceId, MeshAdaptor, MeshIndex, VertexId};

use super::bijectivity::is_guaranteed_one_to_one;
use super::border::{BorderMapper, CircularBorder};
use super::sparse::{BiCgStab, CsrMatrix, SparseSolver, TripletMatrix};
use super::uv::UVMap;
use super::weights::WeightStrategy;

/// Options for fixed-border parameterization.
#[derive(Debug, Clone, Copy)]
pub struct FixedBorderOptions {
    /// Assemble rows and solve both axes in parallel.
    ///
    /// The output is identical either way.
    pub parallel: bool,
}

impl Default for FixedBorderOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl FixedBorderOptions {
    /// Enable or disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// The outcome of a successful parameterization.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameterization<I: MeshIndex = u32> {
    /// One UV coordinate per vertex.
    pub uv: UVMap<I>,

    /// The map is guaranteed to be one-to-one: the border is convex and all
    /// weights are positive. Advisory; a `false` map may still be valid.
    pub one_to_one: bool,

    /// Every assembled weight was strictly positive.
    pub all_weights_positive: bool,

    /// Number of vertices pinned to the border.
    pub border_vertices: usize,

    /// Number of vertices solved for.
    pub interior_vertices: usize,

    /// Stored entries of the system matrix.
    pub nonzeros: usize,
}

/// Fixed-border parameterizer generic over weights, border and solver.
///
/// Nothing is cached between calls; every call validates the mesh, builds its
/// own system and either returns a complete [`Parameterization`] or an error.
#[derive(Debug, Clone, Default)]
pub struct FixedBorderParameterizer<W, B = CircularBorder, S = BiCgStab> {
    /// Edge weight strategy.
    pub weights: W,

    /// Border policy.
    pub border: B,

    /// Linear solver.
    pub solver: S,

    /// Execution options.
    pub options: FixedBorderOptions,
}

/// One assembled matrix row.
struct Row {
    /// `(column, value)` pairs, diagonal last.
    entries: Vec<(usize, f64)>,
    rhs: Point2<f64>,
    all_positive: bool,
}

impl<W, B, S> FixedBorderParameterizer<W, B, S>
where
    W: WeightStrategy,
    B: BorderMapper,
    S: SparseSolver,
{
    /// Create a parameterizer with default options.
    pub fn new(weights: W, border: B, solver: S) -> Self {
        Self {
            weights,
            border,
            solver,
            options: FixedBorderOptions::default(),
        }
    }

    /// Set the execution options.
    pub fn with_options(mut self, options: FixedBorderOptions) -> Self {
        self.options = options;
        self
    }

    /// Compute UV coordinates for a disc-shaped triangle mesh.
    ///
    /// # Errors
    ///
    /// - [`ParamError::EmptyMesh`] if the mesh has no vertices or faces
    /// - [`ParamError::NonTriangular`] if a face is not a triangle
    /// - [`ParamError::NotADisc`] unless there is exactly one boundary loop,
    ///   the Euler characteristic is 1 and every vertex is connected to the
    ///   border
    /// - [`ParamError::BorderTooShort`] / [`ParamError::DegenerateBorder`]
    ///   if the border cannot be mapped
    /// - [`ParamError::DegenerateEdge`] / [`ParamError::InvalidWeight`] if a
    ///   weight cannot be computed
    /// - [`ParamError::Solver`] if either linear solve fails
    pub fn parameterize<M: MeshAdaptor>(&self, mesh: &M) -> ParamResult<Parameterization<M::Index>> {
        let border = validate(mesh)?;
        let n = mesh.num_vertices();
        log::debug!(
            "{} weights: {} vertices, {} on the border",
            self.weights.name(),
            n,
            border.len()
        );

        let mut uv = UVMap::zeros(n);
        self.border.map_border(mesh, &border, &mut uv)?;
        log::debug!("border mapped");

        let mut on_border = vec![false; n];
        for v in &border {
            on_border[v.index()] = true;
        }

        let build_row = |i: usize| {
            let v = VertexId::new(i);
            if on_border[i] {
                Ok(Row {
                    entries: vec![(i, 1.0)],
                    rhs: uv.get(v),
                    all_positive: true,
                })
            } else {
                self.interior_row(mesh, v)
            }
        };
        let rows: Vec<ParamResult<Row>> = if self.options.parallel {
            (0..n).into_par_iter().map(build_row).collect()
        } else {
            (0..n).map(build_row).collect()
        };
        // first error by vertex order, whatever the schedule was
        let rows = rows.into_iter().collect::<ParamResult<Vec<_>>>()?;

        let (matrix, rhs_u, rhs_v) = assemble(&rows, n);
        let all_weights_positive = rows.iter().all(|r| r.all_positive);
        log::debug!("system built: {}x{} with {} nonzeros", n, n, matrix.nnz());
        if !all_weights_positive {
            log::warn!(
                "{} weights produced non-positive values; the map may not be one-to-one",
                self.weights.name()
            );
        }

        let solve = |axis: Axis, rhs: &DVector<f64>| {
            let x = self
                .solver
                .solve(&matrix, rhs)
                .map_err(|source| ParamError::Solver { axis, source })?;
            log::debug!("solved {axis}");
            Ok::<_, ParamError>(x)
        };
        let (u, v) = if self.options.parallel {
            let (u, v) = rayon::join(|| solve(Axis::U, &rhs_u), || solve(Axis::V, &rhs_v));
            (u?, v?)
        } else {
            (solve(Axis::U, &rhs_u)?, solve(Axis::V, &rhs_v)?)
        };

        for i in (0..n).filter(|&i| !on_border[i]) {
            uv.set(VertexId::new(i), Point2::new(u[i], v[i]));
        }

        let one_to_one = is_guaranteed_one_to_one(self.border.is_border_convex(), all_weights_positive);
        log::debug!("done, one-to-one guaranteed: {one_to_one}");

        Ok(Parameterization {
            uv,
            one_to_one,
            all_weights_positive,
            border_vertices: border.len(),
            interior_vertices: n - border.len(),
            nonzeros: matrix.nnz(),
        })
    }

    fn interior_row<M: MeshAdaptor>(&self, mesh: &M, v: VertexId<M::Index>) -> ParamResult<Row> {
        let cycle = mesh.neighbor_cycle(v);
        let mut entries = Vec::with_capacity(cycle.len() + 1);
        let mut diagonal = 0.0;
        let mut all_positive = true;

        for j in 0..cycle.len() {
            let neighbor = cycle.get(j);
            let weight = self.weights.weight(mesh, &cycle, j)?;

            let invalid = !weight.is_finite() || (weight <= 0.0 && self.weights.guarantees_positive());
            if invalid {
                return Err(ParamError::InvalidWeight {
                    vertex: v.index(),
                    neighbor: neighbor.index(),
                    weight,
                });
            }
            if weight <= 0.0 {
                log::debug!("weight {weight} on edge {v:?} -> {neighbor:?}");
                all_positive = false;
            }

            entries.push((neighbor.index(), -weight));
            diagonal += weight;
        }
        entries.push((v.index(), diagonal));

        Ok(Row {
            entries,
            rhs: Point2::origin(),
            all_positive,
        })
    }
}

/// Check that the mesh is a triangulated disc and return its border loop.
fn validate<M: MeshAdaptor>(mesh: &M) -> ParamResult<Vec<VertexId<M::Index>>> {
    if mesh.num_vertices() == 0 || mesh.num_faces() == 0 {
        return Err(ParamError::EmptyMesh);
    }

    for face in 0..mesh.num_faces() {
        let sides = mesh.face_degree(FaceId::new(face));
        if sides != 3 {
            return Err(ParamError::NonTriangular { face, sides });
        }
    }

    let mut loops = mesh.border_loops();
    let euler_characteristic = mesh.euler_characteristic();
    if loops.len() != 1 || euler_characteristic != 1 {
        return Err(ParamError::NotADisc {
            boundary_loops: loops.len(),
            euler_characteristic,
        });
    }

    let border = loops.swap_remove(0);
    if border.len() < 3 {
        return Err(ParamError::BorderTooShort {
            vertices: border.len(),
            minimum: 3,
        });
    }

    // a disc plus closed components can still have one loop and V - E + F = 1
    let reached = count_reachable(mesh, &border);
    if reached != mesh.num_vertices() {
        log::debug!(
            "only {} of {} vertices are connected to the border",
            reached,
            mesh.num_vertices()
        );
        return Err(ParamError::NotADisc {
            boundary_loops: 1,
            euler_characteristic,
        });
    }
    Ok(border)
}

/// Number of vertices reachable from `border` along mesh edges.
fn count_reachable<M: MeshAdaptor>(mesh: &M, border: &[VertexId<M::Index>]) -> usize {
    let mut seen = vec![false; mesh.num_vertices()];
    let mut stack = Vec::with_capacity(border.len());
    for &v in border {
        if !seen[v.index()] {
            seen[v.index()] = true;
            stack.push(v);
        }
    }

    let mut count = stack.len();
    while let Some(v) = stack.pop() {
        for w in mesh.neighbor_cycle(v).iter() {
            if !seen[w.index()] {
                seen[w.index()] = true;
                count += 1;
                stack.push(w);
            }
        }
    }
    count
}

/// Merge rows in vertex order into the system matrix and right-hand sides.
fn assemble(rows: &[Row], n: usize) -> (CsrMatrix, DVector<f64>, DVector<f64>) {
    let capacity = rows.iter().map(|r| r.entries.len()).sum();
    let mut triplets = TripletMatrix::with_capacity(n, n, capacity);
    let mut rhs_u = DVector::zeros(n);
    let mut rhs_v = DVector::zeros(n);

    for (i, row) in rows.iter().enumerate() {
        for &(col, value) in &row.entries {
            triplets.add(i, col, value);
        }
        rhs_u[i] = row.rhs.x;
        rhs_v[i] = row.rhs.y;
    }

    (triplets.into_csr(), rhs_u, rhs_v)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use nalgebra::{Matrix2, Point3, Vector2};

    use super::*;
    use crate::algo::parameterize::{
        count_folded_faces, fixtures, AuthalicWeights, BorderSpacing, CotangentWeights, DenseLu,
        MeanValueCoordinates, MeanValueParameterizer, SquareBorder, UniformWeights,
    };
    use crate::error::SolverError;
    use crate::mesh::{HalfEdgeMesh, NeighborCycle};

    fn mvc() -> MeanValueParameterizer {
        MeanValueParameterizer::default()
    }

    #[test]
    fn test_hexagon_center_at_origin() {
        let mesh = fixtures::hexagon_fan();
        let result = mvc().parameterize(&mesh).unwrap();

        assert!(result.uv.get(VertexId::new(0)).coords.norm() < 1e-10);
        assert!(result.one_to_one);
        assert_eq!(result.border_vertices, 6);
        assert_eq!(result.interior_vertices, 1);
        // six identity rows plus a full row for the center
        assert_eq!(result.nonzeros, 13);
    }

    #[test]
    fn test_border_keeps_mapped_coordinates() {
        let mesh = fixtures::bowl(6);
        let result = mvc().parameterize(&mesh).unwrap();

        let border = mesh.boundary_loops().remove(0);
        let mut expected = UVMap::zeros(mesh.num_vertices());
        CircularBorder::default()
            .map_border(&mesh, &border, &mut expected)
            .unwrap();
        for &v in &border {
            assert_eq!(result.uv.get(v), expected.get(v));
        }
    }

    #[test]
    fn test_planar_wheel_reconstruction() {
        // the outer ring already lies evenly on the unit circle, so the result
        // is the input up to the rotation (or reflection) fixed by the border
        let mesh = fixtures::wheel();
        let parameterizer = FixedBorderParameterizer::new(MeanValueCoordinates, CircularBorder::default(), DenseLu);
        let uv = parameterizer.parameterize(&mesh).unwrap().uv;

        let border = mesh.boundary_loops().remove(0);
        let (a, b) = (border[0], border[1]);
        let p = Matrix2::from_columns(&[mesh.position(a).xy().coords, mesh.position(b).xy().coords]);
        let q = Matrix2::from_columns(&[uv.get(a).coords, uv.get(b).coords]);
        let transform = q * p.try_inverse().unwrap();

        for v in mesh.vertex_ids() {
            let expected = transform * mesh.position(v).xy().coords;
            assert!((uv.get(v).coords - expected).norm() < 1e-9, "{v:?}");
        }
    }

    #[test]
    fn test_uniform_spacing_reconstruction() {
        let mesh = fixtures::wheel();
        let parameterizer = FixedBorderParameterizer::new(
            MeanValueCoordinates,
            CircularBorder::new(BorderSpacing::Uniform),
            DenseLu,
        );
        let uv = parameterizer.parameterize(&mesh).unwrap().uv;
        let center = uv.get(VertexId::new(fixtures::WHEEL_CENTER));
        assert!(center.coords.norm() < 1e-9);
    }

    #[test]
    fn test_bowl_is_one_to_one() {
        let mesh = fixtures::bowl(9);
        let result = mvc().parameterize(&mesh).unwrap();

        assert!(result.one_to_one);
        assert!(result.all_weights_positive);
        assert_eq!(count_folded_faces(&mesh, &result.uv), 0);

        let coords = result.uv.as_slice();
        for (i, a) in coords.iter().enumerate() {
            for b in &coords[i + 1..] {
                assert!((a - b).norm() > 1e-6);
            }
            assert!(a.coords.norm() <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_other_strategies_on_bowl() {
        let mesh = fixtures::bowl(7);

        let tutte = FixedBorderParameterizer::new(UniformWeights, CircularBorder::default(), BiCgStab::default())
            .parameterize(&mesh)
            .unwrap();
        assert!(tutte.one_to_one);
        assert_eq!(count_folded_faces(&mesh, &tutte.uv), 0);

        // grid diagonals get (almost) zero cotangent weights, so no guarantee here
        let harmonic = FixedBorderParameterizer::new(CotangentWeights, CircularBorder::default(), BiCgStab::default())
            .parameterize(&mesh)
            .unwrap();
        let authalic = FixedBorderParameterizer::new(AuthalicWeights, CircularBorder::default(), BiCgStab::default())
            .parameterize(&mesh)
            .unwrap();
        for result in [harmonic, authalic] {
            assert!(result.uv.as_slice().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn test_square_border() {
        let mesh = fixtures::bowl(5);
        let parameterizer = FixedBorderParameterizer::new(MeanValueCoordinates, SquareBorder, BiCgStab::default());
        let result = parameterizer.parameterize(&mesh).unwrap();

        assert!(result.one_to_one);
        let (min, max) = result.uv.bounding_box().unwrap();
        assert!((min - Point2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((max - Point2::new(1.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let mesh = fixtures::bowl(8);
        let parameterizer = mvc();
        assert_eq!(parameterizer.parameterize(&mesh).unwrap(), parameterizer.parameterize(&mesh).unwrap());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = fixtures::bowl(8);
        let parallel = mvc().parameterize(&mesh).unwrap();
        let sequential = mvc()
            .with_options(FixedBorderOptions::default().with_parallel(false))
            .parameterize(&mesh)
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_negative_cotangent_weights_downgrade_flag() {
        let mesh = fixtures::thin_fan();
        let cotangent = FixedBorderParameterizer::new(CotangentWeights, CircularBorder::default(), DenseLu);
        let result = cotangent.parameterize(&mesh).unwrap();
        assert!(!result.all_weights_positive);
        assert!(!result.one_to_one);

        let result = mvc().parameterize(&mesh).unwrap();
        assert!(result.all_weights_positive);
        assert!(result.one_to_one);
    }

    /// Places the border on a five-pointed star.
    struct StarBorder;

    impl BorderMapper for StarBorder {
        fn map_border<M: MeshAdaptor>(
            &self,
            _mesh: &M,
            border: &[VertexId<M::Index>],
            uv: &mut UVMap<M::Index>,
        ) -> ParamResult<()> {
            let n = border.len() as f64;
            for (k, &v) in border.iter().enumerate() {
                let radius = if k % 2 == 0 { 1.0 } else { 0.4 };
                let angle = TAU * k as f64 / n;
                uv.set(v, Point2::from(radius * Vector2::new(angle.cos(), angle.sin())));
            }
            Ok(())
        }

        fn is_border_convex(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_non_convex_border_downgrades_flag() {
        let mesh = fixtures::bowl(5);
        let result = FixedBorderParameterizer::new(MeanValueCoordinates, StarBorder, BiCgStab::default())
            .parameterize(&mesh)
            .unwrap();
        assert!(result.all_weights_positive);
        assert!(!result.one_to_one);
    }

    #[test]
    fn test_validation_errors() {
        let empty: HalfEdgeMesh = HalfEdgeMesh::new();
        assert_eq!(mvc().parameterize(&empty).unwrap_err(), ParamError::EmptyMesh);

        assert_eq!(
            mvc().parameterize(&fixtures::quad()).unwrap_err(),
            ParamError::NonTriangular { face: 0, sides: 4 }
        );
        assert_eq!(
            mvc().parameterize(&fixtures::tetrahedron()).unwrap_err(),
            ParamError::NotADisc {
                boundary_loops: 0,
                euler_characteristic: 2
            }
        );
        assert_eq!(
            mvc().parameterize(&fixtures::two_triangles_apart()).unwrap_err(),
            ParamError::NotADisc {
                boundary_loops: 2,
                euler_characteristic: 2
            }
        );
    }

    #[test]
    fn test_handle_with_one_loop_rejected() {
        // torus minus one triangle: a single border loop but genus one
        let mesh = fixtures::torus_with_hole(4, 4);
        assert_eq!(mesh.boundary_loops().len(), 1);
        assert_eq!(
            mvc().parameterize(&mesh).unwrap_err(),
            ParamError::NotADisc {
                boundary_loops: 1,
                euler_characteristic: -1
            }
        );
    }

    #[test]
    fn test_disc_plus_closed_component_rejected() {
        let mesh = fixtures::disc_plus_torus();
        assert_eq!(mesh.boundary_loops().len(), 1);
        assert_eq!(mesh.euler_characteristic(), 1);

        let parameterizer = FixedBorderParameterizer::new(
            MeanValueCoordinates,
            CircularBorder::default(),
            CountingSolver::default(),
        );
        assert_eq!(
            parameterizer.parameterize(&mesh).unwrap_err(),
            ParamError::NotADisc {
                boundary_loops: 1,
                euler_characteristic: 1
            }
        );
        assert_eq!(parameterizer.solver.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_coincident_vertices() {
        let err = mvc()
            .parameterize(&fixtures::fan_with_coincident_neighbor())
            .unwrap_err();
        assert_eq!(err, ParamError::DegenerateEdge { vertex: 0, neighbor: 3 });
    }

    /// A surface whose single boundary loop has only two vertices.
    struct TwoVertexBorder;

    impl MeshAdaptor for TwoVertexBorder {
        type Index = u32;

        fn num_vertices(&self) -> usize {
            3
        }

        fn num_edges(&self) -> usize {
            3
        }

        fn num_faces(&self) -> usize {
            1
        }

        fn face_degree(&self, _face: FaceId) -> usize {
            3
        }

        fn vertex_position(&self, v: VertexId) -> Point3<f64> {
            Point3::new(v.index() as f64, 0.0, 0.0)
        }

        fn is_border_vertex(&self, v: VertexId) -> bool {
            v.index() < 2
        }

        fn border_loops(&self) -> Vec<Vec<VertexId>> {
            vec![vec![VertexId::new(0), VertexId::new(1)]]
        }

        fn face_triangle(&self, _face: FaceId) -> [VertexId; 3] {
            [VertexId::new(0), VertexId::new(1), VertexId::new(2)]
        }

        fn neighbor_cycle(&self, v: VertexId) -> NeighborCycle {
            NeighborCycle::new(v, Vec::new())
        }
    }

    #[derive(Default)]
    struct CountingSolver {
        calls: AtomicUsize,
    }

    impl SparseSolver for CountingSolver {
        fn solve(&self, a: &CsrMatrix, b: &DVector<f64>) -> Result<DVector<f64>, SolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            DenseLu.solve(a, b)
        }
    }

    #[test]
    fn test_short_border_never_reaches_solver() {
        let parameterizer = FixedBorderParameterizer::new(
            MeanValueCoordinates,
            CircularBorder::default(),
            CountingSolver::default(),
        );
        let err = parameterizer.parameterize(&TwoVertexBorder).unwrap_err();

        assert_eq!(err, ParamError::BorderTooShort { vertices: 2, minimum: 3 });
        assert_eq!(parameterizer.solver.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_solver_called_once_per_axis() {
        let parameterizer = FixedBorderParameterizer::new(
            MeanValueCoordinates,
            CircularBorder::default(),
            CountingSolver::default(),
        );
        parameterizer.parameterize(&fixtures::hexagon_fan()).unwrap();
        assert_eq!(parameterizer.solver.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_solver_failure_names_axis() {
        let parameterizer = FixedBorderParameterizer::new(
            MeanValueCoordinates,
            CircularBorder::default(),
            BiCgStab::default().with_max_iterations(0),
        )
        .with_options(FixedBorderOptions::default().with_parallel(false));

        let err = parameterizer.parameterize(&fixtures::bowl(5)).unwrap_err();
        assert!(matches!(
            err,
            ParamError::Solver {
                axis: Axis::U,
                source: SolverError::DidNotConverge { .. }
            }
        ));
    }

    /// Pretends to be positive but is not.
    struct BrokenWeights(f64);

    impl WeightStrategy for BrokenWeights {
        fn weight<M: MeshAdaptor>(&self, _mesh: &M, _cycle: &NeighborCycle<M::Index>, _j: usize) -> ParamResult<f64> {
            Ok(self.0)
        }

        fn guarantees_positive(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let mesh = fixtures::hexagon_fan();
        for bad in [-1.0, 0.0, f64::NAN] {
            let err = FixedBorderParameterizer::new(BrokenWeights(bad), CircularBorder::default(), DenseLu)
                .parameterize(&mesh)
                .unwrap_err();
            assert!(matches!(err, ParamError::InvalidWeight { vertex: 0, .. }));
        }
    }
}
