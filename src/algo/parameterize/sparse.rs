//! Sparse matrices and linear solvers.
//!
//! Systems are accumulated entry by entry in a [`TripletMatrix`], compressed
//! into a [`CsrMatrix`], and handed to a [`SparseSolver`]. Fixed-border
//! systems are not symmetric (weights differ per direction), so the default
//! solver is a Jacobi-preconditioned BiCGSTAB; [`DenseLu`] is available for
//! small systems and as a reference.

use nalgebra::{DMatrix, DVector};

use crate::error::SolverError;

/// Entry accumulator supporting `(row, col) += value`.
#[derive(Debug, Clone)]
pub struct TripletMatrix {
    rows: usize,
    cols: usize,
    triplets: Vec<(usize, usize, f64)>,
}

impl TripletMatrix {
    /// Create an empty accumulator.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            triplets: Vec::new(),
        }
    }

    /// Create an empty accumulator with room for `capacity` entries.
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        Self {
            rows,
            cols,
            triplets: Vec::with_capacity(capacity),
        }
    }

    /// Add `value` to entry `(row, col)`.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols, "entry ({row}, {col}) out of bounds");
        self.triplets.push((row, col, value));
    }

    /// Number of accumulated (not yet merged) entries.
    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    /// Check if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    /// Compress into CSR form, summing duplicates.
    pub fn into_csr(self) -> CsrMatrix {
        CsrMatrix::from_triplets(self.rows, self.cols, self.triplets)
    }
}

/// Compressed Sparse Row (CSR) matrix.
#[derive(Debug, Clone)]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    /// `row_ptr[i]..row_ptr[i + 1]` indexes row i in `col_idx`/`values`.
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Create a CSR matrix from triplets (row, col, value).
    ///
    /// Duplicate entries at the same (row, col) are summed in input order, so
    /// the result does not depend on how the sort breaks ties.
    pub fn from_triplets(rows: usize, cols: usize, mut triplets: Vec<(usize, usize, f64)>) -> Self {
        // stable: equal positions keep their accumulation order
        triplets.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut row_ptr = vec![0usize; rows + 1];
        let mut col_idx: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<f64> = Vec::with_capacity(triplets.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, val) in triplets {
            match (last, values.last_mut()) {
                (Some(prev), Some(acc)) if prev == (row, col) => *acc += val,
                _ => {
                    col_idx.push(col);
                    values.push(val);
                    row_ptr[row + 1] += 1;
                    last = Some((row, col));
                }
            }
        }

        for r in 0..rows {
            row_ptr[r + 1] += row_ptr[r];
        }

        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entry `(row, col)`, zero if not stored.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        self.col_idx[range.clone()]
            .binary_search(&col)
            .map(|k| self.values[range.start + k])
            .unwrap_or(0.0)
    }

    /// Iterate over the stored `(col, value)` pairs of a row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_ptr[row]..self.row_ptr[row + 1];
        self.col_idx[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> DVector<f64> {
        DVector::from_fn(self.rows.min(self.cols), |i, _| self.get(i, i))
    }

    /// Multiply matrix by vector: y = A * x.
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        assert_eq!(x.len(), self.cols, "Vector dimension mismatch");

        DVector::from_fn(self.rows, |i, _| {
            self.row(i).map(|(col, val)| val * x[col]).sum()
        })
    }

    /// Expand into a dense matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut dense = DMatrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for (col, val) in self.row(i) {
                dense[(i, col)] += val;
            }
        }
        dense
    }
}

/// A linear solver for `A * x = b`.
pub trait SparseSolver: Sync {
    /// Solve the system, returning `x`.
    fn solve(&self, a: &CsrMatrix, b: &DVector<f64>) -> Result<DVector<f64>, SolverError>;
}

fn check_dimensions(a: &CsrMatrix, b: &DVector<f64>) -> Result<(), SolverError> {
    if a.nrows() != a.ncols() || a.nrows() != b.len() {
        return Err(SolverError::DimensionMismatch {
            rows: a.nrows(),
            cols: a.ncols(),
            rhs: b.len(),
        });
    }
    Ok(())
}

fn check_finite(x: DVector<f64>) -> Result<DVector<f64>, SolverError> {
    if x.iter().all(|v| v.is_finite()) {
        Ok(x)
    } else {
        Err(SolverError::NonFinite)
    }
}

/// Jacobi-preconditioned BiCGSTAB for general (non-symmetric) systems.
#[derive(Debug, Clone, Copy)]
pub struct BiCgStab {
    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// Convergence tolerance on the relative residual `|b - Ax| / |b|`.
    pub tolerance: f64,
}

impl Default for BiCgStab {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            tolerance: 1e-12,
        }
    }
}

impl BiCgStab {
    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl SparseSolver for BiCgStab {
    fn solve(&self, a: &CsrMatrix, b: &DVector<f64>) -> Result<DVector<f64>, SolverError> {
        check_dimensions(a, b)?;
        let n = b.len();

        let diagonal = a.diagonal();
        if let Some(row) = diagonal.iter().position(|&d| d == 0.0) {
            return Err(SolverError::ZeroDiagonal { row });
        }
        let inv_diag = diagonal.map(|d| 1.0 / d);

        let mut x = DVector::zeros(n);
        let b_norm = b.norm();
        if b_norm == 0.0 {
            return Ok(x);
        }

        let mut r = b.clone();
        let r_hat = r.clone();
        let mut p = DVector::zeros(n);
        let mut v = DVector::zeros(n);
        let mut rho_prev = 1.0;
        let mut alpha = 1.0;
        let mut omega = 1.0;
        let tiny = f64::MIN_POSITIVE.sqrt();

        for iter in 0..self.max_iterations {
            let rho = r_hat.dot(&r);
            if rho.abs() < tiny {
                return Err(SolverError::Breakdown { iterations: iter });
            }

            let beta = (rho / rho_prev) * (alpha / omega);
            p = &r + beta * (&p - omega * &v);

            let y = p.component_mul(&inv_diag);
            v = a.mul_vec(&y);
            let r_hat_v = r_hat.dot(&v);
            if r_hat_v.abs() < tiny {
                return Err(SolverError::Breakdown { iterations: iter });
            }
            alpha = rho / r_hat_v;

            let s = &r - alpha * &v;
            x += alpha * &y;
            if s.norm() / b_norm < self.tolerance {
                return check_finite(x);
            }

            let z = s.component_mul(&inv_diag);
            let t = a.mul_vec(&z);
            let t_t = t.dot(&t);
            if t_t < tiny {
                return Err(SolverError::Breakdown { iterations: iter });
            }
            omega = t.dot(&s) / t_t;

            x += omega * &z;
            r = s - omega * &t;
            if r.norm() / b_norm < self.tolerance {
                return check_finite(x);
            }
            if omega.abs() < tiny {
                return Err(SolverError::Breakdown { iterations: iter + 1 });
            }

            rho_prev = rho;
        }

        Err(SolverError::DidNotConverge {
            iterations: self.max_iterations,
            residual: (b - a.mul_vec(&x)).norm() / b_norm,
        })
    }
}

/// Direct solve through a dense LU factorization with partial pivoting.
///
/// Memory grows with the square of the vertex count; meant for small meshes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseLu;

impl SparseSolver for DenseLu {
    fn solve(&self, a: &CsrMatrix, b: &DVector<f64>) -> Result<DVector<f64>, SolverError> {
        check_dimensions(a, b)?;
        let x = a.to_dense().lu().solve(b).ok_or(SolverError::Singular)?;
        check_finite(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nonsymmetric() -> CsrMatrix {
        // [ 4  -1   0 ]
        // [ -2  5  -1 ]
        // [ 0  -3   6 ]
        let mut m = TripletMatrix::new(3, 3);
        m.add(0, 0, 4.0);
        m.add(0, 1, -1.0);
        m.add(1, 0, -2.0);
        m.add(1, 1, 5.0);
        m.add(1, 2, -1.0);
        m.add(2, 1, -3.0);
        m.add(2, 2, 6.0);
        m.into_csr()
    }

    #[test]
    fn test_csr_from_triplets_with_duplicates() {
        let triplets = vec![(1, 1, 3.0), (0, 0, 2.0), (0, 1, 1.0), (0, 0, 2.0), (1, 0, 1.0)];
        let a = CsrMatrix::from_triplets(2, 2, triplets);

        assert_eq!(a.nnz(), 4);
        assert_eq!(a.get(0, 0), 4.0);
        assert_eq!(a.get(0, 1), 1.0);
        assert_eq!(a.get(1, 0), 1.0);
        assert_eq!(a.get(1, 1), 3.0);
    }

    #[test]
    fn test_csr_empty_rows() {
        let a = CsrMatrix::from_triplets(4, 4, vec![(2, 3, 1.5)]);
        assert_eq!(a.nnz(), 1);
        assert_eq!(a.row(0).count(), 0);
        assert_eq!(a.row(3).count(), 0);
        assert_eq!(a.get(2, 3), 1.5);
        assert_eq!(a.get(2, 2), 0.0);
    }

    #[test]
    fn test_csr_mul_vec() {
        let a = nonsymmetric();
        let y = a.mul_vec(&DVector::from_vec(vec![1.0, 1.0, 1.0]));
        assert_eq!(y, DVector::from_vec(vec![3.0, 2.0, 3.0]));
        assert_eq!(a.diagonal(), DVector::from_vec(vec![4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_bicgstab_nonsymmetric() {
        let a = nonsymmetric();
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);

        let x = BiCgStab::default().solve(&a, &b).unwrap();
        assert!((a.mul_vec(&x) - &b).norm() < 1e-10);

        let reference = DenseLu.solve(&a, &b).unwrap();
        assert!((x - reference).norm() < 1e-10);
    }

    #[test]
    fn test_bicgstab_zero_rhs() {
        let x = BiCgStab::default()
            .solve(&nonsymmetric(), &DVector::zeros(3))
            .unwrap();
        assert_eq!(x, DVector::zeros(3));
    }

    #[test]
    fn test_bicgstab_zero_diagonal() {
        let a = CsrMatrix::from_triplets(2, 2, vec![(0, 1, 1.0), (1, 0, 1.0)]);
        let err = BiCgStab::default()
            .solve(&a, &DVector::from_vec(vec![1.0, 1.0]))
            .unwrap_err();
        assert_eq!(err, SolverError::ZeroDiagonal { row: 0 });
    }

    #[test]
    fn test_bicgstab_iteration_limit() {
        let err = BiCgStab::default()
            .with_max_iterations(0)
            .solve(&nonsymmetric(), &DVector::from_vec(vec![1.0, 2.0, 3.0]))
            .unwrap_err();
        assert!(matches!(err, SolverError::DidNotConverge { iterations: 0, .. }));
    }

    #[test]
    fn test_dense_lu_singular() {
        let a = CsrMatrix::from_triplets(
            2,
            2,
            vec![(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0), (1, 1, 1.0)],
        );
        let err = DenseLu.solve(&a, &DVector::from_vec(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(err, SolverError::Singular);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = DenseLu
            .solve(&nonsymmetric(), &DVector::from_vec(vec![1.0, 2.0]))
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::DimensionMismatch {
                rows: 3,
                cols: 3,
                rhs: 2
            }
        );
    }
}
