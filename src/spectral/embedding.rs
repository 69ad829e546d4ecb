//! Eigen-embedding of a Laplacian.

use crate::error::{Error, Result};
use crate::graph::Laplacian;
use nalgebra::{DMatrix, SymmetricEigen};
use std::ops::Range;

/// Relative tolerance for the symmetry check that precedes decomposition.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Which contiguous block of the ascending spectrum to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EigenWindow {
    /// Columns `[1, k + 1)`: the `k` smallest eigenvalues after the trivial one.
    ///
    /// On a combinatorial or normalized Laplacian the first eigenvector is the
    /// (degree-weighted) constant vector and carries no partition information.
    #[default]
    SkipTrivial,

    /// Columns `[0, k)`.
    Smallest,

    /// Columns `[n - k - 1, n - 1)`: the `k` largest eigenvalues except the
    /// very largest.
    ///
    /// Paired with [`crate::graph::LaplacianKind::AdjacencyMinusDegree`], whose
    /// spectrum is the mirror of `D − A`, this selects the same eigenvectors as
    /// `SkipTrivial` does on the combinatorial Laplacian.
    BelowLargest,
}

impl EigenWindow {
    /// Column range for an `n`-vertex spectrum and width `k`.
    pub fn columns(self, n: usize, k: usize) -> Result<Range<usize>> {
        let max_k = match self {
            EigenWindow::Smallest => n,
            EigenWindow::SkipTrivial | EigenWindow::BelowLargest => n.saturating_sub(1),
        };
        if k == 0 || k > max_k {
            return Err(Error::InvalidEmbeddingWidth {
                requested: k,
                n_vertices: n,
            });
        }
        Ok(match self {
            EigenWindow::SkipTrivial => 1..k + 1,
            EigenWindow::Smallest => 0..k,
            EigenWindow::BelowLargest => n - k - 1..n - 1,
        })
    }
}

/// Full eigendecomposition of a symmetric matrix, sorted by ascending
/// eigenvalue.
#[derive(Debug, Clone)]
pub struct Spectrum {
    values: Vec<f64>,
    vectors: DMatrix<f64>,
}

impl Spectrum {
    /// Decompose a symmetric matrix.
    ///
    /// Rejects empty, non-square, non-finite, and non-symmetric input before calling
    /// the solver. Eigenvectors are unit length; their sign is whatever the
    /// solver produced.
    pub fn decompose(matrix: &DMatrix<f64>) -> Result<Self> {
        check_symmetric(matrix)?;
        let n = matrix.nrows();

        let eig = SymmetricEigen::try_new(matrix.clone(), f64::EPSILON, 0)
            .ok_or_else(|| Error::Decomposition(format!("no convergence for {n}x{n} matrix")))?;

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| eig.eigenvalues[a].total_cmp(&eig.eigenvalues[b]).then(a.cmp(&b)));

        let values = order.iter().map(|&i| eig.eigenvalues[i]).collect();
        let vectors = DMatrix::from_fn(n, n, |r, c| eig.eigenvectors[(r, order[c])]);
        Ok(Self { values, vectors })
    }

    /// Eigenvalues, ascending.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Eigenvectors as columns, in the same order as [`Spectrum::values`].
    pub fn vectors(&self) -> &DMatrix<f64> {
        &self.vectors
    }

    /// Number of eigenpairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the spectrum is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keep a window of `k` eigenvectors.
    pub fn select(&self, window: EigenWindow, k: usize) -> Result<Embedding> {
        let columns = window.columns(self.len(), k)?;
        let vectors = self.vectors.columns(columns.start, k).into_owned();
        let eigenvalues = self.values[columns.clone()].to_vec();
        Ok(Embedding {
            vectors,
            eigenvalues,
            columns,
        })
    }
}

/// Vertices embedded by selected Laplacian eigenvectors.
#[derive(Debug, Clone)]
pub struct Embedding {
    vectors: DMatrix<f64>,
    eigenvalues: Vec<f64>,
    columns: Range<usize>,
}

impl Embedding {
    /// The n×k matrix, one row per vertex.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.vectors
    }

    /// Eigenvalues of the selected columns.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Which columns of the ascending spectrum were kept.
    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }

    /// Number of embedded vertices.
    pub fn n_rows(&self) -> usize {
        self.vectors.nrows()
    }

    /// Embedding width.
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    /// Row-major copy, one `Vec` per vertex, for clustering.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.vectors
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Configured spectral embedding step.
#[derive(Debug, Clone)]
pub struct SpectralEmbedder {
    dim: usize,
    window: EigenWindow,
}

impl SpectralEmbedder {
    /// Embed into `dim` dimensions using [`EigenWindow::SkipTrivial`].
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            window: EigenWindow::default(),
        }
    }

    /// Set the column window.
    pub fn with_window(mut self, window: EigenWindow) -> Self {
        self.window = window;
        self
    }

    /// Embedding width.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Decompose the Laplacian and keep the configured window.
    pub fn embed(&self, laplacian: &Laplacian) -> Result<Embedding> {
        self.embed_matrix(laplacian.matrix())
    }

    /// Same as [`SpectralEmbedder::embed`], for a raw symmetric matrix.
    pub fn embed_matrix(&self, matrix: &DMatrix<f64>) -> Result<Embedding> {
        // Validate the width before paying for the decomposition.
        self.window.columns(matrix.nrows(), self.dim)?;
        let spectrum = Spectrum::decompose(matrix)?;
        let embedding = spectrum.select(self.window, self.dim)?;
        log::debug!(
            "embedding: {}x{}, columns {:?}, eigenvalues {:?}",
            embedding.n_rows(),
            embedding.dim(),
            embedding.columns(),
            embedding.eigenvalues()
        );
        Ok(embedding)
    }
}

/// Embed with the `k` smallest non-trivial eigenvectors.
pub fn smallest_eigenvectors(laplacian: &Laplacian, k: usize) -> Result<Embedding> {
    SpectralEmbedder::new(k).embed(laplacian)
}

fn check_symmetric(matrix: &DMatrix<f64>) -> Result<()> {
    let (rows, cols) = matrix.shape();
    if rows == 0 {
        return Err(Error::EmptyMatrix);
    }
    if rows != cols {
        return Err(Error::DimensionMismatch {
            expected: rows,
            found: cols,
        });
    }
    for i in 0..rows {
        for j in 0..cols {
            if !matrix[(i, j)].is_finite() {
                return Err(Error::NonFiniteEntry { row: i, col: j });
            }
        }
    }
    for i in 0..rows {
        for j in i + 1..cols {
            let (a, b) = (matrix[(i, j)], matrix[(j, i)]);
            if (a - b).abs() > SYMMETRY_TOLERANCE * a.abs().max(1.0) {
                return Err(Error::NotSymmetric { row: i, col: j });
            }
        }
    }
    Ok(())
}
