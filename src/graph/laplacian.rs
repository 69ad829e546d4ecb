use super::adjacency::Adjacency;
use nalgebra::DMatrix;

/// Which Laplacian to derive from an adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaplacianKind {
    /// `L = D − A`. Positive semidefinite, zero row sums, and the constant
    /// vector has eigenvalue 0.
    #[default]
    Combinatorial,

    /// `L = A − D`: diagonal `A[i][i] − D[i]`, off-diagonal entries copied
    /// from `A` unchanged.
    ///
    /// Same eigenvectors as [`LaplacianKind::Combinatorial`], negated
    /// eigenvalues. The trivial eigenvector sits at the *top* of an ascending
    /// spectrum instead of the bottom.
    AdjacencyMinusDegree,

    /// `L = I − D^{-½} A D^{-½}`, eigenvalues in `[0, 2]`.
    ///
    /// Rows and columns of isolated vertices are left at zero.
    SymmetricNormalized,
}

/// A graph Laplacian together with the convention used to build it.
#[derive(Debug, Clone, PartialEq)]
pub struct Laplacian {
    matrix: DMatrix<f64>,
    kind: LaplacianKind,
}

impl Laplacian {
    /// Derive a Laplacian of the given kind.
    pub fn build(adjacency: &Adjacency, kind: LaplacianKind) -> Self {
        let n = adjacency.dim();
        let degrees = adjacency.degrees();
        let mut matrix = adjacency.to_matrix();

        match kind {
            LaplacianKind::Combinatorial => {
                matrix.neg_mut();
                for i in 0..n {
                    matrix[(i, i)] += degrees.get(i);
                }
            }
            LaplacianKind::AdjacencyMinusDegree => {
                for i in 0..n {
                    matrix[(i, i)] -= degrees.get(i);
                }
            }
            LaplacianKind::SymmetricNormalized => {
                let inv_sqrt: Vec<f64> = degrees
                    .as_slice()
                    .iter()
                    .map(|&d| if d > 0.0 { 1.0 / d.sqrt() } else { 0.0 })
                    .collect();
                for i in 0..n {
                    for j in 0..n {
                        let scaled = inv_sqrt[i] * adjacency.get(i, j) * inv_sqrt[j];
                        let identity = if i == j && degrees.get(i) > 0.0 { 1.0 } else { 0.0 };
                        matrix[(i, j)] = identity - scaled;
                    }
                }
            }
        }

        log::debug!("laplacian built: {n}x{n}, kind={kind:?}");
        Self { matrix, kind }
    }

    /// The dense matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Consume into the dense matrix.
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }

    /// The convention used.
    pub fn kind(&self) -> LaplacianKind {
        self.kind
    }

    /// Number of vertices.
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }
}

/// Combinatorial Laplacian `D − A`.
pub fn combinatorial_laplacian(adjacency: &Adjacency) -> Laplacian {
    Laplacian::build(adjacency, LaplacianKind::Combinatorial)
}
