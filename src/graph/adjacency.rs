//! Dense symmetric adjacency with on-demand growth.
//!
//! The matrix lives in a single row-major buffer. When an edge names a vertex
//! beyond the current dimension, a larger zeroed buffer is allocated and the
//! existing block is copied into its top-left corner.

use crate::error::{Error, Result};
use nalgebra::DMatrix;

/// Dimension of a freshly created adjacency, before any edge is seen.
pub const MIN_VERTICES: usize = 2;

/// An undirected, unweighted edge between two 1-based vertex ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// First endpoint (1-based).
    pub a: usize,
    /// Second endpoint (1-based).
    pub b: usize,
}

impl Edge {
    /// Create an edge between two 1-based vertex ids.
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Validate the endpoints and return them as 0-based indices.
    fn indices(self) -> Result<(usize, usize)> {
        for vertex in [self.a, self.b] {
            if vertex == 0 {
                return Err(Error::InvalidVertex { vertex });
            }
        }
        if self.a == self.b {
            return Err(Error::SelfLoop { vertex: self.a });
        }
        Ok((self.a - 1, self.b - 1))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// Dense symmetric 0/1 adjacency matrix.
///
/// Invariants: `get(i, j) == get(j, i)`, the diagonal is zero, and every entry
/// is either 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency {
    n: usize,
    data: Vec<f64>,
}

impl Adjacency {
    /// Build the adjacency for a list of edges.
    ///
    /// The dimension is the largest vertex id seen, or [`MIN_VERTICES`] if
    /// that is larger. Fails on self-loops and on vertex id 0.
    pub fn from_edges(edges: &[Edge]) -> Result<Self> {
        let mut builder = AdjacencyBuilder::new();
        for &edge in edges {
            builder.add_edge(edge)?;
        }
        Ok(builder.build())
    }

    /// Number of vertices (rows and columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Weight between 0-based vertices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index out of bounds");
        self.data[i * self.n + j]
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.n {
            count += self.row(i)[i + 1..].iter().filter(|&&w| w != 0.0).count();
        }
        count
    }

    /// Per-vertex degrees, `D[i] = Σ_j A[i][j]`.
    pub fn degrees(&self) -> Degrees {
        Degrees {
            values: (0..self.n).map(|i| self.row(i).iter().sum()).collect(),
        }
    }

    /// Copy into a dense nalgebra matrix.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.n, self.n, &self.data)
    }
}

/// Incremental builder for [`Adjacency`].
#[derive(Debug, Clone)]
pub struct AdjacencyBuilder {
    n: usize,
    data: Vec<f64>,
}

impl AdjacencyBuilder {
    /// Start from an empty [`MIN_VERTICES`]-square matrix.
    pub fn new() -> Self {
        Self {
            n: MIN_VERTICES,
            data: vec![0.0; MIN_VERTICES * MIN_VERTICES],
        }
    }

    /// Current dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Record an edge, growing the matrix if either endpoint is new.
    ///
    /// Adding the same edge twice leaves the matrix unchanged.
    pub fn add_edge(&mut self, edge: impl Into<Edge>) -> Result<&mut Self> {
        let edge: Edge = edge.into();
        let (i, j) = edge.indices()?;
        self.grow_to(i.max(j) + 1);
        let n = self.n;
        self.data[i * n + j] = 1.0;
        self.data[j * n + i] = 1.0;
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> Adjacency {
        log::debug!("adjacency built: {}x{}", self.n, self.n);
        Adjacency {
            n: self.n,
            data: self.data,
        }
    }

    fn grow_to(&mut self, new_n: usize) {
        if new_n <= self.n {
            return;
        }
        let old_n = self.n;
        let mut data = vec![0.0; new_n * new_n];
        for i in 0..old_n {
            data[i * new_n..i * new_n + old_n]
                .copy_from_slice(&self.data[i * old_n..(i + 1) * old_n]);
        }
        self.n = new_n;
        self.data = data;
    }
}

impl Default for AdjacencyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagonal of the degree matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Degrees {
    values: Vec<f64>,
}

impl Degrees {
    /// Degree of 0-based vertex `i`.
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// All degrees, indexed by vertex.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dense n×n diagonal matrix.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_diagonal(&nalgebra::DVector::from_column_slice(&self.values))
    }
}
