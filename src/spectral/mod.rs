//! Spectral embedding and the end-to-end clustering pipeline.
//!
//! ## Why the smallest eigenvalues
//!
//! For the combinatorial Laplacian `L = D − A` and any vector `x`:
//!
//! ```text
//! xᵀ L x = Σ_{(i,j) ∈ E} (x_i − x_j)²
//! ```
//!
//! Eigenvectors with small eigenvalues therefore vary little across edges:
//! densely connected groups of vertices get similar coordinates. The smallest
//! eigenvalue is 0 with the constant eigenvector, which says nothing about the
//! partition, so [`EigenWindow::SkipTrivial`] starts at the second one (the
//! Fiedler vector).
//!
//! ## Column windows and Laplacian sign
//!
//! `A − D` has the same eigenvectors as `D − A` with negated eigenvalues, so
//! sorted ascending its useful eigenvectors sit at the top, just below the
//! trivial one. [`EigenWindow::BelowLargest`] is that window. The two pairings
//!
//! ```text
//! (Combinatorial,        SkipTrivial)    columns [1, k+1)     of D − A
//! (AdjacencyMinusDegree, BelowLargest)   columns [n-k-1, n-1) of A − D
//! ```
//!
//! select the same eigenvectors (up to sign), in reverse order. Mixing them,
//! for example `SkipTrivial` on `A − D`, selects the *least* smooth
//! eigenvectors instead.
//!
//! ## Usage
//!
//! ```rust
//! use cleft::graph::Edge;
//! use cleft::spectral::SpectralClustering;
//!
//! // Two triangles joined by the edge 3–4.
//! let edges: Vec<Edge> = [(1, 2), (2, 3), (1, 3), (3, 4), (4, 5), (5, 6), (4, 6)]
//!     .into_iter()
//!     .map(Edge::from)
//!     .collect();
//!
//! let labels = SpectralClustering::with_clusters(2).cluster_edges(&edges).unwrap();
//! assert_eq!(labels[0], labels[2]);
//! assert_eq!(labels[3], labels[5]);
//! assert_ne!(labels[0], labels[5]);
//! ```

mod embedding;
mod pipeline;

pub use embedding::{smallest_eigenvectors, EigenWindow, Embedding, SpectralEmbedder, Spectrum};
pub use pipeline::{SpectralClustering, SpectralConfig, SpectralFit};
