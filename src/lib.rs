//! Spectral clustering of undirected graphs.
//!
//! `cleft` partitions the vertices of a small, static, unweighted graph into a
//! fixed number of communities:
//!
//! 1. [`graph::Adjacency`]: dense symmetric 0/1 adjacency from an edge list
//! 2. [`graph::Laplacian`]: `D − A` (or a documented variant)
//! 3. [`spectral::SpectralEmbedder`]: eigenvectors of the smallest non-trivial
//!    eigenvalues, one row per vertex
//! 4. [`cluster::Kmeans`]: Lloyd's k-means on the embedded rows
//!
//! [`spectral::SpectralClustering`] runs all four.
//!
//! ```rust,no_run
//! use cleft::{load_adjacency, SpectralClustering};
//!
//! let adjacency = load_adjacency("data/karate.csv")?;
//! let labels = SpectralClustering::with_clusters(2).cluster_adjacency(&adjacency)?;
//! println!("{labels:?}");
//! # Ok::<(), cleft::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod graph;
pub mod spectral;

pub use cluster::{Clustering, Kmeans, KmeansFit, KmeansInit};
pub use error::{Error, ErrorKind, Result};
pub use graph::{
    combinatorial_laplacian, load_adjacency, load_edges, read_edges, Adjacency, AdjacencyBuilder,
    Degrees, Edge, Laplacian, LaplacianKind,
};
pub use spectral::{
    smallest_eigenvectors, EigenWindow, Embedding, SpectralClustering, SpectralConfig,
    SpectralEmbedder, SpectralFit, Spectrum,
};
