//! Graph structures: edges, the dense adjacency, degrees, and Laplacians.
//!
//! Vertices are identified by 1-based ids on input and by 0-based indices
//! everywhere else. Edges are undirected and unweighted: an edge present in
//! the input gets weight 1, and listing it twice does not make it heavier.
//!
//! ## Laplacian conventions
//!
//! Three forms are available through [`LaplacianKind`]:
//!
//! ```text
//! Combinatorial          L = D − A
//! AdjacencyMinusDegree   L = A − D            (= −(D − A))
//! SymmetricNormalized    L = I − D^{-½} A D^{-½}
//! ```
//!
//! `Combinatorial` and `AdjacencyMinusDegree` share eigenvectors; their spectra
//! are mirror images. See [`crate::spectral::EigenWindow`] for how that
//! interacts with column selection.
//!
//! ## Usage
//!
//! ```rust
//! use cleft::graph::{Adjacency, Edge, Laplacian, LaplacianKind};
//!
//! let edges = [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)];
//! let adjacency = Adjacency::from_edges(&edges).unwrap();
//! assert_eq!(adjacency.dim(), 3);
//! assert_eq!(adjacency.degrees().get(0), 2.0);
//!
//! let laplacian = Laplacian::build(&adjacency, LaplacianKind::Combinatorial);
//! assert_eq!(laplacian.matrix()[(0, 0)], 2.0);
//! assert_eq!(laplacian.matrix()[(0, 1)], -1.0);
//! ```

mod adjacency;
pub mod edges;
mod laplacian;

pub use adjacency::{Adjacency, AdjacencyBuilder, Degrees, Edge, MIN_VERTICES};
pub use edges::{load_adjacency, load_edges, read_edges};
pub use laplacian::{combinatorial_laplacian, Laplacian, LaplacianKind};
