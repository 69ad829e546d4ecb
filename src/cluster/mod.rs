//! Clustering of embedded points.
//!
//! The last stage of the pipeline: each vertex has become a point in a small
//! Euclidean space, and k-means groups nearby points.
//!
//! ## K-means
//!
//! Assign each point to the nearest centroid, then move each centroid to the
//! mean of its points. Repeat.
//!
//! **Objective**: minimise the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - You know k in advance
//!
//! On a spectral embedding both hold reasonably well: vertices of a
//! well-separated community land close together.
//!
//! ## Usage
//!
//! ```rust
//! use cleft::cluster::{Clustering, Kmeans, KmeansInit};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//!
//! let fit = Kmeans::new(2)
//!     .with_init(KmeansInit::SortedPartition)
//!     .fit(&data)
//!     .unwrap();
//! assert!(fit.converged);
//! assert_eq!(fit.labels, vec![0, 0, 1, 1]);
//! ```

mod kmeans;
mod traits;
mod util;

pub use kmeans::{Kmeans, KmeansFit, KmeansInit};
pub use traits::Clustering;
