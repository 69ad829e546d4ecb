//! The end-to-end pipeline: adjacency → Laplacian → embedding → k-means.

use super::embedding::{EigenWindow, Embedding, SpectralEmbedder};
use crate::cluster::{Kmeans, KmeansFit, KmeansInit};
use crate::error::{Error, Result};
use crate::graph::{Adjacency, Edge, Laplacian, LaplacianKind};

/// Spectral clustering parameters.
#[derive(Clone, Debug)]
pub struct SpectralConfig {
    /// Number of communities.
    pub n_clusters: usize,

    /// Number of eigenvectors in the embedding.
    ///
    /// Usually at least `n_clusters`, though this is not enforced.
    pub embedding_dim: usize,

    /// Maximum k-means iterations.
    pub max_iter: usize,

    /// Laplacian convention.
    pub laplacian: LaplacianKind,

    /// Eigenvector window.
    pub window: EigenWindow,

    /// K-means initialisation.
    pub init: KmeansInit,

    /// RNG seed, used only with [`KmeansInit::KmeansPlusPlus`].
    pub seed: Option<u64>,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            n_clusters: 2,
            embedding_dim: 2,
            max_iter: 10,
            laplacian: LaplacianKind::Combinatorial,
            window: EigenWindow::SkipTrivial,
            init: KmeansInit::SortedPartition,
            seed: None,
        }
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct SpectralFit {
    /// Community label per vertex.
    pub labels: Vec<usize>,
    /// The embedding the labels were computed from.
    pub embedding: Embedding,
    /// K-means diagnostics.
    pub kmeans: KmeansFit,
}

/// Spectral clusterer.
#[derive(Clone, Debug, Default)]
pub struct SpectralClustering {
    config: SpectralConfig,
}

impl SpectralClustering {
    /// Create a clusterer from a full configuration.
    pub fn new(config: SpectralConfig) -> Self {
        Self { config }
    }

    /// Default configuration with `n_clusters` communities and an embedding of
    /// the same width.
    pub fn with_clusters(n_clusters: usize) -> Self {
        Self::new(SpectralConfig {
            n_clusters,
            embedding_dim: n_clusters,
            ..Default::default()
        })
    }

    /// The configuration.
    pub fn config(&self) -> &SpectralConfig {
        &self.config
    }

    /// Label every vertex named by `edges`.
    pub fn cluster_edges(&self, edges: &[Edge]) -> Result<Vec<usize>> {
        let adjacency = Adjacency::from_edges(edges)?;
        self.cluster_adjacency(&adjacency)
    }

    /// Label every vertex of `adjacency`.
    pub fn cluster_adjacency(&self, adjacency: &Adjacency) -> Result<Vec<usize>> {
        Ok(self.run(adjacency)?.labels)
    }

    /// Run all stages and keep the intermediate results.
    pub fn run(&self, adjacency: &Adjacency) -> Result<SpectralFit> {
        let cfg = &self.config;
        let n = adjacency.dim();

        // Fail on impossible cluster counts before decomposing anything.
        if cfg.n_clusters == 0 || cfg.n_clusters > n {
            return Err(Error::InvalidClusterCount {
                requested: cfg.n_clusters,
                n_items: n,
            });
        }

        let laplacian = Laplacian::build(adjacency, cfg.laplacian);
        let embedding = SpectralEmbedder::new(cfg.embedding_dim)
            .with_window(cfg.window)
            .embed(&laplacian)?;

        let mut kmeans = Kmeans::new(cfg.n_clusters)
            .with_max_iter(cfg.max_iter)
            .with_init(cfg.init);
        if let Some(seed) = cfg.seed {
            kmeans = kmeans.with_seed(seed);
        }
        let fit = kmeans.fit(&embedding.rows())?;

        log::info!(
            "spectral clustering: {} vertices, {} clusters, embedding dim {}, kmeans iterations {}{}",
            n,
            cfg.n_clusters,
            cfg.embedding_dim,
            fit.iterations,
            if fit.converged { "" } else { " (not converged)" }
        );

        Ok(SpectralFit {
            labels: fit.labels.clone(),
            embedding,
            kmeans: fit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Two 4-cliques joined by one edge.
    fn two_cliques() -> Vec<Edge> {
        let mut edges = Vec::new();
        for base in [0, 4] {
            for i in 1..=4 {
                for j in i + 1..=4 {
                    edges.push(Edge::new(base + i, base + j));
                }
            }
        }
        edges.push(Edge::new(4, 5));
        edges
    }

    #[test]
    fn test_two_cliques() {
        let labels = SpectralClustering::default()
            .cluster_edges(&two_cliques())
            .unwrap();
        assert_eq!(labels.len(), 8);
        assert!(labels[..4].iter().all(|&l| l == labels[0]));
        assert!(labels[4..].iter().all(|&l| l == labels[4]));
        assert_ne!(labels[0], labels[4]);
    }

    #[test]
    fn test_run_keeps_intermediates() {
        let adjacency = Adjacency::from_edges(&two_cliques()).unwrap();
        let fit = SpectralClustering::with_clusters(2).run(&adjacency).unwrap();
        assert_eq!(fit.embedding.n_rows(), 8);
        assert_eq!(fit.embedding.dim(), 2);
        assert_eq!(fit.embedding.columns(), 1..3);
        assert_eq!(fit.labels, fit.kmeans.labels);
        assert!(fit.kmeans.converged);
    }

    #[test]
    fn test_too_many_clusters() {
        let config = SpectralConfig {
            n_clusters: 9,
            ..Default::default()
        };
        let err = SpectralClustering::new(config)
            .cluster_edges(&two_cliques())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidClusterCount {
                requested: 9,
                n_items: 8
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    #[test]
    fn test_zero_clusters() {
        let config = SpectralConfig {
            n_clusters: 0,
            ..Default::default()
        };
        assert!(SpectralClustering::new(config)
            .cluster_edges(&two_cliques())
            .is_err());
    }

    #[test]
    fn test_bad_edges_abort_the_run() {
        let edges = [Edge::new(1, 2), Edge::new(2, 2)];
        assert!(matches!(
            SpectralClustering::default().cluster_edges(&edges),
            Err(Error::SelfLoop { vertex: 2 })
        ));
    }
}
