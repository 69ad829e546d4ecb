//! K-means clustering (Lloyd's algorithm).
//!
//! # The Algorithm (Lloyd, 1957/1982)
//!
//! 1. Pick `k` initial centroids.
//! 2. Assign every point to its nearest centroid (squared Euclidean distance).
//! 3. Move every centroid to the mean of the points assigned to it.
//! 4. Repeat 2–3 until no assignment changes, or `max_iter` is reached.
//!
//! Each step can only lower the within-cluster sum of squares, so the loop
//! reaches a fixed point, but only a *local* optimum: the result depends on the
//! initial centroids.
//!
//! ## Initialisation
//!
//! - [`KmeansInit::KmeansPlusPlus`] (Arthur & Vassilvitskii, 2007): the first
//!   centroid is a uniformly random point, each further one is drawn with
//!   probability proportional to its squared distance from the nearest centroid
//!   chosen so far. Reproducible when a seed is set.
//! - [`KmeansInit::SortedPartition`]: no randomness. Points are sorted by their
//!   first coordinate and cut into `k` contiguous runs of near-equal size; the
//!   runs' means are the initial centroids. On an embedding built with
//!   `EigenWindow::SkipTrivial` the first coordinate is the Fiedler vector, so
//!   this starts Lloyd from the spectral bisection. `EigenWindow::BelowLargest`
//!   yields columns in reverse order, and there the first coordinate is the
//!   Fiedler vector only at width 1.
//!
//! ## Edge cases
//!
//! - **Ties** in the assignment step go to the lowest centroid index.
//! - **Empty clusters**: the point farthest from its own centroid, taken from a
//!   cluster that has at least two members, is moved into the empty cluster and
//!   becomes its centroid (ties go to the lowest point index). Only points at a
//!   positive distance qualify. If every candidate sits exactly on its
//!   centroid, the empty cluster keeps its previous centroid and stays empty.
//! - **Iteration cap**: hitting `max_iter` is not an error. The last labeling is
//!   returned with [`KmeansFit::converged`] set to `false`, and a warning is
//!   logged.

use super::traits::Clustering;
use super::util::{nearest, squared_euclidean, validate_points};
use crate::error::{Error, Result};
use rand::prelude::*;

/// How initial centroids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KmeansInit {
    /// k-means++ D² sampling.
    #[default]
    KmeansPlusPlus,
    /// Deterministic split of the points sorted by their first coordinate.
    SortedPartition,
}

/// K-means clusterer.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum number of Lloyd iterations.
    max_iter: usize,
    /// RNG seed for k-means++; `None` draws from the thread RNG.
    seed: Option<u64>,
    /// Initialisation strategy.
    init: KmeansInit,
}

/// Result of a k-means fit.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Cluster label per point, in `[0, k)`.
    pub labels: Vec<usize>,
    /// Final centroids, one per cluster.
    pub centroids: Vec<Vec<f64>>,
    /// Number of assignment passes performed.
    pub iterations: usize,
    /// Sum of squared distances from each point to its centroid.
    pub inertia: f64,
    /// Whether assignments stabilised before `max_iter`.
    pub converged: bool,
}

impl Kmeans {
    /// Create a k-means clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            seed: None,
            init: KmeansInit::default(),
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Seed the k-means++ sampler.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initialisation strategy.
    pub fn with_init(mut self, init: KmeansInit) -> Self {
        self.init = init;
        self
    }

    /// Run Lloyd's algorithm and return labels plus diagnostics.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KmeansFit> {
        let n = data.len();
        let d = validate_points(data)?;
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }

        let mut centroids = match self.init {
            KmeansInit::KmeansPlusPlus => self.init_plus_plus(data),
            KmeansInit::SortedPartition => self.init_sorted_partition(data, d),
        };

        let mut labels = vec![usize::MAX; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;

            let mut moved = 0;
            for (point, label) in data.iter().zip(labels.iter_mut()) {
                let (c, _) = nearest(point, &centroids);
                if *label != c {
                    *label = c;
                    moved += 1;
                }
            }
            log::trace!("kmeans iteration {iterations}: {moved} points moved");

            if moved == 0 {
                converged = true;
                break;
            }

            self.update_centroids(data, &mut labels, &mut centroids, d);
        }

        if !converged {
            log::warn!(
                "kmeans reached max_iter={} without stable assignments; returning last labeling",
                self.max_iter
            );
        }

        let inertia: f64 = data
            .iter()
            .zip(&labels)
            .map(|(p, &c)| squared_euclidean(p, &centroids[c]))
            .sum();

        log::debug!(
            "kmeans: k={}, n={}, iterations={}, converged={}, inertia={:.6}",
            self.k,
            n,
            iterations,
            converged,
            inertia
        );

        Ok(KmeansFit {
            labels,
            centroids,
            iterations,
            inertia,
            converged,
        })
    }

    fn init_plus_plus(&self, data: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let n = data.len();
        let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(self.k);
        centroids.push(data[rng.random_range(0..n)].clone());

        // Squared distance from each point to its nearest chosen centroid.
        let mut dist: Vec<f64> = data
            .iter()
            .map(|p| squared_euclidean(p, &centroids[0]))
            .collect();

        while centroids.len() < self.k {
            let total: f64 = dist.iter().sum();
            let next = if total > 0.0 {
                let mut target = rng.random::<f64>() * total;
                // Rounding can leave `target` past the last weight; fall back to
                // the last point that still has positive weight.
                let mut chosen = dist.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1);
                for (i, &w) in dist.iter().enumerate() {
                    if target < w {
                        chosen = i;
                        break;
                    }
                    target -= w;
                }
                chosen
            } else {
                // All points coincide with a centroid already.
                rng.random_range(0..n)
            };

            centroids.push(data[next].clone());
            for (i, p) in data.iter().enumerate() {
                let d = squared_euclidean(p, &data[next]);
                if d < dist[i] {
                    dist[i] = d;
                }
            }
        }
        centroids
    }

    fn init_sorted_partition(&self, data: &[Vec<f64>], d: usize) -> Vec<Vec<f64>> {
        let n = data.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| data[a][0].total_cmp(&data[b][0]).then(a.cmp(&b)));

        (0..self.k)
            .map(|c| {
                let run = &order[c * n / self.k..(c + 1) * n / self.k];
                let mut mean = vec![0.0; d];
                for &i in run {
                    for (m, x) in mean.iter_mut().zip(&data[i]) {
                        *m += x;
                    }
                }
                for m in &mut mean {
                    *m /= run.len() as f64;
                }
                mean
            })
            .collect()
    }

    fn update_centroids(
        &self,
        data: &[Vec<f64>],
        labels: &mut [usize],
        centroids: &mut [Vec<f64>],
        d: usize,
    ) {
        let mut sums = vec![vec![0.0; d]; self.k];
        let mut counts = vec![0usize; self.k];
        for (point, &c) in data.iter().zip(labels.iter()) {
            counts[c] += 1;
            for (s, x) in sums[c].iter_mut().zip(point) {
                *s += x;
            }
        }

        for c in 0..self.k {
            if counts[c] > 0 {
                for (m, s) in centroids[c].iter_mut().zip(&sums[c]) {
                    *m = s / counts[c] as f64;
                }
            }
        }

        // Re-seed empty clusters from the worst-fit point of a larger cluster.
        for empty in 0..self.k {
            if counts[empty] > 0 {
                continue;
            }
            let mut farthest: Option<(usize, f64)> = None;
            for (i, point) in data.iter().enumerate() {
                if counts[labels[i]] < 2 {
                    continue;
                }
                let dist = squared_euclidean(point, &centroids[labels[i]]);
                // A point on its centroid would tie back to it on the next pass.
                if dist > 0.0 && farthest.map_or(true, |(_, best)| dist > best) {
                    farthest = Some((i, dist));
                }
            }
            if let Some((i, _)) = farthest {
                log::debug!("kmeans: cluster {empty} empty, re-seeding from point {i}");
                counts[labels[i]] -= 1;
                counts[empty] = 1;
                labels[i] = empty;
                centroids[empty].clone_from(&data[i]);
            }
        }
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![0.0, 0.2],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
            vec![9.9, 10.2],
        ]
    }

    #[test]
    fn test_kmeans_two_blobs() {
        for init in [KmeansInit::KmeansPlusPlus, KmeansInit::SortedPartition] {
            let fit = Kmeans::new(2).with_seed(42).with_init(init).fit(&blobs()).unwrap();
            let l = &fit.labels;
            assert_eq!(l.len(), 6);
            assert_eq!(l[0], l[1]);
            assert_eq!(l[1], l[2]);
            assert_eq!(l[3], l[4]);
            assert_eq!(l[4], l[5]);
            assert_ne!(l[0], l[3]);
            assert!(fit.converged);
            assert!(fit.inertia < 0.2);
            assert_eq!(fit.centroids.len(), 2);
        }
    }

    #[test]
    fn test_sorted_partition_initial_order() {
        // Sorted by first coordinate, the lower half starts in cluster 0.
        let fit = Kmeans::new(2)
            .with_init(KmeansInit::SortedPartition)
            .fit(&blobs())
            .unwrap();
        assert_eq!(fit.labels, vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_same_seed_same_labels() {
        let data: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![(i as f64 * 0.37).sin(), (i as f64 * 0.11).cos()])
            .collect();
        let model = Kmeans::new(4).with_seed(7);
        assert_eq!(model.fit_predict(&data).unwrap(), model.fit_predict(&data).unwrap());
    }

    #[test]
    fn test_k_equals_n() {
        let data = blobs();
        let labels = Kmeans::new(6).with_seed(1).fit_predict(&data).unwrap();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 6, "each point is its own cluster");
    }

    #[test]
    fn test_sorted_partition_uses_first_coordinate() {
        // Sorting on the second coordinate would pair 0 with 2 and 1 with 3.
        let data = vec![
            vec![0.0, 5.0],
            vec![1.0, -5.0],
            vec![2.0, 5.0],
            vec![3.0, -5.0],
        ];
        let fit = Kmeans::new(2)
            .with_init(KmeansInit::SortedPartition)
            .with_max_iter(1)
            .fit(&data)
            .unwrap();
        assert_eq!(fit.labels, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_duplicate_points_converge() {
        let data = vec![vec![1.0, 1.0]; 5];
        for init in [KmeansInit::KmeansPlusPlus, KmeansInit::SortedPartition] {
            let fit = Kmeans::new(3).with_seed(3).with_init(init).fit(&data).unwrap();
            assert_eq!(fit.labels, vec![0; 5]);
            assert!(fit.converged);
            assert_eq!(fit.iterations, 2);
            assert_eq!(fit.inertia, 0.0);
        }
    }

    #[test]
    fn test_empty_cluster_takes_farthest_point() {
        // Initial means are 0, 5 and 10; nothing is nearest to 5.
        let data: Vec<Vec<f64>> = [0.0, 0.0, 1.0, 9.0, 10.0, 10.0]
            .iter()
            .map(|&x| vec![x])
            .collect();
        let fit = Kmeans::new(3)
            .with_init(KmeansInit::SortedPartition)
            .fit(&data)
            .unwrap();
        assert_eq!(fit.labels, vec![0, 0, 1, 2, 2, 2]);
        assert!(fit.converged);
        assert_eq!(fit.centroids[1], vec![1.0]);
    }

    #[test]
    fn test_iteration_cap_is_not_an_error() {
        let data: Vec<Vec<f64>> = (0..30).map(|i| vec![(i * i % 17) as f64]).collect();
        let fit = Kmeans::new(5).with_seed(11).with_max_iter(1).fit(&data).unwrap();
        assert_eq!(fit.iterations, 1);
        assert!(!fit.converged);
        assert_eq!(fit.labels.len(), 30);
    }

    #[test]
    fn test_invalid_cluster_count() {
        let data = blobs();
        assert!(matches!(
            Kmeans::new(0).fit(&data),
            Err(Error::InvalidClusterCount { requested: 0, .. })
        ));
        assert!(matches!(
            Kmeans::new(7).fit(&data),
            Err(Error::InvalidClusterCount {
                requested: 7,
                n_items: 6
            })
        ));
    }

    #[test]
    fn test_invalid_input() {
        let empty: Vec<Vec<f64>> = vec![];
        assert!(matches!(Kmeans::new(1).fit(&empty), Err(Error::EmptyInput)));

        let ragged = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            Kmeans::new(1).fit(&ragged),
            Err(Error::DimensionMismatch { .. })
        ));

        assert!(matches!(
            Kmeans::new(2).with_max_iter(0).fit(&blobs()),
            Err(Error::InvalidParameter { name: "max_iter", .. })
        ));
    }

    #[test]
    fn test_n_clusters() {
        assert_eq!(Kmeans::new(3).n_clusters(), 3);
    }
}
