use cleft::cluster::{Clustering, Kmeans, KmeansInit};
use cleft::graph::{Adjacency, Edge, Laplacian, LaplacianKind};
use proptest::prelude::*;

fn edge_list() -> impl Strategy<Value = Vec<Edge>> {
    prop::collection::vec((1usize..20, 1usize..20), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(Edge::from)
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_adjacency_symmetric(edges in edge_list()) {
        let a = Adjacency::from_edges(&edges).unwrap();
        let expected_dim = edges.iter().map(|e| e.a.max(e.b)).max().unwrap_or(0).max(2);
        prop_assert_eq!(a.dim(), expected_dim);

        for i in 0..a.dim() {
            prop_assert_eq!(a.get(i, i), 0.0);
            for j in 0..a.dim() {
                prop_assert_eq!(a.get(i, j), a.get(j, i));
            }
        }
        for e in &edges {
            prop_assert_eq!(a.get(e.a - 1, e.b - 1), 1.0);
        }
    }

    #[test]
    fn prop_edge_order_irrelevant(edges in edge_list()) {
        let mut reversed: Vec<Edge> = edges.iter().rev().map(|e| Edge::new(e.b, e.a)).collect();
        reversed.extend_from_slice(&edges);
        prop_assert_eq!(
            Adjacency::from_edges(&edges).unwrap(),
            Adjacency::from_edges(&reversed).unwrap()
        );
    }

    #[test]
    fn prop_laplacian_row_sums_zero(edges in edge_list()) {
        let a = Adjacency::from_edges(&edges).unwrap();
        let l = Laplacian::build(&a, LaplacianKind::Combinatorial);
        for i in 0..a.dim() {
            prop_assert_eq!(l.matrix().row(i).sum(), 0.0);
            prop_assert_eq!(l.matrix()[(i, i)], a.degrees().get(i));
        }
    }

    #[test]
    fn prop_kmeans_all_assigned(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..20),
        k in 1usize..5,
        sorted in any::<bool>(),
    ) {
        // Skip if k > n
        if k <= data.len() {
            let init = if sorted { KmeansInit::SortedPartition } else { KmeansInit::KmeansPlusPlus };
            let model = Kmeans::new(k).with_seed(42).with_init(init);
            let labels = model.fit_predict(&data).unwrap();

            prop_assert_eq!(labels.len(), data.len());
            for &l in &labels {
                prop_assert!(l < k);
            }
        }
    }
}
