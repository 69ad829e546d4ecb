//! Two-community split of Zachary's karate club.
//!
//! ```text
//! cargo run --example karate [path/to/edges.csv]
//! ```

use cleft::graph::load_adjacency;
use cleft::spectral::{SpectralClustering, SpectralConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/karate.csv").to_string());

    let adjacency = load_adjacency(&path)?;
    log::info!(
        "loaded {}: {} vertices, {} edges",
        path,
        adjacency.dim(),
        adjacency.edge_count()
    );

    let model = SpectralClustering::new(SpectralConfig {
        n_clusters: 2,
        embedding_dim: 2,
        max_iter: 10,
        ..Default::default()
    });
    let fit = model.run(&adjacency)?;

    log::info!("labels: {:?}", fit.labels);
    for community in 0..model.config().n_clusters {
        let members: Vec<usize> = fit
            .labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == community)
            .map(|(v, _)| v + 1)
            .collect();
        println!("community {community}: {members:?}");
    }
    Ok(())
}
