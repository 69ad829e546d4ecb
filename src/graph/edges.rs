//! Edge-list loading.
//!
//! The on-disk format is a headerless CSV with one edge per line and two
//! 1-based integer vertex ids per record:
//!
//! ```text
//! 1,2
//! 1,3
//! 2,3
//! ```
//!
//! Any unreadable source or malformed record fails the whole load; nothing is
//! returned from partially read input.

use super::adjacency::{Adjacency, Edge};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read edges from any CSV source.
pub fn read_edges<R: Read>(reader: R) -> Result<Vec<Edge>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 2 {
            return Err(Error::MalformedRecord {
                line,
                message: format!("expected 2 fields, found {}", record.len()),
            });
        }
        let a = parse_vertex(&record[0], line)?;
        let b = parse_vertex(&record[1], line)?;
        edges.push(Edge::new(a, b));
    }
    log::debug!("read {} edges", edges.len());
    Ok(edges)
}

/// Read edges from a CSV file.
pub fn load_edges(path: impl AsRef<Path>) -> Result<Vec<Edge>> {
    let file = File::open(path.as_ref())?;
    read_edges(file)
}

/// Read a CSV edge file and build its adjacency.
pub fn load_adjacency(path: impl AsRef<Path>) -> Result<Adjacency> {
    let edges = load_edges(path)?;
    Adjacency::from_edges(&edges)
}

fn parse_vertex(field: &str, line: u64) -> Result<usize> {
    field.parse::<usize>().map_err(|e| Error::MalformedRecord {
        line,
        message: format!("vertex id {field:?}: {e}"),
    })
}
