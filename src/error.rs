use thiserror::Error;

/// Errors returned by the spectral clustering pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The edge source could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the edge source.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// An edge record is not a pair of positive integers.
    #[error("malformed edge record at line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number of the record.
        line: u64,
        /// Human-readable explanation.
        message: String,
    },

    /// Vertex ids are 1-based; 0 is not a vertex.
    #[error("invalid vertex id {vertex}: ids are 1-based")]
    InvalidVertex {
        /// Offending vertex id.
        vertex: usize,
    },

    /// An edge connects a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// 1-based vertex id.
        vertex: usize,
    },

    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Requested embedding width is incompatible with the graph size.
    #[error("invalid embedding width: requested {requested}, but graph has {n_vertices} vertices")]
    InvalidEmbeddingWidth {
        /// Requested number of eigenvectors.
        requested: usize,
        /// Number of vertices in the graph.
        n_vertices: usize,
    },

    /// A matrix handed to the eigensolver has no rows.
    #[error("matrix has no rows")]
    EmptyMatrix,

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A matrix handed to the eigensolver is not symmetric.
    #[error("matrix is not symmetric at ({row}, {col})")]
    NotSymmetric {
        /// Row of the first asymmetric entry.
        row: usize,
        /// Column of the first asymmetric entry.
        col: usize,
    },

    /// A matrix or data point contains NaN or infinity.
    #[error("non-finite value at ({row}, {col})")]
    NonFiniteEntry {
        /// Row of the first non-finite entry.
        row: usize,
        /// Column of the first non-finite entry.
        col: usize,
    },

    /// The eigensolver did not converge.
    #[error("eigendecomposition failed: {0}")]
    Decomposition(String),
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreadable or malformed edge source.
    Input,
    /// Embedding width or cluster count incompatible with the graph size.
    Dimension,
    /// The eigensolver could not run on the given matrix.
    Decomposition,
    /// Other invalid configuration.
    Parameter,
}

impl Error {
    /// Which stage of the taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_)
            | Error::Csv(_)
            | Error::MalformedRecord { .. }
            | Error::InvalidVertex { .. }
            | Error::SelfLoop { .. }
            | Error::EmptyInput => ErrorKind::Input,
            Error::InvalidClusterCount { .. }
            | Error::InvalidEmbeddingWidth { .. }
            | Error::EmptyMatrix
            | Error::DimensionMismatch { .. } => ErrorKind::Dimension,
            Error::NotSymmetric { .. }
            | Error::NonFiniteEntry { .. }
            | Error::Decomposition(_) => ErrorKind::Decomposition,
            Error::InvalidParameter { .. } => ErrorKind::Parameter,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
