use thiserror::Error;

/// Custom error type for Dsatur
///
/// This error type is used to wrap all possible errors that can occur when using Dsatur
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsaturError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),
    #[error("Error: {0}")]
    Other(String),
}

/// Possible errors that can occur when validating a graph
///
/// Vertex identifiers are stored using their `Debug` representation so that the error type
/// does not depend on the vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {vertex} lists itself as a neighbour")]
    SelfLoop { vertex: String },
    #[error("Vertex {vertex} lists neighbour {neighbor} which is not in the vertex set")]
    UnknownNeighbor { vertex: String, neighbor: String },
    #[error("Vertex {vertex} lists neighbour {neighbor} but {neighbor} does not list {vertex}")]
    AsymmetricAdjacency { vertex: String, neighbor: String },
}

#[macro_export]
macro_rules! graph_error {
    ($variant:ident, $($field:ident = $value:expr),+ $(,)?) => {
        DsaturError::from(GraphError::$variant {
            $($field: format!("{:?}", $value)),+
        })
    };
}

#[macro_export]
macro_rules! other_error {
    ($msg:expr) => {
        DsaturError::Other($msg.to_string())
    };
}
