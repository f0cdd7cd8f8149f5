//! Graphs with known chromatic numbers, used by the tests and benchmarks.

use crate::Graph;

pub mod bipartite;
pub mod classic;

pub use bipartite::{complete_bipartite, crown, grid};
pub use classic::{complete, cycle, empty, path, petersen, single_vertex, star, triangle, wheel};

pub struct TestGraph {
    pub graph: Graph<u32>,
    pub chromatic_number: Option<usize>,
}

impl TestGraph {
    fn new(vertices: impl IntoIterator<Item = u32>, edges: Vec<(u32, u32)>, chi: usize) -> Self {
        let graph = Graph::from_edges(vertices, edges).unwrap();
        Self {
            graph,
            chromatic_number: Some(chi),
        }
    }
}
