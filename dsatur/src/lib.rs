//! # Dsatur
//!
//! Dsatur is a library for colouring the vertices of an undirected graph using the DSATUR (degree of saturation) heuristic,
//! so that no two adjacent vertices share a colour.
//!
//! ## Building a graph
//!
//! Graphs are held in the [Graph] struct, which checks once, at construction, that the adjacency is symmetric, has no self-loops
//! and only refers to vertices in the vertex set. Vertices can be any type that is `Ord + Clone + Debug` (integers, strings, etc.).
//! You can create a graph from a map of neighbour sets ([Graph::new]), from any iterable of `(vertex, neighbours)` pairs ([Graph::from_adjacency]),
//! from a vertex set and a list of edges ([Graph::from_edges]), or from one-sided neighbour lists that are symmetrized for you ([Graph::from_directed_lists]).
//! If the input is malformed these return a [DsaturError::InvalidGraph] describing the first problem found.
//!
//! ## Colouring
//!
//! The colourer is the [Dsatur] struct. Use [Dsatur::new] for the default options, or [Dsatur::builder] (a [DsaturBuilder]) to choose a [TieBreak] rule,
//! then call [Dsatur::run]. The convenience functions [color_graph_dsatur] and [dsatur] colour a [Graph] or a raw adjacency map with the default options.
//!
//! The algorithm seeds the colouring with the vertex of highest degree, then repeatedly picks the uncoloured vertex with the most distinct colours among
//! its neighbours (its saturation), breaking ties by degree and then by the [TieBreak] rule, and gives it the lowest colour not used by its neighbours.
//! DSATUR is a heuristic: it is exact on bipartite graphs, cycles and wheels, but in general may use more colours than the chromatic number.
//!
//! ## Results
//!
//! A [Coloring] maps every vertex to a [Color], a positive integer starting from 1. The colours used are always `1..=k` with no gaps.
//! Colours have no visual meaning, [Coloring::display_color] can be used to look them up in a cyclic palette.
//!
//! ## Logging
//!
//! Dsatur logs through the [log](https://docs.rs/log) facade: a summary of each run at `debug` level and every colouring decision at `trace` level.
//! Install any `log` compatible logger in your application to see them.
//!

pub mod builder;
pub mod coloring;
pub mod dsatur_coloring;
pub mod error;
pub mod graph;
pub mod test_graphs;

pub use builder::{DsaturBuilder, TieBreak};
pub use coloring::{Color, Coloring};
pub use dsatur_coloring::{color_graph_dsatur, dsatur, Dsatur};
pub use error::{DsaturError, GraphError};
pub use graph::Graph;
