use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::{DsaturError, GraphError};
use crate::graph_error;

/// A finite simple undirected graph whose invariants have been checked.
///
/// The adjacency is symmetric, loop-free and every neighbour is itself a vertex. These are checked
/// once, when the graph is built, so a [Graph] can be coloured without any further validation.
///
/// Internally the vertices are stored in a [petgraph] graph, inserted in ascending order of their
/// identifiers so that the order of the [NodeIndex] values matches the order of the identifiers.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    inner: UnGraph<V, ()>,
    index: BTreeMap<V, NodeIndex>,
}

impl<V: Ord + Clone + Debug> Graph<V> {
    /// Validate an adjacency map and build a graph from it.
    ///
    /// Returns [GraphError::SelfLoop] if a vertex lists itself, [GraphError::UnknownNeighbor] if a
    /// vertex lists a neighbour that is not a key of `adjacency`, and
    /// [GraphError::AsymmetricAdjacency] if `u` lists `v` but `v` does not list `u`.
    /// Vertices are checked in ascending order and the first violation found is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::{BTreeMap, BTreeSet};
    /// use dsatur::Graph;
    ///
    /// let adjacency = BTreeMap::from([
    ///     (1, BTreeSet::from([2])),
    ///     (2, BTreeSet::from([1])),
    /// ]);
    /// let graph = Graph::new(adjacency).unwrap();
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn new(adjacency: BTreeMap<V, BTreeSet<V>>) -> Result<Self, DsaturError> {
        Self::validate(&adjacency)?;

        let nedges = adjacency.values().map(|n| n.len()).sum::<usize>() / 2;
        let mut inner = UnGraph::with_capacity(adjacency.len(), nedges);
        let mut index = BTreeMap::new();
        for v in adjacency.keys() {
            index.insert(v.clone(), inner.add_node(v.clone()));
        }
        for (v, neighbors) in adjacency.iter() {
            let i = index[v];
            for n in neighbors.range(v..) {
                inner.add_edge(i, index[n], ());
            }
        }
        Ok(Self { inner, index })
    }

    /// Build a graph from any iterable of `(vertex, neighbours)` pairs.
    ///
    /// Repeated neighbours collapse into one edge and a vertex listed more than once has its
    /// neighbour lists merged. The result is validated as in [Graph::new].
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self, DsaturError>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut map: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for (v, neighbors) in adjacency {
            map.entry(v).or_default().extend(neighbors);
        }
        Self::new(map)
    }

    /// Build a graph from one-sided neighbour lists, adding the reverse of every listed edge.
    ///
    /// This is how an interactive builder typically collects a graph: each vertex picks some of
    /// its neighbours and the picks do not need to agree. Self-loops and unknown neighbours are
    /// still rejected.
    pub fn from_directed_lists<I, N>(lists: I) -> Result<Self, DsaturError>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut map: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for (v, neighbors) in lists {
            map.entry(v).or_default().extend(neighbors);
        }
        let reversed = map
            .iter()
            .flat_map(|(v, neighbors)| neighbors.iter().map(move |n| (n.clone(), v.clone())))
            .collect::<Vec<_>>();
        for (n, v) in reversed {
            if let Some(back) = map.get_mut(&n) {
                back.insert(v);
            }
        }
        Self::new(map)
    }

    /// Build a graph from a vertex set and a list of undirected edges.
    ///
    /// Each edge `(u, v)` is recorded in both directions. Both endpoints must be in `vertices`.
    pub fn from_edges<I, E>(vertices: I, edges: E) -> Result<Self, DsaturError>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut map: BTreeMap<V, BTreeSet<V>> =
            vertices.into_iter().map(|v| (v, BTreeSet::new())).collect();
        for (u, v) in edges {
            if u == v {
                return Err(graph_error!(SelfLoop, vertex = u));
            }
            if !map.contains_key(&u) {
                return Err(graph_error!(UnknownNeighbor, vertex = v, neighbor = u));
            }
            if !map.contains_key(&v) {
                return Err(graph_error!(UnknownNeighbor, vertex = u, neighbor = v));
            }
            if let Some(neighbors) = map.get_mut(&u) {
                neighbors.insert(v.clone());
            }
            if let Some(neighbors) = map.get_mut(&v) {
                neighbors.insert(u);
            }
        }
        Self::new(map)
    }

    fn validate(adjacency: &BTreeMap<V, BTreeSet<V>>) -> Result<(), DsaturError> {
        for (v, neighbors) in adjacency.iter() {
            for n in neighbors.iter() {
                if n == v {
                    return Err(graph_error!(SelfLoop, vertex = v));
                }
                match adjacency.get(n) {
                    None => {
                        return Err(graph_error!(UnknownNeighbor, vertex = v, neighbor = n));
                    }
                    Some(back) if !back.contains(v) => {
                        return Err(graph_error!(AsymmetricAdjacency, vertex = v, neighbor = n));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

impl<V: Ord> Graph<V> {
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// The vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.index.keys()
    }

    /// The neighbours of `v` in ascending order, or `None` if `v` is not a vertex.
    pub fn neighbors(&self, v: &V) -> Option<Vec<&V>> {
        let i = self.node_index(v)?;
        let mut neighbors = self
            .inner
            .neighbors(i)
            .map(|n| &self.inner[n])
            .collect::<Vec<_>>();
        neighbors.sort();
        Some(neighbors)
    }

    pub fn degree(&self, v: &V) -> Option<usize> {
        let i = self.node_index(v)?;
        Some(self.inner.neighbors(i).count())
    }

    /// Each undirected edge once, as `(smaller, larger)`, sorted.
    pub fn edges(&self) -> Vec<(&V, &V)> {
        let mut edges = self
            .inner
            .raw_edges()
            .iter()
            .map(|e| {
                let (a, b) = (&self.inner[e.source()], &self.inner[e.target()]);
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect::<Vec<_>>();
        edges.sort();
        edges
    }

    /// Read-only access to the underlying [petgraph] graph, e.g. for use with [petgraph::algo].
    pub fn as_petgraph(&self) -> &UnGraph<V, ()> {
        &self.inner
    }

    pub(crate) fn node_index(&self, v: &V) -> Option<NodeIndex> {
        self.index.get(v).copied()
    }

    pub(crate) fn vertex(&self, i: NodeIndex) -> &V {
        &self.inner[i]
    }
}

impl<V: Ord + Clone + Debug> TryFrom<BTreeMap<V, BTreeSet<V>>> for Graph<V> {
    type Error = DsaturError;

    fn try_from(adjacency: BTreeMap<V, BTreeSet<V>>) -> Result<Self, Self::Error> {
        Self::new(adjacency)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use crate::error::{DsaturError, GraphError};

    use super::Graph;

    fn invalid(err: DsaturError) -> GraphError {
        match err {
            DsaturError::InvalidGraph(e) => e,
            e => panic!("expected an invalid graph error, got {e}"),
        }
    }

    #[test]
    fn build_path() {
        let graph =
            Graph::from_adjacency(vec![(1, vec![2]), (2, vec![1, 3]), (3, vec![2, 4]), (4, vec![3])])
                .unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree(&2), Some(2));
        assert_eq!(graph.degree(&4), Some(1));
        assert_eq!(graph.degree(&5), None);
        assert_eq!(graph.neighbors(&3), Some(vec![&2, &4]));
        assert_eq!(graph.edges(), vec![(&1, &2), (&2, &3), (&3, &4)]);
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = Graph::<u32>::new(BTreeMap::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn isolated_vertices_are_valid() {
        let graph = Graph::from_adjacency(vec![(1, vec![]), (7, vec![])]).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.degree(&7), Some(0));
        assert_eq!(graph.neighbors(&1), Some(vec![]));
    }

    #[test]
    fn unknown_neighbor_is_rejected() {
        let err = Graph::from_adjacency(vec![(1, vec![2]), (2, vec![1, 5])]).unwrap_err();
        assert_eq!(
            invalid(err),
            GraphError::UnknownNeighbor {
                vertex: "2".to_string(),
                neighbor: "5".to_string()
            }
        );
    }

    #[test]
    fn self_loop_is_rejected() {
        let err = Graph::from_adjacency(vec![(1, vec![1, 2]), (2, vec![1])]).unwrap_err();
        assert_eq!(
            invalid(err),
            GraphError::SelfLoop {
                vertex: "1".to_string()
            }
        );
    }

    #[test]
    fn asymmetric_adjacency_is_rejected() {
        let err = Graph::from_adjacency(vec![(1, vec![2]), (2, vec![])]).unwrap_err();
        assert_eq!(
            invalid(err),
            GraphError::AsymmetricAdjacency {
                vertex: "1".to_string(),
                neighbor: "2".to_string()
            }
        );
    }

    #[test]
    fn first_violation_in_vertex_order_is_reported() {
        let err = Graph::from_adjacency(vec![(3, vec![3]), (1, vec![9])]).unwrap_err();
        assert_eq!(
            invalid(err),
            GraphError::UnknownNeighbor {
                vertex: "1".to_string(),
                neighbor: "9".to_string()
            }
        );
    }

    #[test]
    fn duplicate_neighbors_collapse() {
        let graph =
            Graph::from_adjacency(vec![(1, vec![2, 2]), (2, vec![1]), (1, vec![2])]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&1), Some(1));
    }

    #[test]
    fn from_edges_symmetrizes() {
        let graph = Graph::from_edges(["a", "b", "c"], [("a", "b"), ("c", "b"), ("b", "a")]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(&"b"), Some(vec![&"a", &"c"]));
    }

    #[test]
    fn from_edges_rejects_bad_edges() {
        let err = Graph::from_edges([1, 2], [(1, 1)]).unwrap_err();
        assert!(matches!(invalid(err), GraphError::SelfLoop { .. }));
        let err = Graph::from_edges([1, 2], [(1, 3)]).unwrap_err();
        assert_eq!(
            invalid(err),
            GraphError::UnknownNeighbor {
                vertex: "1".to_string(),
                neighbor: "3".to_string()
            }
        );
    }

    #[test]
    fn from_directed_lists_adds_reverse_edges() {
        let graph =
            Graph::from_directed_lists(vec![(1, vec![2, 3]), (2, vec![]), (3, vec![2]), (4, vec![])])
                .unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&2), Some(vec![&1, &3]));
        assert_eq!(graph.degree(&4), Some(0));

        let err = Graph::from_directed_lists(vec![(1, vec![2])]).unwrap_err();
        assert!(matches!(invalid(err), GraphError::UnknownNeighbor { .. }));
    }

    #[test]
    fn try_from_map() {
        let adjacency = BTreeMap::from([(0u8, BTreeSet::from([1u8])), (1, BTreeSet::from([0]))]);
        let graph = Graph::try_from(adjacency).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn node_indices_follow_vertex_order() {
        let graph = Graph::from_edges([30, 10, 20], [(30, 10)]).unwrap();
        let pg = graph.as_petgraph();
        let order = pg.node_indices().map(|i| pg[i]).collect::<Vec<_>>();
        assert_eq!(order, vec![10, 20, 30]);
        assert_eq!(petgraph::algo::connected_components(pg), 2);
    }
}
