use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{builder::TieBreak, coloring::Color, Coloring, DsaturBuilder, DsaturError, Graph};

const UNCOLORED: Color = 0;

/// Per-run bookkeeping, indexed by node index.
struct ColoringState {
    color: Vec<Color>,
    degree: Vec<usize>,
    saturation: Vec<usize>,
    uncolored: BTreeSet<usize>,
    // scratch space for counting distinct neighbour colours, `used[c]` for colour `c`
    used: Vec<bool>,
}

impl ColoringState {
    fn new<V>(graph: &UnGraph<V, ()>) -> Self {
        let n = graph.node_count();
        Self {
            color: vec![UNCOLORED; n],
            degree: graph
                .node_indices()
                .map(|i| graph.neighbors(i).count())
                .collect(),
            saturation: vec![0; n],
            uncolored: (0..n).collect(),
            used: vec![false; n + 2],
        }
    }

    /// The highest-degree vertex, used to start the colouring.
    fn select_seed(&self, tie_break: TieBreak) -> Option<usize> {
        self.uncolored.iter().copied().max_by(|&a, &b| {
            self.degree[a]
                .cmp(&self.degree[b])
                .then_with(|| tie_break.prefer(a, b))
        })
    }

    /// The uncoloured vertex maximising `(saturation, degree)`.
    fn select(&self, tie_break: TieBreak) -> Option<usize> {
        self.uncolored.iter().copied().max_by(|&a, &b| {
            (self.saturation[a], self.degree[a])
                .cmp(&(self.saturation[b], self.degree[b]))
                .then_with(|| tie_break.prefer(a, b))
        })
    }

    /// Mark the colours of the coloured neighbours of `i` in `used`, returning how many are distinct.
    fn mark_neighbor_colors<V>(&mut self, graph: &UnGraph<V, ()>, i: usize) -> usize {
        let mut distinct = 0;
        for j in graph.neighbors(NodeIndex::new(i)) {
            let c = self.color[j.index()];
            if c != UNCOLORED && !self.used[c] {
                self.used[c] = true;
                distinct += 1;
            }
        }
        distinct
    }

    fn clear_neighbor_colors<V>(&mut self, graph: &UnGraph<V, ()>, i: usize) {
        for j in graph.neighbors(NodeIndex::new(i)) {
            self.used[self.color[j.index()]] = false;
        }
    }

    fn assign(&mut self, i: usize, c: Color) {
        self.color[i] = c;
        self.uncolored.remove(&i);
    }

    /// Smallest colour not used by a coloured neighbour of `i`.
    fn lowest_free_color<V>(&mut self, graph: &UnGraph<V, ()>, i: usize) -> Color {
        self.mark_neighbor_colors(graph, i);
        let c = (1..self.used.len())
            .find(|&c| !self.used[c])
            .unwrap_or(self.used.len());
        self.clear_neighbor_colors(graph, i);
        c
    }

    /// Recount the saturation of every uncoloured neighbour of the newly coloured vertex `i`.
    fn propagate<V>(&mut self, graph: &UnGraph<V, ()>, i: usize) {
        let neighbors = graph
            .neighbors(NodeIndex::new(i))
            .map(|j| j.index())
            .filter(|j| self.uncolored.contains(j))
            .collect::<Vec<_>>();
        for j in neighbors {
            self.saturation[j] = self.mark_neighbor_colors(graph, j);
            self.clear_neighbor_colors(graph, j);
        }
    }
}

/// The DSATUR (degree of saturation) colourer.
///
/// Starting from the vertex of highest degree, it repeatedly colours the uncoloured vertex with
/// the most distinct colours among its neighbours (its saturation), breaking ties by degree and then
/// by the configured [TieBreak]. Each vertex gets the lowest colour not used by its neighbours.
///
/// A run is a pure function of the graph and the tie-break rule, so independent runs can be
/// executed concurrently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dsatur {
    tie_break: TieBreak,
}

impl Dsatur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> DsaturBuilder {
        DsaturBuilder::new()
    }

    pub(crate) fn from_options(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Colour `graph`. Every vertex receives a colour and no two adjacent vertices share one.
    pub fn run<V: Ord + Clone + Debug>(&self, graph: &Graph<V>) -> Coloring<V> {
        let inner = graph.as_petgraph();
        log::debug!(
            "dsatur: colouring {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        let mut state = ColoringState::new(inner);

        if let Some(seed) = state.select_seed(self.tie_break) {
            log::trace!(
                "dsatur: seed {:?} (degree {})",
                graph.vertex(NodeIndex::new(seed)),
                state.degree[seed]
            );
            state.assign(seed, 1);
            state.propagate(inner, seed);
        }

        while let Some(i) = state.select(self.tie_break) {
            let c = state.lowest_free_color(inner, i);
            log::trace!(
                "dsatur: {:?} -> {} (saturation {}, degree {})",
                graph.vertex(NodeIndex::new(i)),
                c,
                state.saturation[i],
                state.degree[i]
            );
            state.assign(i, c);
            state.propagate(inner, i);
        }

        let colors = inner
            .node_indices()
            .map(|i| (graph.vertex(i).clone(), state.color[i.index()]))
            .collect::<BTreeMap<_, _>>();
        let coloring = Coloring::new(colors);
        log::debug!("dsatur: used {} colours", coloring.num_colors());
        coloring
    }
}

/// Colour a validated graph with the default [Dsatur] options.
pub fn color_graph_dsatur<V: Ord + Clone + Debug>(graph: &Graph<V>) -> Coloring<V> {
    Dsatur::new().run(graph)
}

/// Validate a raw adjacency map and colour it with the default [Dsatur] options.
///
/// Returns [crate::error::GraphError] wrapped in [DsaturError::InvalidGraph] if the adjacency is
/// asymmetric, has a self-loop or refers to a vertex that is not a key. An empty map gives an
/// empty colouring.
///
/// # Example
///
/// ```rust
/// use std::collections::{BTreeMap, BTreeSet};
///
/// let star = BTreeMap::from([
///     (1, BTreeSet::from([2, 3, 4, 5])),
///     (2, BTreeSet::from([1])),
///     (3, BTreeSet::from([1])),
///     (4, BTreeSet::from([1])),
///     (5, BTreeSet::from([1])),
/// ]);
/// let coloring = dsatur::dsatur(star).unwrap();
/// assert_eq!(coloring.get(&1), Some(1));
/// assert!((2..=5).all(|leaf| coloring.get(&leaf) == Some(2)));
/// ```
pub fn dsatur<V: Ord + Clone + Debug>(
    adjacency: BTreeMap<V, BTreeSet<V>>,
) -> Result<Coloring<V>, DsaturError> {
    let graph = Graph::new(adjacency)?;
    Ok(color_graph_dsatur(&graph))
}
