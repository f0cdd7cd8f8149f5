use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::ops::Index;

use serde::Serialize;

use crate::Graph;

/// A colour is a positive integer (starting at 1). Colours have no meaning beyond identifying
/// which vertices share a colour class.
pub type Color = usize;

/// A total assignment of colours to the vertices of a graph.
///
/// Serializes as a plain map from vertex to colour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Coloring<V: Ord> {
    colors: BTreeMap<V, Color>,
}

impl<V: Ord> Coloring<V> {
    pub(crate) fn new(colors: BTreeMap<V, Color>) -> Self {
        Self { colors }
    }

    pub fn get(&self, v: &V) -> Option<Color> {
        self.colors.get(v).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over `(vertex, colour)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> + '_ {
        self.colors.iter().map(|(v, c)| (v, *c))
    }

    /// The number of colours used, i.e. the largest colour (0 for an empty colouring).
    pub fn num_colors(&self) -> usize {
        self.colors.values().copied().max().unwrap_or(0)
    }

    /// Group the vertices by colour, entry `i` holds the vertices with colour `i + 1`.
    pub fn color_classes(&self) -> Vec<Vec<&V>> {
        let mut classes = vec![Vec::new(); self.num_colors()];
        for (v, c) in self.colors.iter() {
            classes[*c - 1].push(v);
        }
        classes
    }

    /// Returns true if no edge of `graph` joins two vertices of the same colour.
    pub fn is_proper(&self, graph: &Graph<V>) -> bool {
        graph
            .edges()
            .into_iter()
            .all(|(u, v)| match (self.get(u), self.get(v)) {
                (Some(cu), Some(cv)) => cu != cv,
                _ => false,
            })
    }

    /// Returns true if exactly the vertices of `graph` are coloured.
    pub fn is_total(&self, graph: &Graph<V>) -> bool {
        self.len() == graph.vertex_count() && graph.vertices().all(|v| self.colors.contains_key(v))
    }

    /// Look up the display value for `v` in a cyclic palette, `palette[(color - 1) % palette.len()]`.
    ///
    /// Returns `None` if `v` is not coloured or the palette is empty.
    pub fn display_color<'a, T>(&self, v: &V, palette: &'a [T]) -> Option<&'a T> {
        if palette.is_empty() {
            return None;
        }
        let c = self.get(v)?;
        palette.get((c - 1) % palette.len())
    }

    pub fn into_map(self) -> BTreeMap<V, Color> {
        self.colors
    }
}

impl<V: Ord> Index<&V> for Coloring<V> {
    type Output = Color;

    fn index(&self, v: &V) -> &Self::Output {
        &self.colors[v]
    }
}

impl<V: Ord + Display> Display for Coloring<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, c) in self.colors.iter() {
            writeln!(f, "{} -> {}", v, c)?;
        }
        Ok(())
    }
}
