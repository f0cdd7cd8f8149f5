use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Dsatur;

/// Rule used to pick between uncoloured vertices with equal saturation and equal degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Prefer the vertex with the smallest identifier.
    #[default]
    SmallestVertex,
    /// Prefer the vertex with the largest identifier.
    LargestVertex,
}

impl TieBreak {
    /// Order two node indices so that the preferred one compares greater.
    pub(crate) fn prefer(self, a: usize, b: usize) -> Ordering {
        match self {
            TieBreak::SmallestVertex => b.cmp(&a),
            TieBreak::LargestVertex => a.cmp(&b),
        }
    }
}

/// Builder for the DSATUR colourer. Use methods to set options and then call [DsaturBuilder::build] when done.
///
/// The options are plain data and can be (de)serialized, so they can be read from an application's
/// own configuration.
///
/// # Example
///
/// ```rust
/// use dsatur::{DsaturBuilder, Graph, TieBreak};
///
/// let colorer = DsaturBuilder::new()
///     .tie_break(TieBreak::LargestVertex)
///     .build();
/// let graph = Graph::from_edges([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4)]).unwrap();
/// let coloring = colorer.run(&graph);
/// assert_eq!(coloring.num_colors(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsaturBuilder {
    tie_break: TieBreak,
}

impl DsaturBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule used to break ties between equally saturated vertices of equal degree.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn build(self) -> Dsatur {
        Dsatur::from_options(self.tie_break)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{DsaturBuilder, TieBreak};

    #[test]
    fn prefer() {
        assert_eq!(TieBreak::SmallestVertex.prefer(1, 2), Ordering::Greater);
        assert_eq!(TieBreak::LargestVertex.prefer(1, 2), Ordering::Less);
        assert_eq!(TieBreak::LargestVertex.prefer(3, 3), Ordering::Equal);
    }

    #[test]
    fn builder_defaults() {
        let colorer = DsaturBuilder::new().build();
        assert_eq!(colorer.tie_break(), TieBreak::SmallestVertex);
        let colorer = DsaturBuilder::new()
            .tie_break(TieBreak::LargestVertex)
            .build();
        assert_eq!(colorer.tie_break(), TieBreak::LargestVertex);
    }

    #[test]
    fn options_serialize() {
        let builder = DsaturBuilder::new().tie_break(TieBreak::LargestVertex);
        insta::assert_yaml_snapshot!(builder, @"tie_break: LargestVertex");
    }
}
