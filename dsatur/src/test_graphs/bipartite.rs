use super::TestGraph;

// left side 0..a, right side a..a + b
pub fn complete_bipartite(a: u32, b: u32) -> TestGraph {
    let edges = (0..a)
        .flat_map(|i| (a..a + b).map(move |j| (i, j)))
        .collect();
    let chi = match (a, b) {
        (0, 0) => 0,
        (0, _) | (_, 0) => 1,
        _ => 2,
    };
    TestGraph::new(0..a + b, edges, chi)
}

// vertex (r, c) is r * cols + c
pub fn grid(rows: u32, cols: u32) -> TestGraph {
    let id = |r: u32, c: u32| r * cols + c;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                edges.push((id(r, c), id(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((id(r, c), id(r + 1, c)));
            }
        }
    }
    let chi = match rows * cols {
        0 => 0,
        1 => 1,
        _ => 2,
    };
    TestGraph::new(0..rows * cols, edges, chi)
}

/// The crown graph: `K_{n,n}` with a perfect matching removed. Vertex `i` on the left is joined
/// to every `n + j` on the right except `n + i`.
///
/// Greedy colouring in the order `0, n, 1, n + 1, ...` uses `n` colours here, DSATUR uses 2.
pub fn crown(n: u32) -> TestGraph {
    let edges = (0..n)
        .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, n + j)))
        .collect();
    let chi = match n {
        0 => 0,
        1 => 1,
        _ => 2,
    };
    TestGraph::new(0..2 * n, edges, chi)
}
