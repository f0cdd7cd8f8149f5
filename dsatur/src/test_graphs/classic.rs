use super::TestGraph;

pub fn empty() -> TestGraph {
    TestGraph::new(std::iter::empty(), vec![], 0)
}

pub fn single_vertex() -> TestGraph {
    TestGraph::new([1], vec![], 1)
}

pub fn triangle() -> TestGraph {
    TestGraph::new(1..=3, vec![(1, 2), (2, 3), (1, 3)], 3)
}

// 1 - 2 - ... - n
pub fn path(n: u32) -> TestGraph {
    let edges = (1..n).map(|i| (i, i + 1)).collect();
    TestGraph::new(1..=n, edges, n.min(2) as usize)
}

// centre 1, leaves 2..=leaves + 1
pub fn star(leaves: u32) -> TestGraph {
    let edges = (2..=leaves + 1).map(|i| (1, i)).collect();
    TestGraph::new(1..=leaves + 1, edges, if leaves == 0 { 1 } else { 2 })
}

pub fn cycle(n: u32) -> TestGraph {
    assert!(n >= 3, "a cycle needs at least 3 vertices");
    let edges = (1..=n).map(|i| (i, i % n + 1)).collect();
    TestGraph::new(1..=n, edges, if n % 2 == 0 { 2 } else { 3 })
}

pub fn complete(n: u32) -> TestGraph {
    let edges = (1..=n)
        .flat_map(|i| (i + 1..=n).map(move |j| (i, j)))
        .collect();
    TestGraph::new(1..=n, edges, n as usize)
}

// hub 0 joined to every vertex of the rim cycle 1..=n
pub fn wheel(n: u32) -> TestGraph {
    assert!(n >= 3, "the rim of a wheel needs at least 3 vertices");
    let mut edges = (1..=n).map(|i| (i, i % n + 1)).collect::<Vec<_>>();
    edges.extend((1..=n).map(|i| (0, i)));
    TestGraph::new(0..=n, edges, if n % 2 == 0 { 3 } else { 4 })
}

// outer 5-cycle 0..5, inner pentagram 5..10, spokes i - i + 5
pub fn petersen() -> TestGraph {
    let mut edges = Vec::with_capacity(15);
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((i + 5, (i + 2) % 5 + 5));
    }
    TestGraph::new(0..10, edges, 3)
}

#[cfg(test)]
mod tests {
    use super::{complete, cycle, path, petersen, star, wheel};

    #[test]
    fn sizes() {
        assert_eq!(path(4).graph.edge_count(), 3);
        assert_eq!(path(1).chromatic_number, Some(1));
        assert_eq!(star(4).graph.vertex_count(), 5);
        assert_eq!(cycle(7).graph.edge_count(), 7);
        assert_eq!(complete(6).graph.edge_count(), 15);
        assert_eq!(wheel(5).graph.degree(&0), Some(5));
        let petersen = petersen();
        assert_eq!(petersen.graph.edge_count(), 15);
        assert!(petersen.graph.vertices().all(|v| petersen.graph.degree(v) == Some(3)));
    }
}
