// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topological sorting of graphs with Kahn's algorithm.
//!
//! Nodes are emitted in rounds: the first round holds all sources, every following round the
//! nodes whose last incoming edge was removed while emitting the previous round. A node is thus
//! always placed after every node it depends on, and all nodes of one round are placed before
//! any node of the next one.
//!
//! Which of several ready nodes comes first is decided by a [`TieBreak`]. The chosen order is
//! deterministic, but callers should only rely on the partial order given by the edges.
use std::fmt::Debug;

use tracing::trace;

use crate::builder::{self, Adjacency};
use crate::edge::Edge;
use crate::error::DagError;
use crate::graph::Dag;
use crate::views::Degrees;

/// Order in which nodes without a dependency between them are placed during sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Nodes seen first while building the graph come first.
    #[default]
    Insertion,

    /// Smaller nodes come first.
    Ordered,
}

impl TieBreak {
    fn arrange<N: Ord>(&self, round: &mut [usize], nodes: &[N]) {
        match self {
            TieBreak::Insertion => round.sort_unstable(),
            TieBreak::Ordered => round.sort_unstable_by(|a, b| nodes[*a].cmp(&nodes[*b])),
        }
    }
}

/// Runs Kahn's algorithm on an acyclic adjacency structure and returns the node positions
/// grouped by round.
fn kahn_rounds<N: Ord + Debug>(adjacency: &Adjacency<N>, tie_break: TieBreak) -> Vec<Vec<usize>> {
    let mut in_degree = Degrees::new(adjacency).incoming;
    let mut rounds = Vec::new();

    let mut round: Vec<usize> = (0..adjacency.nodes.len())
        .filter(|&position| in_degree[position] == 0)
        .collect();

    while !round.is_empty() {
        tie_break.arrange(&mut round, &adjacency.nodes);
        let mut next = Vec::new();

        for &node in &round {
            trace!(node = ?adjacency.nodes[node], round = rounds.len(), "sorted");

            for &edge in &adjacency.outgoing[node] {
                let target = adjacency.endpoints[edge].1;
                in_degree[target] -= 1;
                if in_degree[target] == 0 {
                    next.push(target);
                }
            }
        }

        rounds.push(std::mem::replace(&mut round, next));
    }

    debug_assert_eq!(
        rounds.iter().map(Vec::len).sum::<usize>(),
        adjacency.nodes.len(),
        "every node of an acyclic graph gets sorted"
    );

    rounds
}

impl<N, P> Dag<N, P>
where
    N: Ord + Clone + Debug,
{
    /// Returns all nodes ordered such that every edge points from an earlier to a later node.
    ///
    /// Nodes without a path between them are placed in order of first appearance, see
    /// [`TieBreak::Insertion`].
    pub fn topological_sort(&self) -> Vec<&N> {
        self.topological_sort_by(TieBreak::default())
    }

    /// Returns all nodes in topological order, placing independent nodes according to the
    /// given tie-break.
    pub fn topological_sort_by(&self, tie_break: TieBreak) -> Vec<&N> {
        self.layers_by(tie_break).into_iter().flatten().collect()
    }

    /// Returns the nodes grouped by their distance to the furthest source they can be reached
    /// from.
    ///
    /// The first layer holds all sources. Every edge points to a later layer.
    pub fn layers(&self) -> Vec<Vec<&N>> {
        self.layers_by(TieBreak::default())
    }

    /// Returns the nodes grouped in layers, ordering every layer according to the given
    /// tie-break.
    pub fn layers_by(&self, tie_break: TieBreak) -> Vec<Vec<&N>> {
        kahn_rounds(&self.adjacency, tie_break)
            .into_iter()
            .map(|round| {
                round
                    .into_iter()
                    .map(|position| &self.adjacency.nodes[position])
                    .collect()
            })
            .collect()
    }
}

/// Sorts the endpoints of the given edges topologically without keeping a graph around.
///
/// Fails with [`DagError::CycleDetected`] if the edges contain a directed cycle.
pub fn topological_sort<N, P>(
    edges: impl IntoIterator<Item = Edge<N, P>>,
) -> Result<Vec<N>, DagError<N>>
where
    N: Ord + Clone + Debug,
{
    let edges: Vec<Edge<N, P>> = edges.into_iter().collect();
    let mut adjacency = builder::build([], &edges)?;

    let order = kahn_rounds(&adjacency, TieBreak::default());
    let mut nodes: Vec<Option<N>> = std::mem::take(&mut adjacency.nodes)
        .into_iter()
        .map(Some)
        .collect();

    Ok(order
        .into_iter()
        .flatten()
        .filter_map(|position| nodes[position].take())
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::edge::Edge;
    use crate::error::DagError;
    use crate::graph::Dag;
    use crate::test_utils::assert_topological_order;

    use super::{TieBreak, topological_sort};

    #[test]
    fn single_node() {
        let dag: Dag<char> = Dag::from_nodes(['a']);
        assert_eq!(dag.topological_sort(), [&'a']);
    }

    #[test]
    fn single_edge() {
        let dag = Dag::from_untyped_edges([('a', 'b')]).unwrap();
        assert_eq!(dag.topological_sort(), [&'a', &'b']);
    }

    #[test]
    fn edges_win_over_insertion_order() {
        let nodes = ['d', 'c', 'b', 'a'];
        let edges = [
            Edge::untyped('a', 'b'),
            Edge::untyped('b', 'c'),
            Edge::untyped('c', 'd'),
        ];
        let dag = Dag::from_nodes_and_edges(nodes, edges).unwrap();

        assert_eq!(dag.topological_sort(), [&'a', &'b', &'c', &'d']);
    }

    #[test]
    fn three_layers() {
        //  /--[B]--\
        // [A]------>[C]
        //  \--[D]-->[E]
        let edges = [('a', 'b'), ('a', 'c'), ('a', 'd'), ('b', 'c'), ('d', 'e')];
        let dag = Dag::from_untyped_edges(edges).unwrap();

        assert_eq!(
            dag.layers(),
            vec![vec![&'a'], vec![&'b', &'d'], vec![&'c', &'e']]
        );
        assert_eq!(dag.topological_sort(), [&'a', &'b', &'d', &'c', &'e']);
        assert_topological_order(&dag, &dag.topological_sort());
    }

    #[test]
    fn tie_breaks() {
        let nodes = ['z', 'y'];
        let edges = [
            Edge::untyped('c', 'x'),
            Edge::untyped('a', 'x'),
            Edge::untyped('b', 'x'),
        ];
        let dag = Dag::from_nodes_and_edges(nodes, edges).unwrap();

        assert_eq!(
            dag.topological_sort_by(TieBreak::Insertion),
            [&'z', &'y', &'c', &'a', &'b', &'x']
        );
        assert_eq!(
            dag.topological_sort_by(TieBreak::Ordered),
            [&'a', &'b', &'c', &'y', &'z', &'x']
        );
        assert_topological_order(&dag, &dag.topological_sort_by(TieBreak::Ordered));
    }

    #[test]
    fn parallel_edges_are_counted_once_each() {
        let edges = [('a', 'b'), ('a', 'b'), ('b', 'c')];
        let dag = Dag::from_untyped_edges(edges).unwrap();
        assert_eq!(dag.topological_sort(), [&'a', &'b', &'c']);
    }

    #[test]
    fn sorting_is_repeatable() {
        let dag = Dag::from_untyped_edges([(3, 1), (2, 1), (1, 0)]).unwrap();
        assert_eq!(dag.topological_sort(), dag.topological_sort());
    }

    #[test]
    fn sort_edges_directly() {
        let edges = [
            Edge::new("wake up", "make coffee", 5),
            Edge::new("make coffee", "drink coffee", 1),
            Edge::new("wake up", "stroke cat", 2),
        ];
        let sorted = topological_sort(edges).unwrap();
        assert_eq!(
            sorted,
            ["wake up", "make coffee", "stroke cat", "drink coffee"]
        );

        let edges = [Edge::untyped(1, 2), Edge::untyped(2, 1)];
        assert_eq!(
            topological_sort(edges),
            Err(DagError::CycleDetected {
                path: vec![1, 2, 1]
            })
        );
    }
}
