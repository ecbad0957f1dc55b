// SPDX-License-Identifier: MIT OR Apache-2.0

//! Views derived from the structure of a built graph: sources, sinks and adjacency lookups.
use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::builder::Adjacency;
use crate::graph::Dag;

/// In- and out-degree of every node, counted in a single pass over all edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Degrees {
    pub incoming: Vec<usize>,
    pub outgoing: Vec<usize>,
}

impl Degrees {
    pub fn new<N>(adjacency: &Adjacency<N>) -> Self {
        let mut degrees = Self {
            incoming: vec![0; adjacency.nodes.len()],
            outgoing: vec![0; adjacency.nodes.len()],
        };

        for &(source, target) in &adjacency.endpoints {
            degrees.outgoing[source] += 1;
            degrees.incoming[target] += 1;
        }

        degrees
    }
}

impl<N, P> Dag<N, P>
where
    N: Ord + Clone + Debug,
{
    /// Returns all nodes without incoming edges.
    ///
    /// In a graph without edges every node is a source.
    pub fn sources(&self) -> Vec<&N> {
        let degrees = Degrees::new(&self.adjacency);
        self.filter_nodes(|position| degrees.incoming[position] == 0)
    }

    /// Returns all nodes without outgoing edges.
    ///
    /// In a graph without edges every node is a sink.
    pub fn sinks(&self) -> Vec<&N> {
        let degrees = Degrees::new(&self.adjacency);
        self.filter_nodes(|position| degrees.outgoing[position] == 0)
    }

    /// Number of edges pointing to the node, `None` if the node is not part of the graph.
    pub fn in_degree(&self, node: &N) -> Option<usize> {
        self.adjacency
            .position(node)
            .map(|position| self.adjacency.incoming[position].len())
    }

    /// Number of edges starting at the node, `None` if the node is not part of the graph.
    pub fn out_degree(&self, node: &N) -> Option<usize> {
        self.adjacency
            .position(node)
            .map(|position| self.adjacency.outgoing[position].len())
    }

    /// Returns the nodes the given node has an edge to, each listed once.
    pub fn successors(&self, node: &N) -> Vec<&N> {
        let Some(position) = self.adjacency.position(node) else {
            return Vec::new();
        };

        self.neighbours(&self.adjacency.outgoing[position], |(_, target)| target)
    }

    /// Returns the nodes having an edge to the given node, each listed once.
    pub fn predecessors(&self, node: &N) -> Vec<&N> {
        let Some(position) = self.adjacency.position(node) else {
            return Vec::new();
        };

        self.neighbours(&self.adjacency.incoming[position], |(source, _)| source)
    }

    /// Returns the payloads of all edges pointing from `source` to `target`, in the order the
    /// edges were given.
    pub fn edges_between(&self, source: &N, target: &N) -> Vec<&P> {
        let source = self.adjacency.position(source);
        let target = self.adjacency.position(target);
        let (Some(source), Some(target)) = (source, target) else {
            return Vec::new();
        };

        self.adjacency.outgoing[source]
            .iter()
            .filter(|&&edge| self.adjacency.endpoints[edge].1 == target)
            .map(|&edge| self.edges()[edge].payload())
            .collect()
    }

    /// Returns true if `to` can be reached from `from` by following edges.
    ///
    /// Every node of the graph reaches itself.
    pub fn has_path(&self, from: &N, to: &N) -> bool {
        let from = self.adjacency.position(from);
        let to = self.adjacency.position(to);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };

        let mut visited = vec![false; self.len()];
        let mut stack = vec![from];
        visited[from] = true;

        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }

            for &edge in &self.adjacency.outgoing[node] {
                let target = self.adjacency.endpoints[edge].1;
                if !visited[target] {
                    visited[target] = true;
                    stack.push(target);
                }
            }
        }

        false
    }

    fn filter_nodes(&self, predicate: impl Fn(usize) -> bool) -> Vec<&N> {
        self.nodes()
            .iter()
            .enumerate()
            .filter(|(position, _)| predicate(*position))
            .map(|(_, node)| node)
            .collect()
    }

    fn neighbours(&self, edges: &[usize], endpoint: impl Fn((usize, usize)) -> usize) -> Vec<&N> {
        let mut seen = BTreeSet::new();
        edges
            .iter()
            .map(|&edge| endpoint(self.adjacency.endpoints[edge]))
            .filter(|&position| seen.insert(position))
            .map(|position| &self.adjacency.nodes[position])
            .collect()
    }
}
