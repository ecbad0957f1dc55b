// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Debug;

use crate::builder::{self, Adjacency};
use crate::edge::Edge;
use crate::error::DagError;

/// Immutable directed acyclic graph over nodes of type `N` with edges carrying payloads of type
/// `P`.
///
/// A `Dag` can only be obtained through one of its constructors, all of which reject input
/// containing a directed cycle. Once built it can not be changed anymore, which makes it safe
/// to share it between threads.
///
/// The node set is the union of all explicitly passed nodes and every edge endpoint, where
/// nodes are considered equal when they compare equal. Parallel edges between the same pair of
/// nodes are kept, each with its own payload.
///
/// Equality is structural: two graphs are equal when they hold equal nodes and equal edges in
/// the same order. Graphs built from the same nodes and edges passed in a different order
/// compare unequal, even though they describe the same relation.
///
/// ## Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use p2panda_dag::{Dag, Edge};
///
/// // [A]--"foo"-->[B]--"bar"-->[C]
/// let dag = Dag::from_edges([
///     Edge::new('a', 'b', "foo"),
///     Edge::new('b', 'c', "bar"),
/// ])?;
///
/// assert_eq!(dag.nodes(), ['a', 'b', 'c']);
/// assert_eq!(dag.edges_between(&'b', &'c'), [&"bar"]);
///
/// // Closing the loop is not allowed.
/// let result = Dag::from_untyped_edges([('a', 'b'), ('b', 'c'), ('c', 'a')]);
/// assert!(result.is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dag<N, P = ()> {
    pub(crate) adjacency: Adjacency<N>,
    edges: Vec<Edge<N, P>>,
}

impl<N> Dag<N>
where
    N: Ord + Clone + Debug,
{
    /// Returns a graph built from `(source, target)` pairs, each turned into an edge without
    /// payload.
    pub fn from_untyped_edges(
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Result<Self, DagError<N>> {
        Self::from_edges(edges.into_iter().map(Edge::from))
    }
}

impl<N, P> Dag<N, P>
where
    N: Ord + Clone + Debug,
{
    /// Returns a graph without any nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a graph containing the given nodes and no edges.
    ///
    /// Nodes passed more than once are only added a single time. This can't fail as a graph
    /// without edges never contains a cycle.
    pub fn from_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut adjacency = Adjacency::new();
        for node in nodes {
            adjacency.insert_node(&node);
        }

        Self {
            adjacency,
            edges: Vec::new(),
        }
    }

    /// Returns a graph containing all endpoints of the given edges.
    ///
    /// Fails with [`DagError::CycleDetected`] if the edges form a directed cycle, including an
    /// edge pointing from a node to itself.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge<N, P>>) -> Result<Self, DagError<N>> {
        Self::from_nodes_and_edges([], edges)
    }

    /// Returns a graph containing the given nodes, the given edges and all edge endpoints.
    ///
    /// Fails with [`DagError::CycleDetected`] if the edges form a directed cycle.
    pub fn from_nodes_and_edges(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N, P>>,
    ) -> Result<Self, DagError<N>> {
        let edges: Vec<Edge<N, P>> = edges.into_iter().collect();
        let adjacency = builder::build(nodes, &edges)?;
        Ok(Self { adjacency, edges })
    }

    /// Returns all nodes of the graph in the order they were first seen.
    pub fn nodes(&self) -> &[N] {
        &self.adjacency.nodes
    }

    /// Returns all edges of the graph in the order they were given.
    pub fn edges(&self) -> &[Edge<N, P>] {
        &self.edges
    }

    /// Returns true if the node is part of the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.position(node).is_some()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.len() == 0
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consumes the graph and returns its nodes and edges.
    pub fn into_parts(self) -> (Vec<N>, Vec<Edge<N, P>>) {
        (self.adjacency.nodes, self.edges)
    }
}

impl<N, P> Default for Dag<N, P>
where
    N: Ord + Clone,
{
    fn default() -> Self {
        Self {
            adjacency: Adjacency::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, P> TryFrom<Vec<Edge<N, P>>> for Dag<N, P>
where
    N: Ord + Clone + Debug,
{
    type Error = DagError<N>;

    fn try_from(edges: Vec<Edge<N, P>>) -> Result<Self, Self::Error> {
        Self::from_edges(edges)
    }
}
