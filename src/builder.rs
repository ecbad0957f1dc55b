// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assembles the node index and adjacency lists of a graph and checks them for cycles.
use std::collections::BTreeMap;
use std::fmt::Debug;

use tracing::debug;

use crate::edge::Edge;
use crate::error::DagError;

/// Index-based adjacency structure shared by all graph algorithms in this crate.
///
/// Nodes are numbered in the order they were first seen, edges in the order they were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Adjacency<N> {
    /// Deduplicated nodes, in order of first appearance.
    pub nodes: Vec<N>,

    /// Position of every node in `nodes`.
    pub index: BTreeMap<N, usize>,

    /// `(source, target)` node positions of every edge.
    pub endpoints: Vec<(usize, usize)>,

    /// Positions of the edges leaving each node.
    pub outgoing: Vec<Vec<usize>>,

    /// Positions of the edges arriving at each node.
    pub incoming: Vec<Vec<usize>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,

    /// Node is part of the current walk, at the given depth.
    OnStack(usize),

    Done,
}

impl<N> Adjacency<N>
where
    N: Ord + Clone,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
            endpoints: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the position of a node, `None` if it is not part of the graph.
    pub fn position(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Adds a node unless an equal one is already known and returns its position.
    pub fn insert_node(&mut self, node: &N) -> usize {
        if let Some(position) = self.position(node) {
            return position;
        }

        let position = self.nodes.len();
        self.nodes.push(node.clone());
        self.index.insert(node.clone(), position);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        position
    }

    /// Adds an edge, registering both endpoints as nodes when they are new.
    pub fn insert_edge(&mut self, source: &N, target: &N) {
        let source = self.insert_node(source);
        let target = self.insert_node(target);
        let edge = self.endpoints.len();

        self.endpoints.push((source, target));
        self.outgoing[source].push(edge);
        self.incoming[target].push(edge);
    }

    /// Searches for a directed cycle with a depth-first walk started from every node which was
    /// not reached by an earlier walk.
    ///
    /// Returns the positions of the nodes forming the first cycle found, starting and ending
    /// with the same node. Walks are done with an explicit stack so deep graphs can't overflow
    /// the call stack.
    pub fn find_cycle(&self) -> Option<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.len()];

        for root in 0..self.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }

            // Every frame holds a node and the position of the next outgoing edge to follow.
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
            marks[root] = Mark::OnStack(0);

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;

                match self.outgoing[node].get(frame.1) {
                    Some(&edge) => {
                        frame.1 += 1;
                        let target = self.endpoints[edge].1;

                        match marks[target] {
                            Mark::OnStack(depth) => {
                                let mut path: Vec<usize> =
                                    stack[depth..].iter().map(|(node, _)| *node).collect();
                                path.push(target);
                                return Some(path);
                            }
                            Mark::Unvisited => {
                                marks[target] = Mark::OnStack(stack.len());
                                stack.push((target, 0));
                            }
                            Mark::Done => (),
                        }
                    }
                    None => {
                        marks[node] = Mark::Done;
                        stack.pop();
                    }
                }
            }
        }

        None
    }
}

/// Builds the adjacency structure for the given nodes and edges and makes sure it is acyclic.
///
/// Explicitly passed nodes are numbered first, followed by edge endpoints not seen before.
pub(crate) fn build<N, P>(
    nodes: impl IntoIterator<Item = N>,
    edges: &[Edge<N, P>],
) -> Result<Adjacency<N>, DagError<N>>
where
    N: Ord + Clone + Debug,
{
    let mut adjacency = Adjacency::new();

    for node in nodes {
        adjacency.insert_node(&node);
    }

    for edge in edges {
        adjacency.insert_edge(edge.source(), edge.target());
    }

    if let Some(cycle) = adjacency.find_cycle() {
        let path: Vec<N> = cycle
            .into_iter()
            .map(|position| adjacency.nodes[position].clone())
            .collect();
        debug!(?path, "rejecting graph with cycle");
        return Err(DagError::CycleDetected { path });
    }

    debug!(
        nodes = adjacency.len(),
        edges = adjacency.endpoints.len(),
        "built acyclic graph"
    );

    Ok(adjacency)
}
