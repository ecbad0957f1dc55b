// SPDX-License-Identifier: MIT OR Apache-2.0

//! Directed edges between two nodes, optionally carrying a payload.

/// A directed edge from `source` to `target` with an associated payload.
///
/// Edges without any data attached use the unit type as payload, see [`UntypedEdge`].
///
/// Two edges connect the same pair of nodes when their [`key`](Edge::key) is equal. Such
/// parallel edges are kept side by side in a graph but do not add any extra connectivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, P = ()> {
    source: N,
    target: N,
    payload: P,
}

/// Edge without payload.
pub type UntypedEdge<N> = Edge<N, ()>;

impl<N, P> Edge<N, P> {
    /// Create a new edge pointing from `source` to `target`.
    pub fn new(source: N, target: N, payload: P) -> Self {
        Self {
            source,
            target,
            payload,
        }
    }

    /// Node this edge starts at.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Node this edge points to.
    pub fn target(&self) -> &N {
        &self.target
    }

    /// Data attached to this edge.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the ordered `(source, target)` pair identifying which nodes this edge connects.
    pub fn key(&self) -> (&N, &N) {
        (&self.source, &self.target)
    }

    /// Consumes the edge and returns its parts.
    pub fn into_parts(self) -> (N, N, P) {
        (self.source, self.target, self.payload)
    }
}

impl<N: PartialEq, P> Edge<N, P> {
    /// Returns true if this edge points back to the node it starts from.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<N> Edge<N, ()> {
    /// Create a new edge without payload.
    pub fn untyped(source: N, target: N) -> Self {
        Self::new(source, target, ())
    }
}

impl<N> From<(N, N)> for Edge<N, ()> {
    fn from((source, target): (N, N)) -> Self {
        Self::untyped(source, target)
    }
}

impl<N, P> From<(N, N, P)> for Edge<N, P> {
    fn from((source, target, payload): (N, N, P)) -> Self {
        Self::new(source, target, payload)
    }
}
